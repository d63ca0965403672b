//! Auth DTOs shared between the record API and its clients

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub app_name: String,
    pub username: String,
    pub password: String,
}

/// Authenticated session returned by login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub employee_id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub is_authenticated: bool,
    pub token: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Application user record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    pub username: String,
    pub is_active: bool,
    pub created: String,
    #[serde(default)]
    pub roles: Vec<AppUserRole>,
}

/// Role assignment for a user within one application
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUserRole {
    pub role_name: String,
    pub app_name: String,
    pub assigned_date: String,
}
