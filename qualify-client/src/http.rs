//! HTTP client for the record API
//!
//! Every endpoint answers with the `ApiResponse` envelope; transport
//! failures are folded into an error envelope so callers always receive one
//! and can render `error`/`errorDetails` directly.

use crate::error::{ClientError, ClientResult};
use crate::token::TokenHolder;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::ApiResponse;
use shared::client::{AppUser, AuthState, LoginRequest};
use shared::models::{
    PackageHistory, PackageInfo, PackageSplitRequest, PackageStatus, PackageValidation, PlantInfo,
};
use std::time::Duration;
use tracing::warn;

/// HTTP client for the Qualify record API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: TokenHolder,
}

impl ApiClient {
    /// Create a client with the default 30 second timeout
    pub fn new(base_url: impl Into<String>, token: TokenHolder) -> Self {
        Self::with_timeout(base_url, token, Duration::from_secs(30))
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        token: TokenHolder,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            base_url: base_url.into(),
            token,
        }
    }

    /// Access the token holder this client was constructed with
    pub fn token_holder(&self) -> &TokenHolder {
        &self.token
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ClientResult<ApiResponse<T>> {
        let response = self.authorize(request).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }
        if !status.is_success() {
            // Error statuses may still carry an envelope with the message.
            let text = response.text().await?;
            if let Ok(envelope) = serde_json::from_str::<ApiResponse<T>>(&text) {
                return Ok(envelope);
            }
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: text,
            });
        }

        response.json().await.map_err(Into::into)
    }

    /// Fold any client error into an error envelope
    async fn request<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResponse<T> {
        match self.send(request).await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(error = %e, "Record API call failed");
                ApiResponse::error(e.to_string())
            }
        }
    }

    // ========== Auth API ==========

    /// Login; the returned token is stored in the holder on success
    pub async fn login(
        &self,
        app_name: &str,
        username: &str,
        password: &str,
    ) -> ApiResponse<AuthState> {
        let body = LoginRequest {
            app_name: app_name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: ApiResponse<AuthState> =
            self.request(self.client.post(self.url("Auth/Login")).json(&body)).await;

        if let Some(auth) = response.data.as_ref()
            && !auth.token.is_empty()
        {
            self.token.set_token(&auth.token);
        }
        response
    }

    /// Drop the session token
    pub fn logout(&self) {
        self.token.clear_token();
    }

    /// List users registered for an application
    pub async fn get_all_users(&self, app_name: &str) -> ApiResponse<Vec<AppUser>> {
        self.request(
            self.client
                .get(self.url("Auth/All"))
                .query(&[("AppName", app_name)]),
        )
        .await
    }

    // ========== Package API ==========

    pub async fn get_package_info(&self, package_id: &str) -> ApiResponse<PackageInfo> {
        self.request(
            self.client
                .get(self.url("PackageInfo"))
                .query(&[("PackageId", package_id)]),
        )
        .await
    }

    pub async fn update_package_info(
        &self,
        package_id: &str,
        data: &PackageInfo,
    ) -> ApiResponse<PackageInfo> {
        self.request(
            self.client
                .put(self.url(&format!("PackageInfo/{package_id}")))
                .json(data),
        )
        .await
    }

    pub async fn split_package(
        &self,
        package_id: &str,
        data: &PackageSplitRequest,
    ) -> ApiResponse<Vec<PackageInfo>> {
        self.request(
            self.client
                .post(self.url(&format!("PackageInfo/{package_id}/split")))
                .json(data),
        )
        .await
    }

    pub async fn validate_package(
        &self,
        package_id: &str,
        data: &PackageValidation,
    ) -> ApiResponse<PackageInfo> {
        self.request(
            self.client
                .post(self.url(&format!("PackageInfo/{package_id}/validate")))
                .json(data),
        )
        .await
    }

    /// Validate against the approved vendor list
    pub async fn validate_avl_package(
        &self,
        package_id: &str,
        data: &PackageValidation,
    ) -> ApiResponse<PackageInfo> {
        self.request(
            self.client
                .post(self.url(&format!("PackageInfo/{package_id}/validate/AVL")))
                .json(data),
        )
        .await
    }

    pub async fn validate_package_list(&self, package_ids: &[String]) -> ApiResponse<Vec<PackageInfo>> {
        self.request(
            self.client
                .post(self.url("PackageInfo/validate/list"))
                .json(&package_ids),
        )
        .await
    }

    pub async fn get_package_history(&self, package_id: &str) -> ApiResponse<PackageHistory> {
        self.request(
            self.client
                .get(self.url(&format!("PackageInfo/{package_id}/history"))),
        )
        .await
    }

    pub async fn add_package_status(&self, data: &PackageStatus) -> ApiResponse<PackageStatus> {
        self.request(self.client.post(self.url("PackageStatus")).json(data))
            .await
    }

    pub async fn get_package_status(&self, package_id: &str) -> ApiResponse<Vec<PackageStatus>> {
        self.request(
            self.client
                .get(self.url("PackageStatus"))
                .query(&[("PackageId", package_id)]),
        )
        .await
    }

    pub async fn get_plants(&self) -> ApiResponse<Vec<PlantInfo>> {
        self.request(self.client.get(self.url("PlantInfo"))).await
    }
}
