//! Package record types
//!
//! A package moves through entry, validation, split and reporting; these are
//! the wire shapes the record API exchanges for each step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Master record for one physical package
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub package_id: String,
    pub part_number: String,
    pub quantity: i32,
    pub status: String,
    pub plant: String,
    #[serde(default)]
    pub vendor_lot: Option<String>,
    #[serde(default)]
    pub date_code: Option<String>,
    #[serde(default)]
    pub parent_package_id: Option<String>,
    #[serde(default)]
    pub modified_date: Option<DateTime<Utc>>,
}

/// One pipeline step recorded against a package
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageStatus {
    pub package_id: String,
    pub part_number: String,
    pub process: String,
    pub pass_fail_indicator: String,
    pub modified_date: DateTime<Utc>,
    pub slot: i32,
    pub side_table: String,
    pub station: String,
    pub line: String,
    pub product: String,
    pub board_kit: String,
    pub package_qty: i32,
    pub machine: String,
    pub program: String,
    pub bom_revision: String,
    pub employer_id: String,
    pub scale: i32,
    pub user_defined1: String,
    pub user_defined2: String,
    pub user_defined3: String,
}

/// Package master record plus its recorded steps
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageHistory {
    pub package_info: PackageInfo,
    pub package_statuses: Vec<PackageStatus>,
}

/// Validation payload for a single package
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageValidation {
    #[serde(default)]
    pub expected_status: Option<String>,
    #[serde(default)]
    pub station: Option<String>,
    #[serde(default)]
    pub process: Option<String>,
    #[serde(default)]
    pub material_vendor: Option<String>,
}

/// Split request: divide one package into several
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSplitRequest {
    pub expected_status: String,
    #[serde(default)]
    pub number_of_packages: Option<i32>,
    #[serde(default)]
    pub quantity_per_package: Option<i32>,
    #[serde(default)]
    pub process_to_save: Option<String>,
    #[serde(default)]
    pub station: Option<String>,
    pub updated_qty: i32,
}
