//! Plant master data

use serde::{Deserialize, Serialize};

/// Manufacturing plant known to the record API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantInfo {
    pub plant_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
