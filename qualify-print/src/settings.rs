//! Persisted gateway settings
//!
//! One JSON file at a fixed path. Missing or malformed data always falls
//! back to defaults; corruption is never surfaced to the operator.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Fallback gateway address when nothing has been persisted
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:9090";

/// Gateway address and chosen default destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewaySettings {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_destination: Option<String>,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_GATEWAY_URL.to_string(),
            default_destination: None,
        }
    }
}

/// Settings store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Whether any settings were ever persisted (first-run detection)
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load persisted settings, falling back to defaults
    pub fn load(&self) -> GatewaySettings {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return GatewaySettings::default();
        };
        serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!(error = %e, path = %self.path.display(), "Malformed gateway settings, using defaults");
            GatewaySettings::default()
        })
    }

    /// Persist settings, replacing the file atomically
    ///
    /// Writes a sibling temp file and renames it over the target so a
    /// concurrent reader never observes a partial write.
    pub fn save(&self, settings: &GatewaySettings) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }

    /// Get the settings file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SettingsStore {
        SettingsStore::new(dir.path().join("gateway-settings.json"))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(!store.exists());
        let settings = store.load();
        assert_eq!(settings.url, DEFAULT_GATEWAY_URL);
        assert!(settings.default_destination.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let settings = GatewaySettings {
            url: "http://localhost:9090".to_string(),
            default_destination: Some("HP-Label-1".to_string()),
        };
        store.save(&settings).unwrap();

        assert!(store.exists());
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "{not json").unwrap();

        assert!(store.exists());
        assert_eq!(store.load(), GatewaySettings::default());
    }

    #[test]
    fn test_persisted_json_uses_camel_case() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let settings = GatewaySettings {
            url: DEFAULT_GATEWAY_URL.to_string(),
            default_destination: Some("B".to_string()),
        };
        store.save(&settings).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("defaultDestination"));
    }
}
