//! Print job payload and operator input types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire-format print job accepted by the gateway
///
/// The payload and MIME type are fixed at construction; the destination is
/// filled in by the orchestrator right before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintJob {
    pub data: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub settings: PrintSettings,
}

/// Per-job gateway settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintSettings {
    pub destination: String,
}

impl PrintJob {
    /// Create a job with an empty destination
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
            settings: PrintSettings::default(),
        }
    }

    /// Set the destination printer
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.settings.destination = destination.into();
        self
    }
}

/// A printer name known to the gateway
///
/// The set of destinations is fetched fresh on every picker open, never
/// cached across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Destination {
    pub name: String,
}

impl From<String> for Destination {
    fn from(name: String) -> Self {
        Self { name }
    }
}

impl From<&str> for Destination {
    fn from(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Operator credentials held only while one job awaits authentication
///
/// Never persisted; dropped after dispatch or cancellation.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_wire_format() {
        let job = PrintJob::new("X", "text/plain").with_destination("HP-Label-1");
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["mimeType"], "text/plain");
        assert_eq!(json["settings"]["destination"], "HP-Label-1");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("operator", "hunter2");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("operator"));
        assert!(!rendered.contains("hunter2"));
    }
}
