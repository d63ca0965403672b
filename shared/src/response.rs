//! API response envelope
//!
//! Every record API endpoint answers with this shape:
//! ```json
//! {
//!     "succeeded": true,
//!     "data": { ... },
//!     "error": "...",
//!     "errorDetails": ["..."]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Unified response envelope for the record API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the call succeeded
    pub succeeded: bool,
    /// Response data (present on success)
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-field or per-record error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    /// Create a successful envelope
    pub fn ok(data: T) -> Self {
        Self {
            succeeded: true,
            data: Some(data),
            error: None,
            error_details: None,
        }
    }

    /// Create an error envelope
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            data: None,
            error: Some(message.into()),
            error_details: None,
        }
    }

    /// Create an error envelope with details
    pub fn error_with_details(message: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            succeeded: false,
            data: None,
            error: Some(message.into()),
            error_details: Some(details),
        }
    }

    /// Unwrap into `Result`, treating a success without data as an error
    pub fn into_result(self) -> Result<T, String> {
        match (self.succeeded, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("Response succeeded without data".to_string()),
            (false, _) => Err(self.error.unwrap_or_else(|| "Unknown error".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_wire_names() {
        let response: ApiResponse<()> =
            ApiResponse::error_with_details("Validation failed", vec!["PackageId is required".into()]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["succeeded"], false);
        assert_eq!(json["errorDetails"][0], "PackageId is required");
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ApiResponse::ok(1).into_result(), Ok(1));
        assert!(ApiResponse::<i32>::error("boom").into_result().is_err());
    }
}
