//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
