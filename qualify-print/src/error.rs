//! Error types for the print orchestration core

use thiserror::Error;

/// Print flow error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// Gateway could not be reached for a destination listing
    #[error("Gateway unreachable: {0}")]
    GatewayUnreachable(String),

    /// Gateway rejected the job or the transport failed during submission
    #[error("Dispatch failed: {0}")]
    DispatchFailed(String),

    /// Operator input rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for print flow operations
pub type PrintResult<T> = Result<T, PrintError>;
