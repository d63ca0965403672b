//! Qualify Client - HTTP client for the record API
//!
//! Provides typed calls to the package record API, with an explicit token
//! holder instead of process-wide mutable auth state.

pub mod error;
pub mod http;
pub mod token;

pub use error::{ClientError, ClientResult};
pub use http::ApiClient;
pub use token::TokenHolder;

// Re-export shared types for convenience
pub use shared::ApiResponse;
pub use shared::client::{AppUser, AuthState, LoginRequest};
