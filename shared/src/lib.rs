//! Shared types for the Qualify workspace
//!
//! Boundary types exchanged with the record API: the response envelope,
//! auth DTOs, and package record models.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use response::ApiResponse;
