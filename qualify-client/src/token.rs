//! Explicit auth token holder
//!
//! One holder is constructed at startup and handed to every component that
//! needs the session token. Clones share the same underlying state, so a
//! login or logout is visible everywhere at once.

use std::sync::{Arc, RwLock};

/// Shared session token state
#[derive(Debug, Clone, Default)]
pub struct TokenHolder {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fresh token
    pub fn set_token(&self, token: impl Into<String>) {
        *self.write() = Some(token.into());
    }

    /// Drop the stored token
    pub fn clear_token(&self) {
        *self.write() = None;
    }

    /// Current token, if a session is active
    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Whether a token is currently held
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<String>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}
