//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog domain operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A record failed domain validation before reaching the store.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
