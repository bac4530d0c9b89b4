//! Store error types.

use thiserror::Error;

/// Errors that can occur in catalog store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No product with the given identifier.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A product with the same identifier already exists.
    #[error("Duplicate product: {0}")]
    Duplicate(String),

    /// The record failed validation before being written.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The store did not answer within its deadline. Retryable.
    #[error("Store timeout during {0}")]
    Timeout(String),

    /// The store is unreachable. Retryable.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Whether the caller may retry the operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Timeout(_) | StoreError::Unavailable(_))
    }
}

impl From<gem_commerce::CommerceError> for StoreError {
    fn from(e: gem_commerce::CommerceError) -> Self {
        StoreError::Validation(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}
