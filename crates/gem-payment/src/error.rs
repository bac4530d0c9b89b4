//! Payment error types.

use thiserror::Error;

/// Errors from the payment gateway collaborator.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The gateway did not answer within its deadline. Retryable.
    #[error("Gateway timeout during {0}")]
    Timeout(String),

    /// The gateway is unreachable. Retryable.
    #[error("Gateway unavailable: {0}")]
    Unavailable(String),

    /// The gateway rejected the request.
    #[error("Gateway rejected request: {0}")]
    Rejected(String),
}

impl GatewayError {
    /// Whether the caller may retry the operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Timeout(_) | GatewayError::Unavailable(_))
    }
}

/// Errors that can occur in payment operations.
///
/// A mismatched callback signature is deliberately NOT an error — it is a
/// normal business outcome reported as [`crate::Verification::Invalid`].
/// Only malformed input, invalid configuration and upstream failures
/// surface here.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Checkout amount must be strictly positive.
    #[error("Invalid payment amount: {0}")]
    InvalidAmount(f64),

    /// A required callback field is missing or empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The gateway configuration is unusable.
    #[error("Payment configuration error: {0}")]
    Config(String),

    /// The gateway call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl PaymentError {
    /// Whether the caller may retry the operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PaymentError::Gateway(e) if e.is_retryable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_upstream_failures_are_retryable() {
        assert!(PaymentError::Gateway(GatewayError::Timeout("create".to_string())).is_retryable());
        assert!(!PaymentError::Gateway(GatewayError::Rejected("bad".to_string())).is_retryable());
        assert!(!PaymentError::InvalidAmount(0.0).is_retryable());
        assert!(!PaymentError::MissingField("signature").is_retryable());
    }
}
