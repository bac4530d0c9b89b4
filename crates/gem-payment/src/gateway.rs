//! The payment gateway seam.

use crate::GatewayError;
use serde::{Deserialize, Serialize};

/// A request to open a payment session at the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Amount in minor currency units (paise).
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
    /// Unique receipt token for this checkout attempt.
    pub receipt: String,
}

/// The gateway's session descriptor.
///
/// Returned verbatim to the caller — the client needs it to open the
/// payment widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayOrder {
    /// Gateway-assigned session identifier.
    pub id: String,
    /// Amount in minor currency units, echoed by the gateway.
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
    /// The receipt token the session was created with.
    pub receipt: String,
}

/// A third-party payment gateway client.
///
/// Implementations own their transport and timeout; expiry surfaces as
/// [`GatewayError::Timeout`], a retryable failure, never as a signature
/// problem.
pub trait PaymentGateway {
    /// Create a payment session for the given order request.
    fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, GatewayError>;
}
