//! Payment session creation and callback signature verification.

use crate::{GatewayOrder, OrderRequest, PaymentConfig, PaymentError, PaymentGateway};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

/// Checkout currency. Multi-currency is out of scope.
const CURRENCY: &str = "INR";

/// Minor units per major unit (paise per rupee).
const MINOR_PER_MAJOR: f64 = 100.0;

/// A signed payment notification from the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCallback {
    /// Gateway order identifier.
    pub order_id: String,
    /// Gateway payment identifier.
    pub payment_id: String,
    /// Hex-encoded HMAC-SHA256 over `order_id|payment_id`.
    pub signature: String,
}

/// Outcome of a callback verification.
///
/// `Invalid` is an expected business result, not an error: the payment is
/// simply not confirmed. There is no partial or soft success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verification {
    /// The signature matches exactly; the notification is authentic.
    Verified,
    /// The signature does not match; the notification must not be trusted.
    Invalid,
}

impl Verification {
    pub fn is_verified(&self) -> bool {
        matches!(self, Verification::Verified)
    }
}

/// Creates payment sessions and verifies gateway callbacks.
///
/// Owns an injected gateway client and the process-wide credentials;
/// holds no mutable state, so every operation is request-scoped.
#[derive(Debug)]
pub struct PaymentVerifier<G> {
    gateway: G,
    config: PaymentConfig,
}

impl<G: PaymentGateway> PaymentVerifier<G> {
    /// Build a verifier around a gateway client and credentials.
    pub fn new(gateway: G, config: PaymentConfig) -> Self {
        Self { gateway, config }
    }

    /// The gateway public key id, needed client-side to open the widget.
    pub fn key_id(&self) -> &str {
        self.config.key_id()
    }

    /// Open a payment session for an amount in major units (rupees).
    ///
    /// Rejects non-positive amounts before any gateway call is made. The
    /// session is tagged with a fresh time-derived receipt token so
    /// concurrent checkouts never collide.
    pub fn create_session(&self, amount: f64) -> Result<GatewayOrder, PaymentError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(PaymentError::InvalidAmount(amount));
        }

        let request = OrderRequest {
            amount: (amount * MINOR_PER_MAJOR).round() as i64,
            currency: CURRENCY.to_string(),
            receipt: receipt_token(),
        };

        debug!(amount = request.amount, receipt = %request.receipt, "creating payment session");
        let order = self.gateway.create_order(&request)?;
        Ok(order)
    }

    /// Verify a gateway callback signature.
    ///
    /// Missing fields are malformed input and fail with an error. A
    /// mismatched signature is NOT an error: it returns
    /// [`Verification::Invalid`]. Pure judgment — no side effects, so
    /// verifying the same callback twice yields the same outcome.
    pub fn verify(&self, callback: &PaymentCallback) -> Result<Verification, PaymentError> {
        if callback.order_id.is_empty() {
            return Err(PaymentError::MissingField("orderId"));
        }
        if callback.payment_id.is_empty() {
            return Err(PaymentError::MissingField("paymentId"));
        }
        if callback.signature.is_empty() {
            return Err(PaymentError::MissingField("signature"));
        }

        let expected = self.sign(&callback.order_id, &callback.payment_id)?;

        // Constant-time comparison; an ordinary equality check would leak
        // how many leading bytes of a forged signature were correct.
        let matches: bool = expected
            .as_bytes()
            .ct_eq(callback.signature.as_bytes())
            .into();

        if matches {
            debug!(order_id = %callback.order_id, "payment signature verified");
            Ok(Verification::Verified)
        } else {
            warn!(order_id = %callback.order_id, "payment signature mismatch");
            Ok(Verification::Invalid)
        }
    }

    /// Compute the hex HMAC-SHA256 signature for an `(order, payment)`
    /// pair. This is what an authentic gateway callback carries; exposed
    /// for tests and gateway simulators.
    pub fn sign(&self, order_id: &str, payment_id: &str) -> Result<String, PaymentError> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.config.secret().as_bytes())
            .map_err(|_| PaymentError::Config("unusable signing secret".to_string()))?;
        mac.update(order_id.as_bytes());
        mac.update(b"|");
        mac.update(payment_id.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

/// Generate a unique, time-derived receipt token.
fn receipt_token() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let entropy: u32 = rand::random();
    format!("receipt_order_{}_{:08x}", millis, entropy)
}
