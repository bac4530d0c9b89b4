//! Payment endpoints: create-order, verify, gateway key.

use crate::envelope::{ApiResponse, ApiResult};
use gem_payment::{GatewayOrder, PaymentCallback, PaymentGateway, PaymentVerifier, Verification};
use serde::{Deserialize, Serialize};

/// Body of a create-order request: the amount in major units (rupees).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CreateOrderBody {
    pub amount: f64,
}

/// The gateway public key id, for the client-side widget.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayKey {
    pub key: String,
}

/// Payment service over an injected verifier.
#[derive(Debug)]
pub struct PaymentApi<G> {
    verifier: PaymentVerifier<G>,
}

impl<G: PaymentGateway> PaymentApi<G> {
    /// Build the service.
    pub fn new(verifier: PaymentVerifier<G>) -> Self {
        Self { verifier }
    }

    /// Open a payment session; the gateway descriptor goes back verbatim.
    pub fn create_order(&self, body: &CreateOrderBody) -> ApiResult<GatewayOrder> {
        let order = self.verifier.create_session(body.amount)?;
        Ok(ApiResponse::ok(order))
    }

    /// Verify a gateway callback.
    ///
    /// A signature mismatch is a failed envelope (client-class), never a
    /// server error; malformed input surfaces as [`crate::ApiError`].
    pub fn verify(&self, callback: &PaymentCallback) -> ApiResult<()> {
        match self.verifier.verify(callback)? {
            Verification::Verified => Ok(ApiResponse::message("Payment verified successfully")),
            Verification::Invalid => Ok(ApiResponse::fail("Invalid signature")),
        }
    }

    /// The public key id for the payment widget.
    pub fn gateway_key(&self) -> ApiResponse<GatewayKey> {
        ApiResponse::ok(GatewayKey {
            key: self.verifier.key_id().to_string(),
        })
    }
}
