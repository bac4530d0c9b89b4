//! End-to-end payment flow: session creation and callback verification.

use gem_api::{ApiError, CreateOrderBody, PaymentApi};
use gem_payment::{
    GatewayError, GatewayOrder, OrderRequest, PaymentCallback, PaymentConfig, PaymentGateway,
    PaymentVerifier,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Gateway double: echoes requests and counts calls.
#[derive(Clone)]
struct FakeGateway {
    calls: Arc<AtomicUsize>,
    fail_with: Option<fn() -> GatewayError>,
}

impl FakeGateway {
    fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            fail_with: None,
        }
    }

    fn failing(fail_with: fn() -> GatewayError) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            fail_with: Some(fail_with),
        }
    }
}

impl PaymentGateway for FakeGateway {
    fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, GatewayError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(fail) = self.fail_with {
            return Err(fail());
        }
        Ok(GatewayOrder {
            id: format!("order_{call}"),
            amount: request.amount,
            currency: request.currency.clone(),
            receipt: request.receipt.clone(),
        })
    }
}

fn config() -> PaymentConfig {
    PaymentConfig::new("rzp_test_key", "integration-secret").unwrap()
}

fn api_with(gateway: FakeGateway) -> PaymentApi<FakeGateway> {
    PaymentApi::new(PaymentVerifier::new(gateway, config()))
}

/// Sign a callback the way an authentic gateway would.
fn signed_callback(order_id: &str, payment_id: &str) -> PaymentCallback {
    let signer = PaymentVerifier::new(FakeGateway::new(), config());
    PaymentCallback {
        order_id: order_id.to_string(),
        payment_id: payment_id.to_string(),
        signature: signer.sign(order_id, payment_id).unwrap(),
    }
}

#[test]
fn test_create_order_returns_gateway_descriptor() {
    let api = api_with(FakeGateway::new());
    let response = api
        .create_order(&CreateOrderBody { amount: 1499.0 })
        .unwrap();
    assert!(response.success);
    let order = response.data.unwrap();
    assert_eq!(order.amount, 149900);
    assert_eq!(order.currency, "INR");
    assert_eq!(order.id, "order_1");
}

#[test]
fn test_create_order_rejects_non_positive_amounts() {
    let gateway = FakeGateway::new();
    let calls = gateway.calls.clone();
    let api = api_with(gateway);

    for bad in [0.0, -5.0] {
        let err = api.create_order(&CreateOrderBody { amount: bad }).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.status_code(), 400);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_gateway_timeout_is_retryable_upstream() {
    let api = api_with(FakeGateway::failing(|| {
        GatewayError::Timeout("create order".to_string())
    }));
    let err = api.create_order(&CreateOrderBody { amount: 10.0 }).unwrap_err();
    assert!(matches!(err, ApiError::Upstream(_)));
    assert!(err.is_retryable());
    assert_eq!(err.status_code(), 503);
}

#[test]
fn test_verify_accepts_authentic_callback() {
    let api = api_with(FakeGateway::new());
    let callback = signed_callback("order_1", "pay_7");
    let response = api.verify(&callback).unwrap();
    assert!(response.success);
    assert_eq!(response.message.as_deref(), Some("Payment verified successfully"));
}

#[test]
fn test_verify_rejects_tampered_signature_as_business_failure() {
    let api = api_with(FakeGateway::new());
    let mut callback = signed_callback("order_1", "pay_7");
    callback.signature = callback.signature.replace(
        callback.signature.chars().next().unwrap(),
        if callback.signature.starts_with('0') { "1" } else { "0" },
    );

    // Mismatch is an envelope failure, never an Err.
    let response = api.verify(&callback).unwrap();
    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some("Invalid signature"));
}

#[test]
fn test_verify_rejects_callback_for_other_order() {
    let api = api_with(FakeGateway::new());
    let mut callback = signed_callback("order_1", "pay_7");
    callback.order_id = "order_2".to_string();
    let response = api.verify(&callback).unwrap();
    assert!(!response.success);
}

#[test]
fn test_verify_missing_field_is_bad_request() {
    let api = api_with(FakeGateway::new());
    let mut callback = signed_callback("order_1", "pay_7");
    callback.signature = String::new();
    let err = api.verify(&callback).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
    assert_eq!(err.status_code(), 400);
}

#[test]
fn test_verify_twice_gives_identical_envelopes() {
    let api = api_with(FakeGateway::new());
    let callback = signed_callback("order_1", "pay_7");
    let first = api.verify(&callback).unwrap();
    let second = api.verify(&callback).unwrap();
    assert_eq!(first.success, second.success);
    assert_eq!(first.message, second.message);
}

#[test]
fn test_gateway_key_exposes_only_public_half() {
    let api = api_with(FakeGateway::new());
    let json = serde_json::to_value(api.gateway_key()).unwrap();
    assert_eq!(json["data"]["key"], "rzp_test_key");
    assert!(!json.to_string().contains("integration-secret"));
}
