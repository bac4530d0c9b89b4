//! Payment session creation and callback verification for GemCompare.
//!
//! Checkout runs through a third-party gateway: the server creates a
//! payment session, the buyer pays in the gateway widget, and the gateway
//! calls back with an HMAC-signed `(order, payment)` pair. Whether money is
//! considered received hinges entirely on that signature check, so the
//! verification path is the security-critical core of this crate.
//!
//! The gateway client is an injected trait object, not module-global state,
//! so tests substitute a fake without touching process environment.
//!
//! # Example
//!
//! ```rust,ignore
//! use gem_payment::prelude::*;
//!
//! let verifier = PaymentVerifier::new(gateway, config);
//! let order = verifier.create_session(1499.0)?;
//!
//! // later, from the gateway callback
//! match verifier.verify(&callback)? {
//!     Verification::Verified => { /* mark the order paid */ }
//!     Verification::Invalid => { /* reject: signature mismatch */ }
//! }
//! ```

mod config;
mod error;
mod gateway;
mod verifier;

pub use config::PaymentConfig;
pub use error::{GatewayError, PaymentError};
pub use gateway::{GatewayOrder, OrderRequest, PaymentGateway};
pub use verifier::{PaymentCallback, PaymentVerifier, Verification};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        GatewayError, GatewayOrder, OrderRequest, PaymentCallback, PaymentConfig, PaymentError,
        PaymentGateway, PaymentVerifier, Verification,
    };
}
