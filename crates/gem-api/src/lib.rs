//! Request-scoped catalog and payment services for GemCompare.
//!
//! This crate is the seam an HTTP router calls into. Every operation takes
//! plain request data (parameter maps, deserialized bodies), runs the core
//! engines and returns a `{success, data|message}` envelope plus an error
//! that maps onto an HTTP status. All services are stateless between
//! requests; the store handle and gateway credentials are the only shared
//! state, both read-only after startup.

pub mod envelope;
pub mod payments;
pub mod products;

pub use envelope::{ApiError, ApiMode, ApiResponse, ApiResult};
pub use payments::{CreateOrderBody, GatewayKey, PaymentApi};
pub use products::{CatalogStats, ProductApi, ProductView};
