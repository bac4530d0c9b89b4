//! Response envelopes and the API error taxonomy.

use gem_commerce::search::{Pagination, TranslationDiagnostics};
use gem_commerce::CommerceError;
use gem_payment::{GatewayError, PaymentError};
use gem_store::StoreError;
use serde::Serialize;
use thiserror::Error;

/// Deployment mode; controls whether diagnostics reach responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiMode {
    Production,
    #[default]
    Development,
}

impl ApiMode {
    /// Read the mode from `APP_ENV` (`production` or anything else).
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV").as_deref() {
            Ok("production") => ApiMode::Production,
            _ => ApiMode::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, ApiMode::Production)
    }
}

/// The JSON envelope every endpoint returns.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<TranslationDiagnostics>,
}

impl<T> ApiResponse<T> {
    /// A successful envelope carrying data.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            count: None,
            pagination: None,
            diagnostics: None,
        }
    }

    /// A successful envelope carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            count: None,
            pagination: None,
            diagnostics: None,
        }
    }

    /// A failed envelope carrying a message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            count: None,
            pagination: None,
            diagnostics: None,
        }
    }

    /// Attach a result count (list responses).
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Attach pagination metadata (list responses).
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Attach translation diagnostics (non-production only).
    pub fn with_diagnostics(mut self, diagnostics: TranslationDiagnostics) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }
}

/// Errors the router maps onto HTTP statuses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed request input.
    #[error("{0}")]
    BadRequest(String),

    /// Input failed domain validation.
    #[error("{0}")]
    Validation(String),

    /// The addressed resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A collaborator failed transiently; the client may retry.
    #[error("{0}")]
    Upstream(String),

    /// An unexpected server-side failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Upstream(_) => 503,
            ApiError::Internal(_) => 500,
        }
    }

    /// Whether the client may retry the request unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Upstream(_))
    }

    /// Render as a failed envelope.
    pub fn to_response(&self) -> ApiResponse<()> {
        ApiResponse::fail(self.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => ApiError::NotFound(e.to_string()),
            StoreError::Duplicate(_) | StoreError::Validation(_) => {
                ApiError::Validation(e.to_string())
            }
            StoreError::Timeout(_) | StoreError::Unavailable(_) => {
                ApiError::Upstream(e.to_string())
            }
            StoreError::Serialization(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<PaymentError> for ApiError {
    fn from(e: PaymentError) -> Self {
        match e {
            PaymentError::InvalidAmount(_) => ApiError::Validation(e.to_string()),
            PaymentError::MissingField(_) => ApiError::BadRequest(e.to_string()),
            PaymentError::Config(_) => ApiError::Internal(e.to_string()),
            PaymentError::Gateway(ref gateway) => match gateway {
                GatewayError::Timeout(_) | GatewayError::Unavailable(_) => {
                    ApiError::Upstream(e.to_string())
                }
                GatewayError::Rejected(_) => ApiError::Internal(e.to_string()),
            },
        }
    }
}

impl From<CommerceError> for ApiError {
    fn from(e: CommerceError) -> Self {
        match e {
            CommerceError::Validation(_) => ApiError::Validation(e.to_string()),
            CommerceError::Serialization(_) => ApiError::Internal(e.to_string()),
        }
    }
}

/// Shorthand for service results.
pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_omits_empty_fields() {
        let json = serde_json::to_value(ApiResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("message").is_none());
        assert!(json.get("pagination").is_none());
        assert!(json.get("diagnostics").is_none());
    }

    #[test]
    fn test_fail_envelope_shape() {
        let json =
            serde_json::to_value(ApiResponse::<()>::fail("Invalid signature")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid signature");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::Validation("x".to_string()).status_code(), 400);
        assert_eq!(ApiError::NotFound("x".to_string()).status_code(), 404);
        assert_eq!(ApiError::Upstream("x".to_string()).status_code(), 503);
        assert!(ApiError::Upstream("x".to_string()).is_retryable());
        assert!(!ApiError::Validation("x".to_string()).is_retryable());
    }

    #[test]
    fn test_store_timeout_maps_to_retryable_upstream() {
        let err: ApiError = StoreError::Timeout("find".to_string()).into();
        assert!(err.is_retryable());
        assert_eq!(err.status_code(), 503);
    }

    #[test]
    fn test_missing_callback_field_maps_to_bad_request() {
        let err: ApiError = PaymentError::MissingField("signature").into();
        assert_eq!(err.status_code(), 400);
        assert!(!err.is_retryable());
    }
}
