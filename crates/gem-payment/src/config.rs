//! Payment gateway configuration.

use crate::PaymentError;
use std::fmt;

/// Environment variable holding the gateway public key id.
const ENV_KEY_ID: &str = "PAYMENT_GATEWAY_KEY_ID";
/// Environment variable holding the gateway shared secret.
const ENV_KEY_SECRET: &str = "PAYMENT_GATEWAY_KEY_SECRET";

/// Process-wide gateway credentials, read once at startup.
///
/// `key_id` is the public half, safe to hand to the payment widget.
/// `secret` is the gateway's shared secret used for callback signatures —
/// it is never logged, never serialized and never returned to a client.
#[derive(Clone)]
pub struct PaymentConfig {
    key_id: String,
    secret: String,
}

impl PaymentConfig {
    /// Build a config from explicit values (tests, dependency injection).
    pub fn new(key_id: impl Into<String>, secret: impl Into<String>) -> Result<Self, PaymentError> {
        let key_id = key_id.into();
        let secret = secret.into();
        if key_id.is_empty() {
            return Err(PaymentError::Config("gateway key id is empty".to_string()));
        }
        if secret.is_empty() {
            return Err(PaymentError::Config("gateway secret is empty".to_string()));
        }
        Ok(Self { key_id, secret })
    }

    /// Read the config from the process environment.
    pub fn from_env() -> Result<Self, PaymentError> {
        let key_id = std::env::var(ENV_KEY_ID)
            .map_err(|_| PaymentError::Config(format!("{} is not set", ENV_KEY_ID)))?;
        let secret = std::env::var(ENV_KEY_SECRET)
            .map_err(|_| PaymentError::Config(format!("{} is not set", ENV_KEY_SECRET)))?;
        Self::new(key_id, secret)
    }

    /// The public key id.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// The shared signing secret. Crate-internal on purpose.
    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }
}

// The secret must not leak through debug formatting.
impl fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("key_id", &self.key_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_empty_parts() {
        assert!(PaymentConfig::new("", "secret").is_err());
        assert!(PaymentConfig::new("key", "").is_err());
        assert!(PaymentConfig::new("key", "secret").is_ok());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = PaymentConfig::new("rzp_test_key", "super-secret").unwrap();
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("rzp_test_key"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
