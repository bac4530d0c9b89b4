//! Marketplace offer types.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Supported open-market marketplaces (closed enumeration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Marketplace {
    Amazon,
    Flipkart,
    Meesho,
    #[default]
    Other,
}

impl Marketplace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Marketplace::Amazon => "Amazon",
            Marketplace::Flipkart => "Flipkart",
            Marketplace::Meesho => "Meesho",
            Marketplace::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Amazon" => Some(Marketplace::Amazon),
            "Flipkart" => Some(Marketplace::Flipkart),
            "Meesho" => Some(Marketplace::Meesho),
            "Other" => Some(Marketplace::Other),
            _ => None,
        }
    }
}

/// A third-party marketplace listing for a catalog product.
///
/// Owned exclusively by its [`Product`](crate::catalog::Product); offers
/// have no independent lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceOffer {
    /// Which marketplace carries the listing.
    pub marketplace: Marketplace,
    /// Listing URL.
    pub product_url: String,
    /// Listed price. Never negative.
    pub price: f64,
    /// Discount percentage currently applied.
    #[serde(default)]
    pub discount: f64,
    /// Whether the listing is currently purchasable.
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl MarketplaceOffer {
    /// Create an available offer with no discount.
    pub fn new(marketplace: Marketplace, product_url: impl Into<String>, price: f64) -> Self {
        Self {
            marketplace,
            product_url: product_url.into(),
            price,
            discount: 0.0,
            is_available: true,
        }
    }

    /// Mark the offer unavailable.
    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }

    /// Validate offer invariants.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.product_url.trim().is_empty() {
            return Err(CommerceError::Validation(
                "offer URL must not be empty".to_string(),
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CommerceError::Validation(format!(
                "offer price must be a non-negative number, got {}",
                self.price
            )));
        }
        if !self.discount.is_finite() || self.discount < 0.0 {
            return Err(CommerceError::Validation(format!(
                "offer discount must be a non-negative percentage, got {}",
                self.discount
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_defaults() {
        let offer = MarketplaceOffer::new(Marketplace::Amazon, "https://amazon.in/dp/x", 499.0);
        assert!(offer.is_available);
        assert_eq!(offer.discount, 0.0);
        assert!(offer.validate().is_ok());
    }

    #[test]
    fn test_offer_deserialize_fills_defaults() {
        let offer: MarketplaceOffer = serde_json::from_str(
            r#"{"marketplace":"Flipkart","productUrl":"https://flipkart.com/p/y","price":450}"#,
        )
        .unwrap();
        assert_eq!(offer.marketplace, Marketplace::Flipkart);
        assert!(offer.is_available);
        assert_eq!(offer.discount, 0.0);
    }

    #[test]
    fn test_unknown_marketplace_rejected() {
        let result: Result<MarketplaceOffer, _> = serde_json::from_str(
            r#"{"marketplace":"Ebay","productUrl":"https://ebay.com/p","price":10}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_offer_validation() {
        let mut offer = MarketplaceOffer::new(Marketplace::Meesho, "https://meesho.com/p", 100.0);
        offer.discount = -5.0;
        assert!(offer.validate().is_err());
    }
}
