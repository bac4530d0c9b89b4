//! Cross-marketplace price comparison.
//!
//! Pure, deterministic computation over a single product: no I/O, no side
//! effects, which is what keeps it independently unit-testable.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// The market comparison for one catalog product.
///
/// `lowest_marketplace_price` is `0.0` when no offer is available — not a
/// null — so downstream arithmetic stays total. That convention collides
/// with a legitimately free product; `has_market_offer` carries the
/// distinction explicitly, so consumers never infer offer presence from the
/// numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceComparison {
    /// Minimum price among offers with `is_available == true`; `0.0` when
    /// no offer is available.
    pub lowest_marketplace_price: f64,
    /// `lowest_marketplace_price - gem_price`. Positive means the GeM
    /// catalog is cheaper; the sign is not renormalized.
    pub savings: f64,
    /// Whether any available marketplace offer was found.
    pub has_market_offer: bool,
}

impl PriceComparison {
    /// Compute the comparison for a product.
    pub fn of(product: &Product) -> Self {
        let lowest = product
            .marketplace_prices
            .iter()
            .filter(|offer| offer.is_available)
            .map(|offer| offer.price)
            .fold(None, |acc: Option<f64>, price| {
                Some(acc.map_or(price, |current| current.min(price)))
            });

        let has_market_offer = lowest.is_some();
        let lowest_marketplace_price = lowest.unwrap_or(0.0);

        Self {
            lowest_marketplace_price,
            savings: lowest_marketplace_price - product.gem_price,
            has_market_offer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Marketplace, MarketplaceOffer, Product};

    fn product_with_offers(gem_price: f64, offers: Vec<(f64, bool)>) -> Product {
        let mut product = Product::new(
            "GEM-2024-0002",
            "Office Chair",
            "Featherlite",
            Category::Furniture,
            gem_price,
        );
        for (price, available) in offers {
            let mut offer =
                MarketplaceOffer::new(Marketplace::Amazon, "https://amazon.in/dp/chair", price);
            offer.is_available = available;
            product.marketplace_prices.push(offer);
        }
        product
    }

    #[test]
    fn test_lowest_skips_unavailable_offers() {
        let product = product_with_offers(450.0, vec![(500.0, true), (300.0, false)]);
        let comparison = PriceComparison::of(&product);
        assert_eq!(comparison.lowest_marketplace_price, 500.0);
        assert_eq!(comparison.savings, 50.0);
        assert!(comparison.has_market_offer);
    }

    #[test]
    fn test_no_offers_uses_zero_convention() {
        let product = product_with_offers(450.0, vec![]);
        let comparison = PriceComparison::of(&product);
        assert_eq!(comparison.lowest_marketplace_price, 0.0);
        assert_eq!(comparison.savings, -450.0);
        assert!(!comparison.has_market_offer);
    }

    #[test]
    fn test_all_unavailable_treated_as_no_market_price() {
        let product = product_with_offers(450.0, vec![(300.0, false), (200.0, false)]);
        let comparison = PriceComparison::of(&product);
        assert_eq!(comparison.lowest_marketplace_price, 0.0);
        assert!(!comparison.has_market_offer);
    }

    #[test]
    fn test_market_cheaper_yields_negative_savings() {
        let product = product_with_offers(500.0, vec![(350.0, true)]);
        let comparison = PriceComparison::of(&product);
        assert_eq!(comparison.savings, -150.0);
    }

    #[test]
    fn test_free_product_with_offer_distinguished_by_flag() {
        let free = product_with_offers(0.0, vec![]);
        let comparison = PriceComparison::of(&free);
        assert_eq!(comparison.lowest_marketplace_price, 0.0);
        assert_eq!(comparison.savings, 0.0);
        assert!(!comparison.has_market_offer);
    }

    #[test]
    fn test_deterministic() {
        let product = product_with_offers(450.0, vec![(500.0, true), (480.0, true)]);
        assert_eq!(PriceComparison::of(&product), PriceComparison::of(&product));
    }
}
