//! Product types.

use crate::catalog::MarketplaceOffer;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum length of a product name.
const MAX_NAME_LEN: usize = 100;

/// Product category (closed enumeration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    Appliances,
    Automotive,
    Baby,
    Clothing,
    Electronics,
    Furniture,
    Grocery,
    #[serde(rename = "Health & Beauty")]
    HealthBeauty,
    Home,
    Jewellery,
    Office,
    Sports,
    Toys,
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    #[serde(rename = "IT Peripherals")]
    ItPeripherals,
    #[default]
    Other,
}

impl Category {
    /// Get the catalog label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appliances => "Appliances",
            Category::Automotive => "Automotive",
            Category::Baby => "Baby",
            Category::Clothing => "Clothing",
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Grocery => "Grocery",
            Category::HealthBeauty => "Health & Beauty",
            Category::Home => "Home",
            Category::Jewellery => "Jewellery",
            Category::Office => "Office",
            Category::Sports => "Sports",
            Category::Toys => "Toys",
            Category::OfficeSupplies => "Office Supplies",
            Category::ItPeripherals => "IT Peripherals",
            Category::Other => "Other",
        }
    }

    /// Parse a catalog label.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Appliances" => Some(Category::Appliances),
            "Automotive" => Some(Category::Automotive),
            "Baby" => Some(Category::Baby),
            "Clothing" => Some(Category::Clothing),
            "Electronics" => Some(Category::Electronics),
            "Furniture" => Some(Category::Furniture),
            "Grocery" => Some(Category::Grocery),
            "Health & Beauty" => Some(Category::HealthBeauty),
            "Home" => Some(Category::Home),
            "Jewellery" => Some(Category::Jewellery),
            "Office" => Some(Category::Office),
            "Sports" => Some(Category::Sports),
            "Toys" => Some(Category::Toys),
            "Office Supplies" => Some(Category::OfficeSupplies),
            "IT Peripherals" => Some(Category::ItPeripherals),
            "Other" => Some(Category::Other),
            _ => None,
        }
    }
}

/// How the marketplace listings relate to the catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ComparisonType {
    /// Same product, same model.
    #[default]
    #[serde(rename = "Direct Match")]
    DirectMatch,
    /// Different model with comparable specifications.
    #[serde(rename = "Similar Specs")]
    SimilarSpecs,
    /// Functionally equivalent substitute.
    Equivalent,
}

impl ComparisonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonType::DirectMatch => "Direct Match",
            ComparisonType::SimilarSpecs => "Similar Specs",
            ComparisonType::Equivalent => "Equivalent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Direct Match" => Some(ComparisonType::DirectMatch),
            "Similar Specs" => Some(ComparisonType::SimilarSpecs),
            "Equivalent" => Some(ComparisonType::Equivalent),
            _ => None,
        }
    }
}

/// Product visibility status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Product is visible in the catalog.
    #[default]
    Active,
    /// Product is hidden but data preserved.
    Inactive,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(ProductStatus::Active),
            "inactive" => Some(ProductStatus::Inactive),
            _ => None,
        }
    }
}

/// A hosted product image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    /// Identifier at the image host.
    pub public_id: String,
    /// Public URL.
    pub url: String,
}

/// A product in the GeM comparison catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// GeM catalog identifier (unique).
    pub gem_product_id: String,
    /// Product name.
    pub name: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Catalog category.
    pub category: Category,
    /// Canonical GeM price. Always present, never negative.
    pub gem_price: f64,
    /// Free-text description.
    pub description: String,
    /// Technical specifications, keyed by spec name.
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
    /// How marketplace listings relate to this product.
    #[serde(default)]
    pub comparison_type: ComparisonType,
    /// Competing marketplace listings.
    #[serde(default)]
    pub marketplace_prices: Vec<MarketplaceOffer>,
    /// Hosted images.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Visibility status.
    #[serde(default)]
    pub status: ProductStatus,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Product {
    /// Create a new active product with no offers or specs.
    pub fn new(
        gem_product_id: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: Category,
        gem_price: f64,
    ) -> Self {
        Self {
            id: ProductId::generate(),
            gem_product_id: gem_product_id.into(),
            name: name.into(),
            brand: brand.into(),
            category,
            gem_price,
            description: String::new(),
            specs: BTreeMap::new(),
            comparison_type: ComparisonType::default(),
            marketplace_prices: Vec::new(),
            images: Vec::new(),
            status: ProductStatus::Active,
            created_at: current_timestamp(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a technical specification entry.
    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specs.insert(key.into(), value.into());
        self
    }

    /// Add a marketplace offer.
    pub fn with_offer(mut self, offer: MarketplaceOffer) -> Self {
        self.marketplace_prices.push(offer);
        self
    }

    /// Check if the product is visible in the catalog.
    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// The "Model" specification entry, if present.
    pub fn spec_model(&self) -> Option<&str> {
        self.specs.get("Model").map(String::as_str)
    }

    /// Case-insensitive substring match across name, brand, category and
    /// the "Model" specification.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.brand.to_lowercase().contains(&needle)
            || self.category.as_str().to_lowercase().contains(&needle)
            || self
                .spec_model()
                .is_some_and(|m| m.to_lowercase().contains(&needle))
    }

    /// Validate domain invariants before the product reaches the store.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.gem_product_id.trim().is_empty() {
            return Err(CommerceError::Validation(
                "GeM product ID must not be empty".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(CommerceError::Validation(
                "product name must not be empty".to_string(),
            ));
        }
        if self.name.len() > MAX_NAME_LEN {
            return Err(CommerceError::Validation(format!(
                "product name cannot exceed {} characters",
                MAX_NAME_LEN
            )));
        }
        if self.brand.trim().is_empty() {
            return Err(CommerceError::Validation(
                "product brand must not be empty".to_string(),
            ));
        }
        if !self.gem_price.is_finite() || self.gem_price < 0.0 {
            return Err(CommerceError::Validation(format!(
                "GeM price must be a non-negative number, got {}",
                self.gem_price
            )));
        }
        for offer in &self.marketplace_prices {
            offer.validate()?;
        }
        Ok(())
    }
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Marketplace, MarketplaceOffer};

    fn sample_product() -> Product {
        Product::new(
            "GEM-2024-0001",
            "Wireless Mouse M220",
            "Logitech",
            Category::ItPeripherals,
            649.0,
        )
        .with_description("Silent wireless mouse")
        .with_spec("Model", "M220")
    }

    #[test]
    fn test_product_creation() {
        let product = sample_product();
        assert_eq!(product.gem_product_id, "GEM-2024-0001");
        assert!(product.is_active());
        assert_eq!(product.status, ProductStatus::Active);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_category_round_trip() {
        for label in ["Health & Beauty", "IT Peripherals", "Office Supplies"] {
            let category = Category::from_str(label).unwrap();
            assert_eq!(category.as_str(), label);
        }
        assert_eq!(Category::from_str("Gadgets"), None);
    }

    #[test]
    fn test_category_serde_uses_catalog_labels() {
        let json = serde_json::to_string(&Category::HealthBeauty).unwrap();
        assert_eq!(json, "\"Health & Beauty\"");
        let parsed: Category = serde_json::from_str("\"IT Peripherals\"").unwrap();
        assert_eq!(parsed, Category::ItPeripherals);
        // Unknown labels never make it into a typed product.
        assert!(serde_json::from_str::<Category>("\"Gadgets\"").is_err());
    }

    #[test]
    fn test_validation_rejects_negative_price() {
        let mut product = sample_product();
        product.gem_price = -1.0;
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let mut product = sample_product();
        product.name = "  ".to_string();
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_offer() {
        let product = sample_product().with_offer(MarketplaceOffer {
            marketplace: Marketplace::Amazon,
            product_url: "https://amazon.in/dp/x".to_string(),
            price: -10.0,
            discount: 0.0,
            is_available: true,
        });
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_keyword_matches_specs_model() {
        let product = sample_product();
        assert!(product.matches_keyword("m220"));
        assert!(product.matches_keyword("LOGI"));
        assert!(product.matches_keyword("peripherals"));
        assert!(!product.matches_keyword("keyboard"));
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = sample_product();
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("gemPrice").is_some());
        assert!(json.get("gemProductId").is_some());
        assert!(json.get("marketplacePrices").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
