//! Catalog types: products, marketplace offers, categories.

mod offer;
mod product;

pub use offer::{Marketplace, MarketplaceOffer};
pub use product::{Category, ComparisonType, Product, ProductImage, ProductStatus};
