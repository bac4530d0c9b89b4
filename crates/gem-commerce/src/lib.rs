//! Catalog domain types and price-comparison logic for GemCompare.
//!
//! This crate provides the core types for comparing a government-procurement
//! (GeM) catalog against open-market listings:
//!
//! - **Catalog**: products, marketplace offers, categories
//! - **Compare**: lowest available market price and savings vs. the GeM price
//! - **Search**: untrusted-parameter filter translation, query planning,
//!   pagination
//!
//! # Example
//!
//! ```rust,ignore
//! use gem_commerce::prelude::*;
//! use std::collections::HashMap;
//!
//! // Translate untrusted query parameters into a safe filter
//! let params: HashMap<String, String> = /* from the router */;
//! let (filter, diagnostics) = FilterTranslator::translate(&params);
//!
//! // Resolve the full query (keyword, sort, pagination)
//! let query = QueryPlanner::plan(&params, filter);
//!
//! // Annotate a product with its market comparison
//! let comparison = PriceComparison::of(&product);
//! println!("savings vs GeM: {}", comparison.savings);
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod compare;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{
        Category, ComparisonType, Marketplace, MarketplaceOffer, Product, ProductImage,
        ProductStatus,
    };

    // Compare
    pub use crate::compare::PriceComparison;

    // Search
    pub use crate::search::{
        Comparison, FilterClause, FilterExpression, FilterField, FilterTranslator, FilterValue,
        PageRef, Pagination, QueryPlanner, ResolvedQuery, SortKey, SortSpec,
        TranslationDiagnostics,
    };
}
