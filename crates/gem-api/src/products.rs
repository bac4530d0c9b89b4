//! Catalog endpoints: listing, single fetch, admin CRUD, stats.

use crate::envelope::{ApiMode, ApiResponse, ApiResult};
use gem_commerce::catalog::{Product, ProductStatus};
use gem_commerce::compare::PriceComparison;
use gem_commerce::ids::ProductId;
use gem_commerce::search::{
    Comparison, FilterClause, FilterExpression, FilterField, FilterTranslator, FilterValue,
    Pagination, QueryPlanner,
};
use gem_store::CatalogStore;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// A product annotated with its market comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    #[serde(flatten)]
    pub comparison: PriceComparison,
}

impl ProductView {
    /// Annotate a product.
    pub fn of(product: Product) -> Self {
        let comparison = PriceComparison::of(&product);
        Self {
            product,
            comparison,
        }
    }
}

/// Catalog totals for the admin dashboard.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_products: u64,
    pub active_products: u64,
    pub inactive_products: u64,
}

/// Catalog service over an injected store.
#[derive(Debug)]
pub struct ProductApi<S> {
    store: S,
    mode: ApiMode,
}

impl<S: CatalogStore> ProductApi<S> {
    /// Build the service.
    pub fn new(store: S, mode: ApiMode) -> Self {
        Self { store, mode }
    }

    /// List products: filter, keyword, sort, paginate, annotate.
    ///
    /// Issues two independent store operations — a count for pagination
    /// metadata, then the windowed fetch.
    pub fn list(&self, params: &HashMap<String, String>) -> ApiResult<Vec<ProductView>> {
        let (filter, diagnostics) = FilterTranslator::translate(params);
        let query = QueryPlanner::plan(params, filter);

        let total = self.store.count(&query.filter)?;
        let products = self.store.find(&query)?;
        let returned = products.len();
        debug!(total, returned, page = query.page, "catalog query executed");

        let pagination = Pagination::build(query.page, query.limit, total);
        let views: Vec<ProductView> = products.into_iter().map(ProductView::of).collect();

        let mut response = ApiResponse::ok(views)
            .with_count(returned)
            .with_pagination(pagination);
        if !self.mode.is_production() && !diagnostics.is_empty() {
            response = response.with_diagnostics(diagnostics);
        }
        Ok(response)
    }

    /// Fetch one product with its comparison.
    pub fn get(&self, id: &ProductId) -> ApiResult<ProductView> {
        let product = self.store.get(id)?;
        Ok(ApiResponse::ok(ProductView::of(product)))
    }

    /// Create a product (admin). Validation runs before the store is
    /// touched.
    pub fn create(&self, product: Product) -> ApiResult<Product> {
        product.validate()?;
        let stored = self.store.insert(product)?;
        info!(id = %stored.id, gem_id = %stored.gem_product_id, "product created");
        Ok(ApiResponse::ok(stored))
    }

    /// Replace a product (admin).
    pub fn update(&self, product: Product) -> ApiResult<Product> {
        product.validate()?;
        let stored = self.store.update(product)?;
        info!(id = %stored.id, "product updated");
        Ok(ApiResponse::ok(stored))
    }

    /// Delete a product (admin).
    pub fn delete(&self, id: &ProductId) -> ApiResult<serde_json::Value> {
        self.store.delete(id)?;
        info!(id = %id, "product deleted");
        Ok(ApiResponse::ok(serde_json::json!({})))
    }

    /// Catalog totals (admin dashboard).
    pub fn stats(&self) -> ApiResult<CatalogStats> {
        let total_products = self.store.count(&FilterExpression::new())?;
        let active_products = self.store.count(&status_filter(ProductStatus::Active))?;
        let inactive_products = self.store.count(&status_filter(ProductStatus::Inactive))?;
        Ok(ApiResponse::ok(CatalogStats {
            total_products,
            active_products,
            inactive_products,
        }))
    }
}

fn status_filter(status: ProductStatus) -> FilterExpression {
    FilterExpression::new().and(FilterClause {
        field: FilterField::Status,
        op: Comparison::Eq,
        value: FilterValue::Text(status.as_str().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_view_flattens_comparison() {
        use gem_commerce::catalog::{Category, Marketplace, MarketplaceOffer};
        let product = Product::new("GEM-1", "Mouse", "Logitech", Category::ItPeripherals, 450.0)
            .with_offer(MarketplaceOffer::new(
                Marketplace::Amazon,
                "https://amazon.in/dp/x",
                500.0,
            ));
        let json = serde_json::to_value(ProductView::of(product)).unwrap();
        assert_eq!(json["gemPrice"], 450.0);
        assert_eq!(json["lowestMarketplacePrice"], 500.0);
        assert_eq!(json["savings"], 50.0);
        assert_eq!(json["hasMarketOffer"], true);
    }
}
