//! In-memory catalog store.

use crate::{CatalogStore, StoreError};
use gem_commerce::catalog::Product;
use gem_commerce::ids::ProductId;
use gem_commerce::search::{
    Comparison, FilterClause, FilterExpression, FilterField, FilterValue, ResolvedQuery, SortKey,
};
use std::cmp::Ordering;
use std::sync::RwLock;

/// An in-memory [`CatalogStore`].
///
/// Executes filter clauses, the keyword OR-clause, multi-key sorting and
/// the pagination window with the same semantics a document store backend
/// is expected to provide. Used by tests and local development.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with products.
    pub fn with_products(products: Vec<Product>) -> Result<Self, StoreError> {
        let store = Self::new();
        for product in products {
            store.insert(product)?;
        }
        Ok(store)
    }
}

impl CatalogStore for MemoryStore {
    fn count(&self, filter: &FilterExpression) -> Result<u64, StoreError> {
        let products = self.read()?;
        Ok(products
            .iter()
            .filter(|product| matches_filter(product, filter))
            .count() as u64)
    }

    fn find(&self, query: &ResolvedQuery) -> Result<Vec<Product>, StoreError> {
        let products = self.read()?;

        let mut matched: Vec<Product> = products
            .iter()
            .filter(|product| matches_filter(product, &query.filter))
            .filter(|product| {
                query
                    .keyword
                    .as_deref()
                    .map_or(true, |keyword| product.matches_keyword(keyword))
            })
            .cloned()
            .collect();

        // Stable sort keeps insertion order for ties.
        matched.sort_by(|a, b| compare_products(a, b, &query.sort.keys));

        Ok(matched
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit as usize)
            .collect())
    }

    fn get(&self, id: &ProductId) -> Result<Product, StoreError> {
        let products = self.read()?;
        products
            .iter()
            .find(|product| &product.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn insert(&self, product: Product) -> Result<Product, StoreError> {
        product.validate()?;
        let mut products = self.write()?;
        if products.iter().any(|existing| {
            existing.id == product.id || existing.gem_product_id == product.gem_product_id
        }) {
            return Err(StoreError::Duplicate(product.gem_product_id));
        }
        products.push(product.clone());
        Ok(product)
    }

    fn update(&self, product: Product) -> Result<Product, StoreError> {
        product.validate()?;
        let mut products = self.write()?;
        let slot = products
            .iter_mut()
            .find(|existing| existing.id == product.id)
            .ok_or_else(|| StoreError::NotFound(product.id.to_string()))?;
        *slot = product.clone();
        Ok(product)
    }

    fn delete(&self, id: &ProductId) -> Result<(), StoreError> {
        let mut products = self.write()?;
        let before = products.len();
        products.retain(|product| &product.id != id);
        if products.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

impl MemoryStore {
    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Product>>, StoreError> {
        self.products
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Product>>, StoreError> {
        self.products
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }
}

fn matches_filter(product: &Product, filter: &FilterExpression) -> bool {
    filter.iter().all(|clause| matches_clause(product, clause))
}

fn matches_clause(product: &Product, clause: &FilterClause) -> bool {
    match clause.field {
        FilterField::GemPrice => matches_number(product.gem_price, clause),
        FilterField::Category => matches_text(product.category.as_str(), clause),
        FilterField::Brand => matches_text(&product.brand, clause),
        FilterField::Status => matches_text(product.status.as_str(), clause),
        FilterField::ComparisonType => matches_text(product.comparison_type.as_str(), clause),
    }
}

fn matches_number(actual: f64, clause: &FilterClause) -> bool {
    match (&clause.op, &clause.value) {
        (Comparison::Eq, FilterValue::Number(n)) => actual == *n,
        (Comparison::Gt, FilterValue::Number(n)) => actual > *n,
        (Comparison::Gte, FilterValue::Number(n)) => actual >= *n,
        (Comparison::Lt, FilterValue::Number(n)) => actual < *n,
        (Comparison::Lte, FilterValue::Number(n)) => actual <= *n,
        (Comparison::In, FilterValue::NumberList(ns)) => ns.contains(&actual),
        // The translator never produces other combinations.
        _ => false,
    }
}

fn matches_text(actual: &str, clause: &FilterClause) -> bool {
    match (&clause.op, &clause.value) {
        (Comparison::Eq, FilterValue::Text(t)) => actual == t,
        (Comparison::In, FilterValue::TextList(ts)) => ts.iter().any(|t| t == actual),
        _ => false,
    }
}

fn compare_products(a: &Product, b: &Product, keys: &[SortKey]) -> Ordering {
    for key in keys {
        let ordering = match key.field.as_str() {
            "createdAt" => a.created_at.cmp(&b.created_at),
            "gemPrice" => a
                .gem_price
                .partial_cmp(&b.gem_price)
                .unwrap_or(Ordering::Equal),
            "name" => a.name.cmp(&b.name),
            "brand" => a.brand.cmp(&b.brand),
            "category" => a.category.as_str().cmp(b.category.as_str()),
            "status" => a.status.as_str().cmp(b.status.as_str()),
            // Unknown sort fields are ignored, not forwarded.
            _ => Ordering::Equal,
        };
        let ordering = if key.descending {
            ordering.reverse()
        } else {
            ordering
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
