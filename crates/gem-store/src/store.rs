//! The catalog store seam.

use crate::StoreError;
use gem_commerce::catalog::Product;
use gem_commerce::ids::ProductId;
use gem_commerce::search::{FilterExpression, ResolvedQuery};

/// A document store holding the product catalog.
///
/// Both query operations accept only the closed expression types, so no
/// client-supplied text can reach a backend as query syntax. `count` and
/// `find` are independent calls, not transactionally linked: a concurrent
/// write between them may skew pagination by one record, which is accepted
/// for the read-mostly catalog.
pub trait CatalogStore {
    /// Count the records matching a filter expression.
    fn count(&self, filter: &FilterExpression) -> Result<u64, StoreError>;

    /// Execute a resolved query: filter, keyword, sort and window.
    fn find(&self, query: &ResolvedQuery) -> Result<Vec<Product>, StoreError>;

    /// Fetch a single product.
    fn get(&self, id: &ProductId) -> Result<Product, StoreError>;

    /// Insert a new product. Fails with [`StoreError::Duplicate`] when the
    /// id or the GeM catalog id is already taken.
    fn insert(&self, product: Product) -> Result<Product, StoreError>;

    /// Replace an existing product, keyed by its id.
    fn update(&self, product: Product) -> Result<Product, StoreError>;

    /// Delete a product.
    fn delete(&self, id: &ProductId) -> Result<(), StoreError>;
}
