//! Catalog store abstraction for GemCompare.
//!
//! Exposes the [`CatalogStore`] trait the query layer executes against, and
//! [`MemoryStore`], an in-memory implementation used by tests and local
//! development. Both sides of the seam exchange only the closed
//! `FilterExpression`/`ResolvedQuery` types — never raw query strings.
//!
//! # Example
//!
//! ```rust,ignore
//! use gem_store::prelude::*;
//!
//! let store = MemoryStore::new();
//! store.insert(product)?;
//!
//! let total = store.count(&query.filter)?;
//! let page = store.find(&query)?;
//! ```

mod error;
mod memory;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::CatalogStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogStore, MemoryStore, StoreError};
}
