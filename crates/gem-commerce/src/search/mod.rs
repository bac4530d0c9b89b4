//! Catalog search: filter translation, query planning, pagination.

mod filter;
mod query;
mod results;

pub use filter::{
    Comparison, DropReason, DroppedClause, FilterClause, FilterExpression, FilterField,
    FilterTranslator, FilterValue, TranslationDiagnostics,
};
pub use query::{QueryPlanner, ResolvedQuery, SortKey, SortSpec, DEFAULT_LIMIT, MAX_LIMIT};
pub use results::{PageRef, Pagination};
