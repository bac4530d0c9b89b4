//! Query planning: keyword, sort and pagination resolution.

use crate::search::FilterExpression;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default page when unspecified or invalid.
const DEFAULT_PAGE: u32 = 1;
/// Default page size when unspecified or invalid.
pub const DEFAULT_LIMIT: u32 = 10;
/// Upper bound on the page size.
pub const MAX_LIMIT: u32 = 100;

/// One sort key: a field name and a direction.
///
/// Keys are structured data the store maps by name; unknown fields are
/// ignored there rather than interpolated into query syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub descending: bool,
}

impl SortKey {
    /// Parse one sort entry; a `-` prefix marks descending order.
    fn parse(entry: &str) -> Option<Self> {
        let entry = entry.trim();
        if entry.is_empty() {
            return None;
        }
        let (field, descending) = match entry.strip_prefix('-') {
            Some(field) => (field, true),
            None => (entry, false),
        };
        if field.is_empty() {
            return None;
        }
        Some(Self {
            field: field.to_string(),
            descending,
        })
    }
}

/// An ordered list of sort keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub keys: Vec<SortKey>,
}

impl SortSpec {
    /// Parse a comma-joined sort parameter (`-gemPrice,name`).
    ///
    /// Falls back to newest-first when nothing parseable remains.
    pub fn parse(spec: &str) -> Self {
        let keys: Vec<SortKey> = spec.split(',').filter_map(SortKey::parse).collect();
        if keys.is_empty() {
            Self::newest_first()
        } else {
            Self { keys }
        }
    }

    /// The default order: creation timestamp, descending.
    pub fn newest_first() -> Self {
        Self {
            keys: vec![SortKey {
                field: "createdAt".to_string(),
                descending: true,
            }],
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::newest_first()
    }
}

/// A fully resolved catalog query.
///
/// Derived fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedQuery {
    /// Accepted filter clauses (ANDed).
    pub filter: FilterExpression,
    /// Case-insensitive keyword, matched across name, brand, category and
    /// the "Model" specification, ORed internally and ANDed with the filter.
    pub keyword: Option<String>,
    /// Sort order.
    pub sort: SortSpec,
    /// Page number, 1-indexed.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl ResolvedQuery {
    /// Number of records to skip.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

/// Combines a filter expression with keyword, sort and pagination
/// parameters into one [`ResolvedQuery`].
pub struct QueryPlanner;

impl QueryPlanner {
    /// Resolve the remaining request parameters.
    ///
    /// Invalid or non-numeric `page`/`limit` values fall back to the
    /// defaults rather than failing the request.
    pub fn plan(params: &HashMap<String, String>, filter: FilterExpression) -> ResolvedQuery {
        let keyword = params
            .get("keyword")
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        let sort = params
            .get("sort")
            .map(|s| SortSpec::parse(s))
            .unwrap_or_default();

        let page = parse_positive(params.get("page")).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(params.get("limit"))
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);

        ResolvedQuery {
            filter,
            keyword,
            sort,
            page,
            limit,
        }
    }
}

/// Parse a strictly positive integer; anything else is `None`.
fn parse_positive(value: Option<&String>) -> Option<u32> {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
}
