//! Untrusted-parameter filter translation.
//!
//! Client query parameters are interpreted against a fixed whitelist of
//! filterable fields and compiled into a closed clause structure. Nothing
//! a client sends is ever forwarded to the store as query syntax: a field
//! or operator outside the whitelist is dropped, not passed through.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Query keys handled by the planner, never interpreted as field filters.
const RESERVED_KEYS: &[&str] = &["select", "sort", "page", "limit", "keyword"];

/// Fields that may be filtered (closed whitelist).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterField {
    /// Canonical GeM price (numeric).
    GemPrice,
    /// Catalog category.
    Category,
    /// Manufacturer brand.
    Brand,
    /// Visibility status.
    Status,
    /// Listing relation kind.
    ComparisonType,
}

impl FilterField {
    /// Resolve a query-parameter name to a whitelisted field.
    pub fn from_param(name: &str) -> Option<Self> {
        match name {
            "gemPrice" => Some(FilterField::GemPrice),
            "category" => Some(FilterField::Category),
            "brand" => Some(FilterField::Brand),
            "status" => Some(FilterField::Status),
            "comparisonType" => Some(FilterField::ComparisonType),
            _ => None,
        }
    }

    /// The query-parameter name for this field.
    pub fn as_param(&self) -> &'static str {
        match self {
            FilterField::GemPrice => "gemPrice",
            FilterField::Category => "category",
            FilterField::Brand => "brand",
            FilterField::Status => "status",
            FilterField::ComparisonType => "comparisonType",
        }
    }

    /// Whether values for this field are parsed as numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FilterField::GemPrice)
    }
}

/// Comparison operator of a filter clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    /// Exact equality.
    Eq,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Membership in a value set.
    In,
}

impl Comparison {
    /// Resolve a bracketed parameter suffix (`gte` in `gemPrice[gte]`).
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "gt" => Some(Comparison::Gt),
            "gte" => Some(Comparison::Gte),
            "lt" => Some(Comparison::Lt),
            "lte" => Some(Comparison::Lte),
            "in" => Some(Comparison::In),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Eq => "eq",
            Comparison::Gt => "gt",
            Comparison::Gte => "gte",
            Comparison::Lt => "lt",
            Comparison::Lte => "lte",
            Comparison::In => "in",
        }
    }

    /// Whether this operator orders values (range comparison).
    fn is_range(&self) -> bool {
        matches!(
            self,
            Comparison::Gt | Comparison::Gte | Comparison::Lt | Comparison::Lte
        )
    }
}

/// A typed filter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Number(f64),
    NumberList(Vec<f64>),
    Text(String),
    TextList(Vec<String>),
}

/// One accepted comparison clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    pub field: FilterField,
    pub op: Comparison,
    pub value: FilterValue,
}

/// A conjunction of accepted clauses.
///
/// This is a closed data structure, never a string: the store receives
/// typed clauses it interprets itself, which removes the operator-injection
/// surface of serializing client text into query syntax.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterExpression {
    clauses: Vec<FilterClause>,
}

impl FilterExpression {
    /// An empty expression (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause (builder form).
    pub fn and(mut self, clause: FilterClause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Iterate the clauses.
    pub fn iter(&self) -> impl Iterator<Item = &FilterClause> {
        self.clauses.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }
}

/// Why a parameter was not turned into a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Field is not in the filter whitelist.
    UnknownField,
    /// Bracket suffix is not a recognized operator.
    UnknownOperator,
    /// Operator does not apply to this field (range on an enumeration).
    UnsupportedOperator,
    /// Value on a numeric field did not parse as a finite number.
    InvalidNumber,
}

/// A parameter dropped during translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedClause {
    /// The raw parameter name as received.
    pub parameter: String,
    pub reason: DropReason,
}

/// What the translator dropped and why.
///
/// Surfaced in the response envelope in non-production modes only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationDiagnostics {
    pub dropped: Vec<DroppedClause>,
}

impl TranslationDiagnostics {
    pub fn is_empty(&self) -> bool {
        self.dropped.is_empty()
    }

    fn record(&mut self, parameter: &str, reason: DropReason) {
        self.dropped.push(DroppedClause {
            parameter: parameter.to_string(),
            reason,
        });
    }
}

/// Translates flat query parameters into a [`FilterExpression`].
pub struct FilterTranslator;

impl FilterTranslator {
    /// Translate a parameter map.
    ///
    /// Reserved keys are stripped; the remainder is interpreted as field
    /// filters. A parameter that cannot be translated drops that single
    /// clause — the request as a whole never fails here.
    pub fn translate(
        params: &HashMap<String, String>,
    ) -> (FilterExpression, TranslationDiagnostics) {
        let mut expression = FilterExpression::new();
        let mut diagnostics = TranslationDiagnostics::default();

        // Sorted for deterministic clause and diagnostics order.
        let mut names: Vec<&String> = params
            .keys()
            .filter(|name| !RESERVED_KEYS.contains(&name.as_str()))
            .collect();
        names.sort();

        for name in names {
            let value = &params[name];
            if let Some(clause) = Self::translate_param(name, value, &mut diagnostics) {
                expression.clauses.push(clause);
            }
        }

        (expression, diagnostics)
    }

    fn translate_param(
        name: &str,
        value: &str,
        diagnostics: &mut TranslationDiagnostics,
    ) -> Option<FilterClause> {
        // Split `field[op]` into its parts; a bare name means equality.
        let (field_part, op) = match name.split_once('[') {
            Some((field_part, rest)) => {
                let Some(suffix) = rest.strip_suffix(']') else {
                    debug!(parameter = name, "ignoring filter with malformed brackets");
                    diagnostics.record(name, DropReason::UnknownField);
                    return None;
                };
                match Comparison::from_suffix(suffix) {
                    Some(op) => (field_part, op),
                    None => {
                        debug!(parameter = name, "ignoring filter with unknown operator");
                        diagnostics.record(name, DropReason::UnknownOperator);
                        return None;
                    }
                }
            }
            None => (name, Comparison::Eq),
        };

        let Some(field) = FilterField::from_param(field_part) else {
            debug!(parameter = name, "ignoring filter on unwhitelisted field");
            diagnostics.record(name, DropReason::UnknownField);
            return None;
        };

        let value = if field.is_numeric() {
            match Self::parse_numeric(op, value) {
                Some(parsed) => parsed,
                None => {
                    warn!(
                        parameter = name,
                        "dropping numeric filter with unparseable value"
                    );
                    diagnostics.record(name, DropReason::InvalidNumber);
                    return None;
                }
            }
        } else {
            // Ordering text values makes no sense for enumeration fields.
            if op.is_range() {
                debug!(parameter = name, "ignoring range operator on text field");
                diagnostics.record(name, DropReason::UnsupportedOperator);
                return None;
            }
            match op {
                Comparison::In => FilterValue::TextList(
                    value.split(',').map(|part| part.trim().to_string()).collect(),
                ),
                _ => FilterValue::Text(value.to_string()),
            }
        };

        Some(FilterClause { field, op, value })
    }

    fn parse_numeric(op: Comparison, value: &str) -> Option<FilterValue> {
        if op == Comparison::In {
            let numbers = value
                .split(',')
                .map(|part| parse_finite(part.trim()))
                .collect::<Option<Vec<f64>>>()?;
            Some(FilterValue::NumberList(numbers))
        } else {
            Some(FilterValue::Number(parse_finite(value.trim())?))
        }
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}
