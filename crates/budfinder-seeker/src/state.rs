//! Query state: the mutable filter and sort configuration of one session.
//!
//! [`QueryState`] is always fully populated. Caller-supplied partial defaults
//! ([`QueryDefaults`]) are layered over the built-in defaults when a session is
//! created, and single fields are replaced through [`FilterKey`] /
//! [`FilterValue`] pairs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};
use crate::ordering::SortOrder;

/// Category value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Field sorted on when nothing else is configured.
pub const DEFAULT_SORT_FIELD: &str = "rating";

/// Closed price interval `[min, max]`.
///
/// Serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        PriceRange { min, max }
    }

    /// Returns `true` if `price` lies within the interval, bounds included.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        PriceRange::new(0.0, 100.0)
    }
}

impl From<[f64; 2]> for PriceRange {
    fn from([min, max]: [f64; 2]) -> Self {
        PriceRange::new(min, max)
    }
}

impl From<PriceRange> for [f64; 2] {
    fn from(range: PriceRange) -> Self {
        [range.min, range.max]
    }
}

/// The complete filter and sort configuration of a query session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    /// Free text; empty means no text filter.
    pub search_term: String,
    /// Category discriminator; [`ALL_CATEGORIES`] means unrestricted.
    #[serde(rename = "type")]
    pub category: String,
    pub min_thc: Option<f64>,
    pub max_thc: Option<f64>,
    pub min_cbd: Option<f64>,
    pub max_cbd: Option<f64>,
    /// Requested effects; a record matches if it has any of them.
    pub effects: Vec<String>,
    /// Requested flavors; a record matches if it has any of them.
    pub flavors: Vec<String>,
    pub price_range: PriceRange,
    pub sort_by: String,
    pub sort_order: SortOrder,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState {
            search_term: String::new(),
            category: ALL_CATEGORIES.to_string(),
            min_thc: None,
            max_thc: None,
            min_cbd: None,
            max_cbd: None,
            effects: Vec::new(),
            flavors: Vec::new(),
            price_range: PriceRange::default(),
            sort_by: DEFAULT_SORT_FIELD.to_string(),
            sort_order: SortOrder::Desc,
        }
    }
}

/// Partial query state, every field optional.
///
/// Set fields override the built-in defaults of [`QueryState`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryDefaults {
    pub search_term: Option<String>,
    #[serde(rename = "type")]
    pub category: Option<String>,
    pub min_thc: Option<f64>,
    pub max_thc: Option<f64>,
    pub min_cbd: Option<f64>,
    pub max_cbd: Option<f64>,
    pub effects: Option<Vec<String>>,
    pub flavors: Option<Vec<String>>,
    pub price_range: Option<PriceRange>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl QueryState {
    /// Builds a state from the built-in defaults with `defaults` layered on top.
    pub fn with_defaults(defaults: &QueryDefaults) -> Self {
        let base = QueryState::default();
        let d = defaults.clone();

        QueryState {
            search_term: d.search_term.unwrap_or(base.search_term),
            category: d.category.unwrap_or(base.category),
            min_thc: d.min_thc.or(base.min_thc),
            max_thc: d.max_thc.or(base.max_thc),
            min_cbd: d.min_cbd.or(base.min_cbd),
            max_cbd: d.max_cbd.or(base.max_cbd),
            effects: d.effects.unwrap_or(base.effects),
            flavors: d.flavors.unwrap_or(base.flavors),
            price_range: d.price_range.unwrap_or(base.price_range),
            sort_by: d.sort_by.unwrap_or(base.sort_by),
            sort_order: d.sort_order.unwrap_or(base.sort_order),
        }
    }

    /// Replaces exactly one field.
    ///
    /// The only check is that `value` has the kind `key` expects. Nonsensical
    /// but well-typed values (an inverted THC range, say) are accepted.
    pub fn apply(&mut self, key: FilterKey, value: FilterValue) -> Result<()> {
        let mismatch = |value: &FilterValue| QueryError::TypeMismatch {
            key,
            expected: key.expected_kind(),
            actual: value.kind(),
        };

        match (key, value) {
            (FilterKey::SearchTerm, FilterValue::Text(s)) => self.search_term = s,
            (FilterKey::Type, FilterValue::Text(s)) => self.category = s,
            (FilterKey::SortBy, FilterValue::Text(s)) => self.sort_by = s,
            (FilterKey::MinThc, v) => self.min_thc = v.into_bound().map_err(|v| mismatch(&v))?,
            (FilterKey::MaxThc, v) => self.max_thc = v.into_bound().map_err(|v| mismatch(&v))?,
            (FilterKey::MinCbd, v) => self.min_cbd = v.into_bound().map_err(|v| mismatch(&v))?,
            (FilterKey::MaxCbd, v) => self.max_cbd = v.into_bound().map_err(|v| mismatch(&v))?,
            (FilterKey::Effects, FilterValue::Tags(t)) => self.effects = t,
            (FilterKey::Flavors, FilterValue::Tags(t)) => self.flavors = t,
            (FilterKey::PriceRange, FilterValue::Range(r)) => self.price_range = r,
            (FilterKey::SortOrder, FilterValue::Order(o)) => self.sort_order = o,
            (_, v) => return Err(mismatch(&v)),
        }

        Ok(())
    }

    /// Describes every active filter dimension as a display string.
    ///
    /// Clauses appear in a fixed order: search term, type, effects, flavors,
    /// THC range. Price range, CBD bounds and sorting are never reported.
    pub fn summary(&self) -> Vec<String> {
        let mut clauses = Vec::new();

        if !self.search_term.is_empty() {
            clauses.push(format!("Search: \"{}\"", self.search_term));
        }
        if self.category != ALL_CATEGORIES {
            clauses.push(format!("Type: {}", self.category));
        }
        if !self.effects.is_empty() {
            clauses.push(format!("Effects: {}", self.effects.join(", ")));
        }
        if !self.flavors.is_empty() {
            clauses.push(format!("Flavors: {}", self.flavors.join(", ")));
        }
        if self.min_thc.is_some() || self.max_thc.is_some() {
            clauses.push(format!(
                "THC: {}-{}%",
                self.min_thc.unwrap_or(0.0),
                self.max_thc.unwrap_or(100.0)
            ));
        }

        clauses
    }
}

/// Names of the individually updatable [`QueryState`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    SearchTerm,
    Type,
    MinThc,
    MaxThc,
    MinCbd,
    MaxCbd,
    Effects,
    Flavors,
    PriceRange,
    SortBy,
    SortOrder,
}

impl FilterKey {
    pub const ALL: [FilterKey; 11] = [
        FilterKey::SearchTerm,
        FilterKey::Type,
        FilterKey::MinThc,
        FilterKey::MaxThc,
        FilterKey::MinCbd,
        FilterKey::MaxCbd,
        FilterKey::Effects,
        FilterKey::Flavors,
        FilterKey::PriceRange,
        FilterKey::SortBy,
        FilterKey::SortOrder,
    ];

    /// Returns the camelCase name used by form bindings.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::SearchTerm => "searchTerm",
            FilterKey::Type => "type",
            FilterKey::MinThc => "minThc",
            FilterKey::MaxThc => "maxThc",
            FilterKey::MinCbd => "minCbd",
            FilterKey::MaxCbd => "maxCbd",
            FilterKey::Effects => "effects",
            FilterKey::Flavors => "flavors",
            FilterKey::PriceRange => "priceRange",
            FilterKey::SortBy => "sortBy",
            FilterKey::SortOrder => "sortOrder",
        }
    }

    fn expected_kind(self) -> &'static str {
        match self {
            FilterKey::SearchTerm | FilterKey::Type | FilterKey::SortBy => "text",
            FilterKey::MinThc | FilterKey::MaxThc | FilterKey::MinCbd | FilterKey::MaxCbd => {
                "number or unset"
            }
            FilterKey::Effects | FilterKey::Flavors => "tags",
            FilterKey::PriceRange => "range",
            FilterKey::SortOrder => "order",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        FilterKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| QueryError::UnknownField(s.to_string()))
    }
}

/// A new value for one [`QueryState`] field.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Number(f64),
    /// Clears an optional numeric bound.
    Unset,
    Tags(Vec<String>),
    Range(PriceRange),
    Order(SortOrder),
}

impl FilterValue {
    /// Short name of the value kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FilterValue::Text(_) => "text",
            FilterValue::Number(_) => "number",
            FilterValue::Unset => "unset",
            FilterValue::Tags(_) => "tags",
            FilterValue::Range(_) => "range",
            FilterValue::Order(_) => "order",
        }
    }

    fn into_bound(self) -> std::result::Result<Option<f64>, FilterValue> {
        match self {
            FilterValue::Number(n) => Ok(Some(n)),
            FilterValue::Unset => Ok(None),
            other => Err(other),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        FilterValue::Number(n)
    }
}

impl From<Option<f64>> for FilterValue {
    fn from(n: Option<f64>) -> Self {
        n.map_or(FilterValue::Unset, FilterValue::Number)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(tags: Vec<String>) -> Self {
        FilterValue::Tags(tags)
    }
}

impl<const N: usize> From<[&str; N]> for FilterValue {
    fn from(tags: [&str; N]) -> Self {
        FilterValue::Tags(tags.iter().map(|t| t.to_string()).collect())
    }
}

impl From<PriceRange> for FilterValue {
    fn from(range: PriceRange) -> Self {
        FilterValue::Range(range)
    }
}

impl From<[f64; 2]> for FilterValue {
    fn from(range: [f64; 2]) -> Self {
        FilterValue::Range(range.into())
    }
}

impl From<SortOrder> for FilterValue {
    fn from(order: SortOrder) -> Self {
        FilterValue::Order(order)
    }
}
