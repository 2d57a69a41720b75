//! Record predicates.
//!
//! A [`Predicates`] set is compiled from a [`QueryState`] and the search
//! configuration each time the view is derived. A record is kept when every
//! predicate category passes:
//!
//! ```text
//! keep = text ∧ category ∧ thc ∧ cbd ∧ effects ∧ flavors ∧ price
//! ```
//!
//! Within the text predicate any search field may match; within a tag
//! predicate any requested tag found in any source field matches.

use crate::price::parse_price;
use crate::state::{PriceRange, QueryState, ALL_CATEGORIES};
use crate::traits::Record;
use crate::value::Value;

/// Field holding the category discriminator.
pub const TYPE_FIELD: &str = "type";
/// Field holding THC potency.
pub const THC_FIELD: &str = "thc";
/// Field holding CBD potency.
pub const CBD_FIELD: &str = "cbd";

/// Returns `true` if `value` contains `needle_lower` ignoring case.
///
/// `needle_lower` must already be lowercase. Strings match on substring, tag
/// lists match if any element does, and every other value never matches.
pub fn text_matches(value: &Value<'_>, needle_lower: &str) -> bool {
    match value {
        Value::Text(s) => s.to_lowercase().contains(needle_lower),
        Value::Tags(tags) => tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle_lower)),
        Value::Number(_) | Value::None => false,
    }
}

/// Optional lower and upper numeric bounds, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Bounds { min, max }
    }

    /// Returns `true` if neither bound is set.
    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Tests a field value against the bounds.
    ///
    /// With no bound set everything passes, including absent fields. With any
    /// bound set an absent or non-numeric field fails.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        if self.is_open() {
            return true;
        }
        let Some(n) = value.coerce_number() else {
            return false;
        };
        self.min.map_or(true, |min| n >= min) && self.max.map_or(true, |max| n <= max)
    }
}

/// Inclusive-OR tag requirement over one or more source fields.
#[derive(Debug, Clone, Copy)]
pub struct TagClause<'q> {
    wanted: &'q [String],
    sources: &'q [String],
}

impl<'q> TagClause<'q> {
    pub fn new(wanted: &'q [String], sources: &'q [String]) -> Self {
        TagClause { wanted, sources }
    }

    /// Returns `true` if nothing is requested, or if any source field carries
    /// any requested tag.
    pub fn matches<T: Record + ?Sized>(&self, item: &T) -> bool {
        if self.wanted.is_empty() {
            return true;
        }
        self.sources.iter().any(|field| match item.field_value(field) {
            Value::Tags(tags) => tags.iter().any(|tag| self.wanted.contains(tag)),
            _ => false,
        })
    }
}

/// The compiled predicate set for one derivation pass.
#[derive(Debug, Clone)]
pub struct Predicates<'q> {
    term: String,
    search_fields: &'q [String],
    category: &'q str,
    thc: Bounds,
    cbd: Bounds,
    effects: TagClause<'q>,
    flavors: TagClause<'q>,
    price: PriceRange,
}

impl<'q> Predicates<'q> {
    /// Compiles predicates from the state.
    ///
    /// `term` is the stabilized search term, which may lag behind
    /// `state.search_term` while an edit is still settling.
    pub fn new(
        state: &'q QueryState,
        term: &str,
        search_fields: &'q [String],
        effect_fields: &'q [String],
        flavor_fields: &'q [String],
    ) -> Self {
        Predicates {
            term: term.to_lowercase(),
            search_fields,
            category: &state.category,
            thc: Bounds::new(state.min_thc, state.max_thc),
            cbd: Bounds::new(state.min_cbd, state.max_cbd),
            effects: TagClause::new(&state.effects, effect_fields),
            flavors: TagClause::new(&state.flavors, flavor_fields),
            price: state.price_range,
        }
    }

    pub fn text<T: Record + ?Sized>(&self, item: &T) -> bool {
        self.term.is_empty()
            || self
                .search_fields
                .iter()
                .any(|field| text_matches(&item.field_value(field), &self.term))
    }

    pub fn category<T: Record + ?Sized>(&self, item: &T) -> bool {
        self.category == ALL_CATEGORIES
            || item.field_value(TYPE_FIELD).as_str() == Some(self.category)
    }

    pub fn potency<T: Record + ?Sized>(&self, item: &T) -> bool {
        self.thc.matches(&item.field_value(THC_FIELD))
            && self.cbd.matches(&item.field_value(CBD_FIELD))
    }

    pub fn tags<T: Record + ?Sized>(&self, item: &T) -> bool {
        self.effects.matches(item) && self.flavors.matches(item)
    }

    pub fn price<T: Record + ?Sized>(&self, item: &T) -> bool {
        self.price
            .contains(parse_price(&item.field_value(crate::ordering::PRICE_FIELD)))
    }

    /// Tests a record against every predicate category.
    pub fn matches<T: Record + ?Sized>(&self, item: &T) -> bool {
        self.text(item)
            && self.category(item)
            && self.potency(item)
            && self.tags(item)
            && self.price(item)
    }
}
