//! Seeker - debounced search, filter and sort over catalog records.
//!
//! Seeker keeps a filtered and sorted view of an in-memory collection of
//! heterogeneous records (strains, concentrates, edibles, cartridges) in step
//! with a mutable query state. It supports:
//!
//! - Free-text search over configurable fields, debounced per edit burst
//! - Category, THC / CBD range, effect / flavor tag and price filters
//! - Stable single-field ordering with locale-aware string collation
//! - A summary of active filters for display as removable chips
//!
//! # Quick Start
//!
//! ```rust
//! use budfinder_seeker::{FilterKey, Number, QueryEngine, Record, SearchConfig, Value};
//!
//! struct Edible {
//!     name: String,
//!     effects: Vec<String>,
//!     price: String,
//!     rating: f64,
//! }
//!
//! impl Record for Edible {
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "name" => Value::Text(&self.name),
//!             "type" => Value::Text("edible"),
//!             "effects" => Value::Tags(&self.effects),
//!             "price" => Value::Text(&self.price),
//!             "rating" => Value::Number(Number::F64(self.rating)),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let edibles = vec![
//!     Edible { name: "Mango Gummies".into(), effects: vec!["Relaxed".into()], price: "$18".into(), rating: 4.5 },
//!     Edible { name: "Dark Chocolate".into(), effects: vec!["Euphoric".into()], price: "$24".into(), rating: 4.8 },
//! ];
//!
//! let mut engine = QueryEngine::new(edibles, SearchConfig::new(["name"]));
//! engine.update_filter(FilterKey::Effects, ["Relaxed", "Happy"]).unwrap();
//!
//! let results = engine.view();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].name, "Mango Gummies");
//! ```
//!
//! # Derivation Semantics
//!
//! A record is kept when every predicate category passes:
//!
//! ```text
//! keep = text ∧ category ∧ thc ∧ cbd ∧ effects ∧ flavors ∧ price
//! ```
//!
//! - **text**: empty term, or any search field contains it (case-insensitive)
//! - **category**: `"all"`, or the record's `type` equals it exactly
//! - **thc / cbd**: within the set bounds; absent field fails a set bound
//! - **effects / flavors**: nothing requested, or any requested tag present
//! - **price**: parsed price (absent = 0) within the closed range
//!
//! The kept records are stably sorted by `sortBy`; `price` sorts by parsed
//! amount. Mismatched or missing sort values compare equal.

mod config;
mod debounce;
mod engine;
mod error;
mod ordering;
mod predicate;
mod price;
mod state;
mod traits;
mod value;

// Re-export public API
pub use config::SearchConfig;
pub use debounce::{Clock, Debouncer, ManualClock, SystemClock, DEFAULT_DEBOUNCE};
pub use engine::{derive_view, QueryEngine};
pub use error::{QueryError, Result};
pub use ordering::{
    collate, compare_records, compare_values, stable_sort_by, SortOrder, PRICE_FIELD,
};
pub use predicate::{text_matches, Bounds, Predicates, TagClause, CBD_FIELD, THC_FIELD, TYPE_FIELD};
pub use price::{parse_numeric, parse_price};
pub use state::{
    FilterKey, FilterValue, PriceRange, QueryDefaults, QueryState, ALL_CATEGORIES,
    DEFAULT_SORT_FIELD,
};
pub use traits::{NumberField, Record, TagField, TextField};
pub use value::{Number, Value};
