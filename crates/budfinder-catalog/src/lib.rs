//! Budfinder catalog - product records and the collections built on them.
//!
//! Four product categories share one query surface: each record derives
//! [`Record`](budfinder_seeker::Record), and [`Product`] unions them with a
//! `type` discriminator that the category filter reads.
//!
//! On top of the records sit:
//!
//! - [`Favorites`]: per-category saved lists, searchable as one collection
//! - [`ComparisonList`]: a short side-by-side list rendered as a [`ComparisonTable`]
//! - [`write_json`] / [`read_json`] / [`write_csv`]: exchange of product lists
//!
//! # Example
//!
//! ```rust
//! use budfinder_catalog::{Category, Edible, Favorites, Product};
//! use budfinder_seeker::{FilterKey, SearchConfig};
//!
//! let mut favorites = Favorites::new();
//! favorites.save(Edible {
//!     id: "e-1".into(),
//!     name: "Mango Gummies".into(),
//!     brand: "Kiva".into(),
//!     dose_mg: 5.0,
//!     servings: 20,
//!     rating: 4.6,
//!     price: Some("$18".into()),
//!     effects: vec!["Relaxed".into()],
//!     flavors: vec!["Mango".into()],
//! });
//!
//! let mut engine = favorites.search(SearchConfig::new(Product::SEARCH_FIELDS));
//! engine.update_filter(FilterKey::Type, "edible").unwrap();
//! assert_eq!(engine.len(), 1);
//! assert_eq!(engine.view()[0].category(), Category::Edible);
//! ```

pub mod comparison;
pub mod error;
pub mod exchange;
pub mod favorites;
pub mod product;
pub mod render;

pub use comparison::{ComparisonList, ComparisonRow, ComparisonTable, DEFAULT_COMPARISON_CAPACITY};
pub use error::{CatalogError, Result};
pub use exchange::{read_json, write_csv, write_json};
pub use favorites::Favorites;
pub use product::{Cartridge, Category, Concentrate, Edible, Product, Strain};
pub use render::{render_fields, render_value, MISSING};

/// Derive macro for [`Record`](budfinder_seeker::Record).
pub use budfinder_macros::Record;
