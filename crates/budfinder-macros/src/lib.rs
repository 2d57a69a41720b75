//! Proc macros for Budfinder.
//!
//! # Derive Macros
//!
//! - [`Record`] - Generate `budfinder_seeker::Record` field access from
//!   struct field annotations
//!
//! For working examples, see `budfinder-catalog/tests/record_derive.rs`.

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Record` trait for catalog structs.
///
/// This macro generates an implementation of `budfinder_seeker::Record`,
/// making the annotated fields visible to search, filters and sorting.
/// Fields without a `#[record(...)]` annotation are not queryable.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `text` | Free-text field (`String`, `Option<String>`) |
/// | `tags` | Tag list (`Vec<String>`, `Option<Vec<String>>`) |
/// | `number` | Numeric field (any primitive number, or `Option` of one) |
/// | `skip` | Exclude this field from queries |
/// | `rename = "..."` | Use a custom name for queries |
///
/// # Container Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `category = "..."` | Answer the `type` field with a fixed discriminator |
///
/// # Generated Code
///
/// 1. Field name constants (e.g., `Strain::NAME`, `Strain::FLAVOR_PROFILE`)
/// 2. Implementation of `Record::field_value()`
///
/// # Example
///
/// ```ignore
/// use budfinder_macros::Record;
/// use budfinder_seeker::{FilterKey, QueryEngine, SearchConfig};
///
/// #[derive(Record)]
/// #[record(category = "concentrate")]
/// struct Concentrate {
///     #[record(text)]
///     name: String,
///
///     #[record(number)]
///     thc: f64,
///
///     #[record(tags, rename = "flavorProfile")]
///     flavor_profile: Vec<String>,
///
///     #[record(text)]
///     price: Option<String>,
///
///     batch_id: u64,
/// }
///
/// let config = SearchConfig::new([Concentrate::NAME, Concentrate::FLAVOR_PROFILE]);
/// let mut engine = QueryEngine::new(concentrates, config);
/// engine.update_filter(FilterKey::Flavors, ["Pine"])?;
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
