//! Integration tests for the `Record` derive macro.
//!
//! These tests check the generated field constants and `field_value`
//! dispatch against hand-built structs.

#![allow(dead_code)] // Some fields are intentionally not queryable

use budfinder_catalog::Record as DeriveRecord;
use budfinder_seeker::{FilterKey, Number, QueryEngine, Record, SearchConfig, Value};

// =============================================================================
// Basic derive tests
// =============================================================================

#[derive(DeriveRecord)]
struct Tincture {
    #[record(text)]
    name: String,

    #[record(number)]
    thc: f32,

    #[record(tags)]
    effects: Vec<String>,
}

fn tincture() -> Tincture {
    Tincture {
        name: "Night Drops".into(),
        thc: 12.5,
        effects: vec!["Sleepy".into()],
    }
}

#[test]
fn test_field_values() {
    let t = tincture();
    assert_eq!(t.field_value("name"), Value::Text("Night Drops"));
    assert_eq!(t.field_value("thc"), Value::Number(Number::F64(12.5)));
    assert!(matches!(t.field_value("effects"), Value::Tags(tags) if tags == ["Sleepy"]));
}

#[test]
fn test_field_constants_generated() {
    assert_eq!(Tincture::NAME, "name");
    assert_eq!(Tincture::THC, "thc");
    assert_eq!(Tincture::EFFECTS, "effects");
}

#[test]
fn test_unknown_field_returns_none() {
    let t = tincture();
    assert_eq!(t.field_value("unknown"), Value::None);
    assert_eq!(t.field_value(""), Value::None);
    // No container category, so no type discriminator either.
    assert_eq!(t.field_value("type"), Value::None);
}

#[test]
fn test_accessor_function() {
    let t = tincture();
    assert_eq!(Tincture::accessor(&t, "name"), Value::Text("Night Drops"));
}

// =============================================================================
// Attributes
// =============================================================================

#[derive(DeriveRecord)]
#[record(category = "topical")]
struct Topical {
    #[record(text)]
    id: String,

    #[record(tags, rename = "flavorProfile")]
    scent_profile: Vec<String>,

    #[record(number)]
    cbd: Option<f64>,

    #[record(text)]
    price: Option<String>,

    #[record(skip)]
    internal_sku: String,

    notes: String,
}

fn topical(cbd: Option<f64>) -> Topical {
    Topical {
        id: "t-1".into(),
        scent_profile: vec!["Lavender".into()],
        cbd,
        price: None,
        internal_sku: "SKU-9".into(),
        notes: "unscented base".into(),
    }
}

#[test]
fn test_container_category_answers_type() {
    assert_eq!(topical(None).field_value("type"), Value::Text("topical"));
}

#[test]
fn test_rename_changes_query_name_only() {
    let t = topical(None);
    assert_eq!(Topical::SCENT_PROFILE, "flavorProfile");
    assert!(matches!(t.field_value("flavorProfile"), Value::Tags(_)));
    assert_eq!(t.field_value("scent_profile"), Value::None);
}

#[test]
fn test_option_fields() {
    assert_eq!(topical(None).field_value("cbd"), Value::None);
    assert_eq!(
        topical(Some(250.0)).field_value("cbd"),
        Value::Number(Number::F64(250.0))
    );
    assert_eq!(topical(None).field_value("price"), Value::None);
}

#[test]
fn test_skipped_and_unannotated_fields_are_hidden() {
    let t = topical(None);
    assert_eq!(t.field_value("internal_sku"), Value::None);
    assert_eq!(t.field_value("notes"), Value::None);
}

// =============================================================================
// Engine integration
// =============================================================================

#[test]
fn test_derived_records_drive_engine() {
    let items = vec![topical(Some(100.0)), topical(None), topical(Some(600.0))];
    let mut engine = QueryEngine::new(items, SearchConfig::new(["id"]));

    engine.update_filter(FilterKey::MinCbd, 50.0).unwrap();
    engine.update_filter(FilterKey::MaxCbd, 500.0).unwrap();
    assert_eq!(engine.indices(), &[0]);

    engine.update_filter(FilterKey::Type, "strain").unwrap();
    assert!(engine.is_empty());
}
