//! End-to-end scenarios for the query engine.

use std::time::Duration;

use budfinder_seeker::{
    derive_view, parse_numeric, FilterKey, ManualClock, Number, PriceRange, QueryEngine,
    QueryState, Record, SearchConfig, SortOrder, Value,
};

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: u32,
    name: String,
    category: &'static str,
    thc: Option<f64>,
    cbd: Option<f64>,
    rating: Option<f64>,
    effects: Option<Vec<String>>,
    flavor_profile: Option<Vec<String>>,
    flavors: Option<Vec<String>>,
    price: Option<String>,
}

impl Item {
    fn new(id: u32, name: &str, category: &'static str) -> Self {
        Item {
            id,
            name: name.to_string(),
            category,
            thc: None,
            cbd: None,
            rating: None,
            effects: None,
            flavor_profile: None,
            flavors: None,
            price: None,
        }
    }

    fn thc(mut self, thc: f64) -> Self {
        self.thc = Some(thc);
        self
    }

    fn cbd(mut self, cbd: f64) -> Self {
        self.cbd = Some(cbd);
        self
    }

    fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    fn effects(mut self, tags: &[&str]) -> Self {
        self.effects = Some(tags.iter().map(|t| t.to_string()).collect());
        self
    }

    fn flavor_profile(mut self, tags: &[&str]) -> Self {
        self.flavor_profile = Some(tags.iter().map(|t| t.to_string()).collect());
        self
    }

    fn flavors(mut self, tags: &[&str]) -> Self {
        self.flavors = Some(tags.iter().map(|t| t.to_string()).collect());
        self
    }

    fn price(mut self, price: &str) -> Self {
        self.price = Some(price.to_string());
        self
    }
}

fn opt_number(n: Option<f64>) -> Value<'static> {
    n.map_or(Value::None, |n| Value::Number(Number::F64(n)))
}

impl Record for Item {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::Text(&self.name),
            "type" => Value::Text(self.category),
            "thc" => opt_number(self.thc),
            "cbd" => opt_number(self.cbd),
            "rating" => opt_number(self.rating),
            "effects" => self.effects.as_deref().map_or(Value::None, Value::Tags),
            "flavorProfile" => self.flavor_profile.as_deref().map_or(Value::None, Value::Tags),
            "flavors" => self.flavors.as_deref().map_or(Value::None, Value::Tags),
            "price" => self.price.as_deref().map_or(Value::None, Value::Text),
            _ => Value::None,
        }
    }
}

fn ids<C: budfinder_seeker::Clock>(engine: &QueryEngine<Item, C>) -> Vec<u32> {
    engine.results().map(|i| i.id).collect()
}

fn three_strains() -> Vec<Item> {
    vec![
        Item::new(1, "Northern Lights", "strain").thc(18.0).rating(4.9),
        Item::new(2, "Blue Dream", "strain").thc(22.0).rating(4.1),
        Item::new(3, "Gelato", "strain").thc(26.0).rating(4.5),
    ]
}

fn engine_over(items: Vec<Item>) -> (QueryEngine<Item, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let engine = QueryEngine::with_clock(items, SearchConfig::new(["name", "effects"]), clock.clone());
    (engine, clock)
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn min_thc_keeps_stronger_strains_in_rating_order() {
    let (mut engine, _) = engine_over(three_strains());
    engine.update_filter(FilterKey::MinThc, 20.0).unwrap();
    assert_eq!(ids(&engine), vec![3, 2]);
}

#[test]
fn min_thc_with_unrankable_sort_keeps_input_order() {
    let (mut engine, _) = engine_over(three_strains());
    engine.update_filter(FilterKey::SortBy, "releaseDate").unwrap();
    engine.update_filter(FilterKey::MinThc, 20.0).unwrap();
    assert_eq!(ids(&engine), vec![2, 3]);
}

#[test]
fn effects_match_any_requested_tag() {
    let items = vec![
        Item::new(1, "A", "strain").effects(&["Relaxed"]),
        Item::new(2, "B", "strain").effects(&["Euphoric"]),
    ];
    let (mut engine, _) = engine_over(items);
    engine
        .update_filter(FilterKey::Effects, ["Relaxed", "Happy"])
        .unwrap();
    assert_eq!(ids(&engine), vec![1]);
}

#[test]
fn flavors_read_every_candidate_field() {
    let items = vec![
        Item::new(1, "Shatter", "concentrate").flavor_profile(&["Pine"]),
        Item::new(2, "Gummies", "edible").flavors(&["Mango"]),
        Item::new(3, "Cart", "cartridge")
            .flavor_profile(&["Lemon"])
            .flavors(&["Pine"]),
        Item::new(4, "Flower", "strain"),
    ];
    let (mut engine, _) = engine_over(items);
    engine.update_filter(FilterKey::SortBy, "none").unwrap();
    engine.update_filter(FilterKey::Flavors, ["Pine", "Mango"]).unwrap();
    assert_eq!(ids(&engine), vec![1, 2, 3]);
}

#[test]
fn summary_for_type_only() {
    let (mut engine, _) = engine_over(three_strains());
    engine.update_filter(FilterKey::Type, "edible").unwrap();
    assert_eq!(engine.filter_summary(), vec!["Type: edible".to_string()]);
    assert!(engine.is_empty());
}

#[test]
fn summary_reports_each_clause_independently() {
    let (mut engine, _) = engine_over(three_strains());
    engine.update_filter(FilterKey::Flavors, ["Earthy"]).unwrap();
    engine.update_filter(FilterKey::MinThc, 15.0).unwrap();
    engine
        .update_filter(FilterKey::PriceRange, PriceRange::new(5.0, 10.0))
        .unwrap();
    assert_eq!(
        engine.filter_summary(),
        vec!["Flavors: Earthy".to_string(), "THC: 15-100%".to_string()]
    );
}

#[test]
fn cbd_bounds_filter_independently_of_thc() {
    let items = vec![
        Item::new(1, "ACDC", "strain").thc(1.0).cbd(16.0),
        Item::new(2, "Harlequin", "strain").thc(7.0).cbd(10.0),
        Item::new(3, "Gelato", "strain").thc(26.0),
    ];
    let (mut engine, _) = engine_over(items);
    engine.update_filter(FilterKey::MinCbd, 10.0).unwrap();
    engine.update_filter(FilterKey::MaxCbd, 12.0).unwrap();
    assert_eq!(ids(&engine), vec![2]);
}

#[test]
fn price_boundary_parsing() {
    assert_eq!(parse_numeric("$12.50/g"), 12.5);

    let items = vec![
        Item::new(1, "Priced", "strain").price("$12.50/g"),
        Item::new(2, "Unpriced", "strain"),
        Item::new(3, "Blank", "strain").price(""),
    ];
    let (mut engine, _) = engine_over(items);
    assert_eq!(engine.len(), 3);

    engine
        .update_filter(FilterKey::PriceRange, PriceRange::new(1.0, 100.0))
        .unwrap();
    assert_eq!(ids(&engine), vec![1]);

    engine
        .update_filter(FilterKey::PriceRange, PriceRange::new(12.5, 12.5))
        .unwrap();
    assert_eq!(ids(&engine), vec![1]);
}

#[test]
fn sort_by_price_uses_parsed_amount() {
    let items = vec![
        Item::new(1, "Nine", "strain").price("$9/g"),
        Item::new(2, "Eighty", "concentrate").price("$80"),
        Item::new(3, "Ten", "strain").price("$10.00"),
    ];
    let (mut engine, _) = engine_over(items);
    engine.update_filter(FilterKey::SortBy, "price").unwrap();
    assert_eq!(ids(&engine), vec![2, 3, 1]);
    engine.update_filter(FilterKey::SortOrder, SortOrder::Asc).unwrap();
    assert_eq!(ids(&engine), vec![1, 3, 2]);
}

#[test]
fn missing_rating_does_not_reorder() {
    let items = vec![
        Item::new(1, "Unrated", "strain"),
        Item::new(2, "Low", "strain").rating(3.0),
        Item::new(3, "High", "strain").rating(5.0),
    ];
    let (engine, _) = engine_over(items);
    assert_eq!(ids(&engine), vec![1, 3, 2]);
}

#[test]
fn burst_of_edits_derives_once_with_final_term() {
    let (mut engine, clock) = engine_over(three_strains());
    let before = engine.derivations();

    for term in ["b", "bl", "blu", "blue", "blue d"] {
        engine.update_filter(FilterKey::SearchTerm, term).unwrap();
        clock.advance_ms(50);
        assert!(!engine.tick());
    }
    assert_eq!(engine.derivations(), before);

    clock.advance_ms(300);
    assert!(engine.tick());
    assert_eq!(engine.derivations(), before + 1);
    assert_eq!(engine.active_search_term(), "blue d");
    assert_eq!(ids(&engine), vec![2]);
}

#[test]
fn event_loop_waits_exactly_until_search_is_due() {
    let (mut engine, clock) = engine_over(three_strains());
    assert_eq!(engine.pending_search_due_in(), None);

    engine.update_filter(FilterKey::SearchTerm, "gelato").unwrap();
    assert_eq!(engine.pending_search_due_in(), Some(Duration::from_millis(300)));

    clock.advance_ms(200);
    assert!(!engine.tick());
    let wait = engine.pending_search_due_in().unwrap();
    assert_eq!(wait, Duration::from_millis(100));

    clock.advance(wait);
    assert!(engine.tick());
    assert_eq!(engine.pending_search_due_in(), None);
    assert_eq!(ids(&engine), vec![3]);
}

#[test]
fn failed_update_keeps_view_and_pending_search() {
    let (mut engine, clock) = engine_over(three_strains());
    engine.update_filter(FilterKey::SearchTerm, "gelato").unwrap();
    clock.advance_ms(300);
    let before = (engine.len(), engine.derivations());

    assert!(engine.update_filter(FilterKey::MinThc, "high").is_err());
    assert_eq!((engine.len(), engine.derivations()), before);
    assert_eq!(engine.active_search_term(), "");
    assert_eq!(engine.pending_search_due_in(), Some(Duration::ZERO));
}

#[test]
fn custom_debounce_window() {
    let clock = ManualClock::new();
    let config = SearchConfig::new(["name"]).with_debounce(Duration::from_millis(50));
    let mut engine = QueryEngine::with_clock(three_strains(), config, clock.clone());

    engine.update_filter(FilterKey::SearchTerm, "gelato").unwrap();
    clock.advance_ms(50);
    assert!(engine.tick());
    assert_eq!(ids(&engine), vec![3]);
}

#[test]
fn reset_twice_equals_reset_once() {
    let (mut engine, _) = engine_over(three_strains());
    engine.update_filter(FilterKey::MaxThc, 20.0).unwrap();
    engine.update_filter(FilterKey::Type, "edible").unwrap();

    engine.reset_filters();
    let once = engine.state().clone();
    let view_once = engine.indices().to_vec();
    engine.reset_filters();

    assert_eq!(engine.state(), &once);
    assert_eq!(engine.indices(), view_once.as_slice());
    assert_eq!(engine.state(), &QueryState::default());
}

#[test]
fn derivation_is_deterministic() {
    let mut items = three_strains();
    items.push(Item::new(4, "Sour Diesel", "strain").thc(22.0).rating(4.1));
    items.push(Item::new(5, "Lemon Haze", "strain").thc(22.0).rating(4.1));

    let state = QueryState::default();
    let config = SearchConfig::new(["name"]);
    let first = derive_view(&items, &state, "", &config);
    let second = derive_view(&items, &state, "", &config);

    assert_eq!(first, second);
    assert_eq!(first, vec![0, 2, 1, 3, 4]);
}

#[test]
fn source_is_never_mutated() {
    let items = three_strains();
    let snapshot = items.clone();
    let (mut engine, _) = engine_over(items);
    engine.update_filter(FilterKey::SortOrder, SortOrder::Asc).unwrap();
    engine.update_filter(FilterKey::MinThc, 19.0).unwrap();
    assert_eq!(engine.source(), snapshot.as_slice());
}
