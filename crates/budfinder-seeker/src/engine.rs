//! The query engine.
//!
//! [`QueryEngine`] owns the query state of one browsing session and keeps a
//! derived, filtered and sorted view of a shared source collection up to
//! date. The view is recomputed from scratch after every state change or
//! source replacement; it is never patched incrementally.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::SearchConfig;
use crate::debounce::{Clock, Debouncer, SystemClock};
use crate::error::Result;
use crate::ordering::{compare_records, stable_sort_by};
use crate::predicate::Predicates;
use crate::state::{FilterKey, FilterValue, QueryState};
use crate::traits::Record;

/// Derives the view of `items` under `state`.
///
/// Returns indices into `items` of the matching records, stably sorted by
/// `state.sort_by` in `state.sort_order`. `term` is the search term to match,
/// which the engine supplies from its debouncer rather than from `state`.
///
/// This is a pure function: equal inputs always give an equal output.
pub fn derive_view<T: Record>(
    items: &[T],
    state: &QueryState,
    term: &str,
    config: &SearchConfig,
) -> Vec<usize> {
    let predicates = Predicates::new(
        state,
        term,
        &config.search_fields,
        &config.effect_fields,
        &config.flavor_fields,
    );

    let mut view: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| predicates.matches(*item))
        .map(|(i, _)| i)
        .collect();

    stable_sort_by(&mut view, |&a, &b| {
        compare_records(&items[a], &items[b], &state.sort_by, state.sort_order)
    });

    debug!(
        total = items.len(),
        matched = view.len(),
        sort_by = %state.sort_by,
        sort_order = %state.sort_order,
        "derived view"
    );

    view
}

/// Search, filter and sort session over a collection of records.
///
/// # Example
///
/// ```
/// use budfinder_seeker::{FilterKey, Number, QueryEngine, Record, SearchConfig, Value};
///
/// struct Strain {
///     name: &'static str,
///     thc: f64,
///     rating: f64,
/// }
///
/// impl Record for Strain {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::Text(self.name),
///             "type" => Value::Text("strain"),
///             "thc" => Value::Number(Number::F64(self.thc)),
///             "rating" => Value::Number(Number::F64(self.rating)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let strains = vec![
///     Strain { name: "Northern Lights", thc: 18.0, rating: 4.1 },
///     Strain { name: "Blue Dream", thc: 22.0, rating: 4.4 },
///     Strain { name: "Gelato", thc: 26.0, rating: 4.7 },
/// ];
///
/// let mut engine = QueryEngine::new(strains, SearchConfig::new(["name"]));
/// engine.update_filter(FilterKey::MinThc, 20.0).unwrap();
///
/// let names: Vec<_> = engine.results().map(|s| s.name).collect();
/// assert_eq!(names, ["Gelato", "Blue Dream"]);
/// assert_eq!(engine.filter_summary(), ["THC: 20-100%"]);
/// ```
pub struct QueryEngine<T, C = SystemClock> {
    source: Arc<[T]>,
    config: SearchConfig,
    initial: QueryState,
    state: QueryState,
    term: String,
    debouncer: Debouncer<String>,
    clock: C,
    view: Vec<usize>,
    derivations: u64,
}

impl<T: Record> QueryEngine<T, SystemClock> {
    /// Creates an engine timed by the wall clock.
    pub fn new(source: impl Into<Arc<[T]>>, config: SearchConfig) -> Self {
        QueryEngine::with_clock(source, config, SystemClock::new())
    }
}

impl<T: Record, C: Clock> QueryEngine<T, C> {
    /// Creates an engine timed by `clock`.
    ///
    /// The starting state, which [`reset_filters`](Self::reset_filters) later
    /// returns to, is the built-in defaults with `config.defaults` on top.
    pub fn with_clock(source: impl Into<Arc<[T]>>, config: SearchConfig, clock: C) -> Self {
        let initial = QueryState::with_defaults(&config.defaults);
        let mut engine = QueryEngine {
            source: source.into(),
            debouncer: Debouncer::new(config.debounce()),
            term: initial.search_term.clone(),
            state: initial.clone(),
            initial,
            config,
            clock,
            view: Vec::new(),
            derivations: 0,
        };
        engine.derive();
        engine
    }

    // ========================================================================
    // State
    // ========================================================================

    /// Current query state, for binding to form controls.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// The state [`reset_filters`](Self::reset_filters) restores.
    pub fn initial_state(&self) -> &QueryState {
        &self.initial
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The search term the current view was matched against.
    ///
    /// Lags behind `state().search_term` until edits have settled.
    pub fn active_search_term(&self) -> &str {
        &self.term
    }

    /// Returns `true` while a search-term edit is waiting out the debounce
    /// window.
    pub fn has_pending_search(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Replaces one field of the query state.
    ///
    /// A search-term change is applied to the state at once but only reaches
    /// the view after the debounce window; see [`tick`](Self::tick). Any other
    /// change re-derives the view immediately, together with any search-term
    /// edit that has come due. On error neither the state nor the view
    /// changes.
    pub fn update_filter(&mut self, key: FilterKey, value: impl Into<FilterValue>) -> Result<()> {
        self.state.apply(key, value.into())?;
        let flushed = self.tick();

        if key == FilterKey::SearchTerm {
            self.debouncer
                .schedule(self.state.search_term.clone(), self.clock.now());
        } else if !flushed {
            self.derive();
        }
        Ok(())
    }

    /// Like [`update_filter`](Self::update_filter), with the field given by its
    /// form name (`"minThc"`, `"priceRange"`, ...).
    pub fn update_filter_by_name(&mut self, name: &str, value: impl Into<FilterValue>) -> Result<()> {
        let key = name.parse::<FilterKey>()?;
        self.update_filter(key, value)
    }

    /// Restores the starting state and re-derives.
    ///
    /// A pending search-term edit is discarded and the starting term takes
    /// effect immediately.
    pub fn reset_filters(&mut self) {
        self.debouncer.cancel();
        self.state = self.initial.clone();
        self.term = self.state.search_term.clone();
        debug!("filters reset");
        self.derive();
    }

    /// Human-readable clauses for every active filter; see
    /// [`QueryState::summary`].
    pub fn filter_summary(&self) -> Vec<String> {
        self.state.summary()
    }

    /// Applies a settled search-term edit, if one is due.
    ///
    /// Returns `true` if the view was re-derived.
    pub fn tick(&mut self) -> bool {
        match self.debouncer.poll(self.clock.now()) {
            Some(term) => {
                self.term = term;
                self.derive();
                true
            }
            None => false,
        }
    }

    /// Time left until a pending search-term edit comes due.
    ///
    /// Returns `None` when nothing is pending and `Duration::ZERO` once the
    /// edit is overdue. Event loops arm a timer with this and call
    /// [`tick`](Self::tick) when it fires.
    pub fn pending_search_due_in(&self) -> Option<Duration> {
        self.debouncer
            .deadline()
            .map(|deadline| deadline.saturating_sub(self.clock.now()))
    }

    // ========================================================================
    // Source
    // ========================================================================

    /// Replaces the source collection and re-derives.
    pub fn set_source(&mut self, source: impl Into<Arc<[T]>>) {
        self.source = source.into();
        debug!(len = self.source.len(), "source replaced");
        self.derive();
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// Shared handle to the source collection.
    pub fn shared_source(&self) -> Arc<[T]> {
        Arc::clone(&self.source)
    }

    // ========================================================================
    // View
    // ========================================================================

    /// Records of the derived view, in view order.
    pub fn results(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.view.iter().map(move |&i| &self.source[i])
    }

    /// Records of the derived view collected into a `Vec`.
    pub fn view(&self) -> Vec<&T> {
        self.results().collect()
    }

    /// Source indices of the derived view, in view order.
    pub fn indices(&self) -> &[usize] {
        &self.view
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Number of derivation passes run so far, including the initial one.
    pub fn derivations(&self) -> u64 {
        self.derivations
    }

    fn derive(&mut self) {
        self.view = derive_view(&self.source, &self.state, &self.term, &self.config);
        self.derivations += 1;
    }
}

impl<T, C> std::fmt::Debug for QueryEngine<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEngine")
            .field("source_len", &self.source.len())
            .field("state", &self.state)
            .field("term", &self.term)
            .field("pending_search", &self.debouncer.is_pending())
            .field("view", &self.view)
            .finish()
    }
}
