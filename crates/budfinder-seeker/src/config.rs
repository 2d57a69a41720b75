//! Search configuration.
//!
//! A [`SearchConfig`] declares which fields free text is matched against,
//! where tags are read from, the caller's default query state and the
//! debounce window. It can be built in code or loaded from YAML / JSON:
//!
//! ```yaml
//! searchFields: [name, brand, effects]
//! debounceMs: 250
//! defaults:
//!   type: strain
//!   sortBy: name
//!   sortOrder: asc
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::debounce::DEFAULT_DEBOUNCE;
use crate::error::Result;
use crate::state::QueryDefaults;

/// Declarative configuration for a [`QueryEngine`](crate::QueryEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Fields eligible for free-text matching.
    pub search_fields: Vec<String>,
    /// Partial query state layered over the built-in defaults.
    pub defaults: QueryDefaults,
    /// Quiet window for search-term edits, in milliseconds.
    pub debounce_ms: u64,
    /// Fields the effects filter reads tags from.
    pub effect_fields: Vec<String>,
    /// Fields the flavors filter reads tags from.
    pub flavor_fields: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            search_fields: Vec::new(),
            defaults: QueryDefaults::default(),
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            effect_fields: vec!["effects".to_string()],
            flavor_fields: vec!["flavorProfile".to_string(), "flavors".to_string()],
        }
    }
}

impl SearchConfig {
    /// Creates a configuration searching the given fields, everything else
    /// at its default.
    pub fn new<I, S>(search_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SearchConfig {
            search_fields: search_fields.into_iter().map(Into::into).collect(),
            ..SearchConfig::default()
        }
    }

    /// Replaces the caller defaults.
    pub fn with_defaults(mut self, defaults: QueryDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replaces the debounce window.
    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce_ms = window.as_millis() as u64;
        self
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
