//! Error types for the seeker crate.
//!
//! Deriving a view never fails. Errors only come from caller misuse of the
//! update interface and from loading configuration.

use thiserror::Error;

use crate::state::FilterKey;

/// Errors that can occur when updating query state or loading configuration.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The name does not refer to an updatable query field.
    #[error("unknown filter field '{0}'")]
    UnknownField(String),

    /// The value kind does not fit the field.
    #[error("filter '{key}' expects {expected}, got {actual}")]
    TypeMismatch {
        key: FilterKey,
        expected: &'static str,
        actual: &'static str,
    },

    /// Invalid YAML search configuration.
    #[error("invalid search configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid JSON search configuration.
    #[error("invalid search configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, QueryError>;
