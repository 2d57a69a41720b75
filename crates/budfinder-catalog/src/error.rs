//! Error types for the catalog crate.

use thiserror::Error;

/// Errors raised by catalog collaborators.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The comparison list already holds its maximum number of products.
    #[error("comparison list is full ({capacity} products)")]
    ComparisonFull { capacity: usize },

    /// The product is already in the comparison list.
    #[error("{category} '{id}' is already being compared")]
    AlreadyCompared { category: &'static str, id: String },

    /// CSV export failed.
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    /// JSON import or export failed.
    #[error("json exchange failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the export failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
