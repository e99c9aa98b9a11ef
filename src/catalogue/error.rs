//! Ingestion error types
//!
//! Every variant here is recoverable: callers swap in the built-in catalogue
//! and log a warning. They are still typed so tests and the CLI can tell the
//! failure modes apart.

use thiserror::Error;

/// Reasons a raw route catalogue could not be turned into a `Catalogue`
#[derive(Debug, Error)]
pub enum IngestError {
    /// No source data was supplied
    #[error("Combo data was not found")]
    Missing,

    /// Source data is not a keyed structure of character id → routes
    #[error("Combo data is not a keyed structure (found {0})")]
    NotKeyed(&'static str),

    /// Every character was dropped during normalization
    #[error("No combos found in combo data")]
    NoCharacters,

    /// Reading the dataset file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset text is not valid JSON
    #[error("Invalid combo JSON: {0}")]
    Json(#[from] serde_json::Error),
}
