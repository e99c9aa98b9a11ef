//! Combodeck - a browsable catalogue of fighting-game combo routes
//!
//! Raw per-character route data is normalized into typed combos, then
//! browsed through a single session controller that owns the selection
//! (character, filter, search, view, active combo) and hands presentation
//! adapters a consistent snapshot after every intent.

use thiserror::Error;

pub mod browse;
pub mod catalogue;
pub mod cli;
pub mod combo;
pub mod commands;
pub mod config;
pub mod normalize;
pub mod output;
pub mod portraits;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ComboDeckError {
    /// Dataset ingestion error
    #[error("Ingest error: {0}")]
    IngestError(#[from] catalogue::IngestError),
    /// Browse error
    #[error("Browse error: {0}")]
    BrowseError(#[from] browse::BrowseError),
    /// Preference store error
    #[error("Preference error: {0}")]
    PrefsError(#[from] browse::PrefsError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
