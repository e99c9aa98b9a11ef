//! Browse-specific error types
//!
//! None of these end a session. Preference failures are logged and the
//! in-memory selection carries on; lookup misses only surface when a caller
//! explicitly asks for a character that does not exist (CLI arguments).

use thiserror::Error;

/// Errors raised while browsing
#[derive(Debug, Error)]
pub enum BrowseError {
    /// Requested character id is not in the catalogue
    #[error("Unknown character '{0}'")]
    UnknownCharacter(String),
}

/// Errors raised by preference stores
#[derive(Debug, Error)]
pub enum PrefsError {
    /// Reading or writing the preference file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Preferences could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A share target could not deliver the link
#[derive(Debug, Error)]
#[error("Share failed: {0}")]
pub struct ShareError(pub String);

impl From<toml::ser::Error> for PrefsError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
