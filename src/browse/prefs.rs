//! Persisted browse preferences
//!
//! Exactly two scalar values survive between sessions: the last selected
//! character and the last view mode. Both are optional and anything
//! unrecognized is ignored in favor of defaults.

use super::error::PrefsError;
use crate::browse::models::ViewMode;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Key holding the last selected character id
pub const LAST_CHARACTER_KEY: &str = "combodeck.last_character";

/// Key holding the last view mode (`grid` | `deck`)
pub const VIEW_MODE_KEY: &str = "combodeck.view_mode";

/// Scalar key-value store for preferences
pub trait PreferenceStore {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value synchronously
    ///
    /// # Errors
    ///
    /// Returns `PrefsError` if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Preferences as read once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub last_character: Option<String>,
    pub view_mode: Option<ViewMode>,
}

impl Preferences {
    /// Snapshot both values, dropping unrecognized view modes
    #[must_use]
    pub fn read(store: &dyn PreferenceStore) -> Self {
        Self {
            last_character: store
                .get(LAST_CHARACTER_KEY)
                .filter(|id| !id.trim().is_empty()),
            view_mode: store.get(VIEW_MODE_KEY).and_then(|v| stored_view_mode(&v)),
        }
    }
}

/// Exact `grid` or `deck`, nothing looser
fn stored_view_mode(value: &str) -> Option<ViewMode> {
    [ViewMode::Grid, ViewMode::Deck]
        .into_iter()
        .find(|mode| mode.as_str() == value)
}

/// In-memory store, used in tests and when no preference file is configured
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with values
    #[must_use]
    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat string table persisted as TOML
///
/// The file is read once when opened; each `set` rewrites it.
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlPreferenceStore {
    /// Open the store at `path`
    ///
    /// A missing, unreadable or malformed file yields an empty store.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::read_values(&path);
        Self { path, values }
    }

    fn read_values(path: &Path) -> BTreeMap<String, String> {
        if !path.exists() {
            return BTreeMap::new();
        }

        match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed preferences");
                BTreeMap::new()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable preferences");
                BTreeMap::new()
            }
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml = toml::to_string_pretty(&self.values)?;
        fs::write(&self.path, toml)?;
        Ok(())
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_valid_preferences() {
        let store = MemoryPreferenceStore::with_values([
            (LAST_CHARACTER_KEY, "paul"),
            (VIEW_MODE_KEY, "deck"),
        ]);
        let prefs = Preferences::read(&store);
        assert_eq!(prefs.last_character.as_deref(), Some("paul"));
        assert_eq!(prefs.view_mode, Some(ViewMode::Deck));
    }

    #[test]
    fn test_invalid_values_ignored() {
        let store = MemoryPreferenceStore::with_values([
            (LAST_CHARACTER_KEY, "  "),
            (VIEW_MODE_KEY, "carousel"),
        ]);
        assert_eq!(Preferences::read(&store), Preferences::default());
    }

    #[test]
    fn test_view_mode_must_match_exactly() {
        for loose in [" deck ", "DECK", "Grid"] {
            let store = MemoryPreferenceStore::with_values([(VIEW_MODE_KEY, loose)]);
            assert_eq!(Preferences::read(&store).view_mode, None, "accepted {loose:?}");
        }
    }

    #[test]
    fn test_toml_store_persists_across_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let mut store = TomlPreferenceStore::open(&path);
        assert_eq!(store.get(LAST_CHARACTER_KEY), None);
        store.set(LAST_CHARACTER_KEY, "devil_jin").unwrap();
        store.set(VIEW_MODE_KEY, "deck").unwrap();

        let reopened = TomlPreferenceStore::open(&path);
        assert_eq!(reopened.get(LAST_CHARACTER_KEY).as_deref(), Some("devil_jin"));
        assert_eq!(reopened.get(VIEW_MODE_KEY).as_deref(), Some("deck"));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn test_toml_store_malformed_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let store = TomlPreferenceStore::open(&path);
        assert_eq!(store.get(LAST_CHARACTER_KEY), None);
    }

    #[test]
    fn test_toml_store_write_failure() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the write fail
        let path = dir.path().join("preferences.toml");
        fs::create_dir_all(&path).unwrap();

        let mut store = TomlPreferenceStore::open(&path);
        assert!(matches!(store.set(VIEW_MODE_KEY, "grid"), Err(PrefsError::Io(_))));
    }
}
