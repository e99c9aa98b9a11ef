//! Character catalogue
//!
//! The catalogue maps character ids to their normalized combos. It is built
//! once from raw route data and only ever replaced wholesale. When ingestion
//! fails the caller falls back to [`Catalogue::fallback`], so there is always
//! at least one character to show.
//!
//! # Loading
//!
//! ```no_run
//! use combodeck::catalogue::Catalogue;
//!
//! let catalogue = Catalogue::or_fallback(Catalogue::load("landing-page/combos.json"));
//! assert!(!catalogue.is_empty());
//! ```

pub mod error;

pub use error::IngestError;

use crate::combo::{CarryTier, Combo, ComboType, Move};
use crate::normalize::{self, RawRoute};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Style label shown for every character
pub const CHARACTER_STYLE: &str = "TEKKEN 8 Moveset";

/// Difficulty label of the built-in character
pub const FALLBACK_DIFFICULTY: &str = "Execution: Variable";

/// Id of the built-in character
pub const FALLBACK_CHARACTER_ID: &str = "jin";

/// One playable character and its combos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    /// Stable key from the source data
    pub id: String,

    /// Display name derived from the id
    pub name: String,

    /// Constant style label
    pub style: String,

    /// Difficulty label, parameterized by combo count
    pub difficulty: String,

    /// Combos in source order
    pub combos: Vec<Combo>,
}

impl Character {
    /// Build a character from normalized combos
    #[must_use]
    pub fn new(id: impl Into<String>, combos: Vec<Combo>) -> Self {
        let id = id.into();
        Self {
            name: normalize::display_name(&id),
            style: CHARACTER_STYLE.to_string(),
            difficulty: format!("{FALLBACK_DIFFICULTY} ({} combos)", combos.len()),
            id,
            combos,
        }
    }

    /// Badge text drawn when the portrait is missing
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Portrait image path under `base`
    #[must_use]
    pub fn portrait_path(&self, base: &str) -> String {
        format!("{base}/{}.jpg", self.id)
    }
}

/// Ordered mapping of character id → character
///
/// Iteration order is the source order of the raw data, so "first character"
/// is well defined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    characters: Vec<Character>,
}

impl Catalogue {
    /// Build from characters, keeping the first entry for a repeated id
    #[must_use]
    pub fn new(characters: Vec<Character>) -> Self {
        let mut unique: Vec<Character> = Vec::with_capacity(characters.len());
        for character in characters {
            if !unique.iter().any(|c| c.id == character.id) {
                unique.push(character);
            }
        }
        Self { characters: unique }
    }

    /// Normalize per-character raw routes
    ///
    /// Characters with no routes are dropped.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::NoCharacters` if no character survives.
    pub fn from_routes<I, S>(entries: I) -> Result<Self, IngestError>
    where
        I: IntoIterator<Item = (S, Vec<RawRoute>)>,
        S: Into<String>,
    {
        let characters: Vec<Character> = entries
            .into_iter()
            .filter(|(_, routes)| !routes.is_empty())
            .map(|(id, routes)| Character::new(id, normalize::normalize_routes(&routes)))
            .collect();

        if characters.is_empty() {
            return Err(IngestError::NoCharacters);
        }

        Ok(Self::new(characters))
    }

    /// Build from the opaque source structure (character id → array of routes)
    ///
    /// # Errors
    ///
    /// Returns `IngestError::NotKeyed` if `value` is not an object, or
    /// `IngestError::NoCharacters` if no character has any routes.
    pub fn from_value(value: &Value) -> Result<Self, IngestError> {
        let Value::Object(map) = value else {
            return Err(IngestError::NotKeyed(json_kind(value)));
        };

        Self::from_routes(map.iter().map(|(id, routes)| {
            let routes = routes
                .as_array()
                .map(|items| items.iter().map(RawRoute::from).collect())
                .unwrap_or_default();
            (id.clone(), routes)
        }))
    }

    /// Parse dataset text
    ///
    /// Accepts plain JSON or a script assignment such as
    /// `window.COMBOS_DATA = { ... };`.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::Missing` for blank text, `IngestError::Json` for
    /// unparseable text, and the errors of [`Catalogue::from_value`].
    pub fn from_source_text(text: &str) -> Result<Self, IngestError> {
        Self::from_value(&parse_source(text)?)
    }

    /// Read and parse a dataset file
    ///
    /// # Errors
    ///
    /// Returns `IngestError::Io` if the file cannot be read, plus the errors
    /// of [`Catalogue::from_source_text`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        Self::from_value(&read_source(path)?)
    }

    /// Keep a successful load, or log and use the built-in data
    #[must_use]
    pub fn or_fallback(loaded: Result<Self, IngestError>) -> Self {
        match loaded {
            Ok(catalogue) => catalogue,
            Err(e) => {
                tracing::warn!(error = %e, "using fallback combo data");
                Self::fallback()
            }
        }
    }

    /// Built-in single-character catalogue
    #[must_use]
    pub fn fallback() -> Self {
        let steps: Vec<String> = ["u/f+4", "f+3~3", "b+3", "f+4,2"]
            .into_iter()
            .map(str::to_string)
            .collect();
        let combo = Combo {
            title: "Sample BnB".to_string(),
            combo_type: ComboType::Bnb,
            starter: "u/f+4".to_string(),
            damage: 64,
            carry: CarryTier::Mid,
            notes: "Fallback combo if JSON is unavailable.".to_string(),
            moves: steps.iter().map(|s| Move::text(s.clone())).collect(),
            steps,
        };

        Self::new(vec![Character {
            id: FALLBACK_CHARACTER_ID.to_string(),
            name: "Jin".to_string(),
            style: CHARACTER_STYLE.to_string(),
            difficulty: FALLBACK_DIFFICULTY.to_string(),
            combos: vec![combo],
        }])
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Id of the first character in source order
    #[must_use]
    pub fn first_id(&self) -> Option<&str> {
        self.characters.first().map(|c| c.id.as_str())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.characters.iter().map(|c| c.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

/// Parse dataset text into the raw keyed structure
///
/// # Errors
///
/// Returns `IngestError::Missing` for blank text and `IngestError::Json` for
/// unparseable text.
pub fn parse_source(text: &str) -> Result<Value, IngestError> {
    let body = strip_assignment(text);
    if body.is_empty() {
        return Err(IngestError::Missing);
    }
    Ok(serde_json::from_str(body)?)
}

/// Read a dataset file into the raw keyed structure
///
/// # Errors
///
/// Returns `IngestError::Io` if the file cannot be read, plus the errors of
/// [`parse_source`].
pub fn read_source(path: impl AsRef<Path>) -> Result<Value, IngestError> {
    parse_source(&fs::read_to_string(path)?)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Drop a leading `name =` and trailing `;` around a JSON body
fn strip_assignment(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(brace) = trimmed.find('{') else {
        return trimmed;
    };

    let prefix = &trimmed[..brace];
    if prefix.trim_end().ends_with('=') {
        trimmed[brace..].trim_end_matches(|c: char| c == ';' || c.is_whitespace())
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use serde_json::json;

    #[test]
    fn test_from_value_keeps_source_order() {
        let catalogue = Catalogue::from_value(&testing::sample_dataset()).unwrap();
        let ids: Vec<&str> = catalogue.ids().collect();
        assert_eq!(ids, vec!["paul", "devil_jin", "jack-8"]);
        assert_eq!(catalogue.first_id(), Some("paul"));
    }

    #[test]
    fn test_empty_characters_dropped() {
        let value = json!({
            "nina": [],
            "law": "not a list",
            "king": [{"text": "1 > 2"}]
        });
        let catalogue = Catalogue::from_value(&value).unwrap();
        assert_eq!(catalogue.len(), 1);
        assert!(catalogue.contains("king"));
        assert!(!catalogue.contains("nina"));
        assert!(!catalogue.contains("law"));
    }

    #[test]
    fn test_not_keyed_input() {
        assert!(matches!(
            Catalogue::from_value(&json!([1, 2])),
            Err(IngestError::NotKeyed("array"))
        ));
        assert!(matches!(
            Catalogue::from_value(&Value::Null),
            Err(IngestError::NotKeyed("null"))
        ));
    }

    #[test]
    fn test_no_surviving_characters() {
        assert!(matches!(
            Catalogue::from_value(&json!({"nina": []})),
            Err(IngestError::NoCharacters)
        ));
        assert!(matches!(
            Catalogue::from_value(&json!({})),
            Err(IngestError::NoCharacters)
        ));
    }

    #[test]
    fn test_character_labels() {
        let catalogue = Catalogue::from_value(&testing::sample_dataset()).unwrap();
        let devil = catalogue.get("devil_jin").unwrap();
        assert_eq!(devil.name, "Devil Jin");
        assert_eq!(devil.style, CHARACTER_STYLE);
        assert_eq!(devil.difficulty, "Execution: Variable (2 combos)");
        assert_eq!(devil.initials(), "DJ");
        assert_eq!(devil.portrait_path("./assets/characters"), "./assets/characters/devil_jin.jpg");
    }

    #[test]
    fn test_initials_single_word() {
        let character = Character::new("paul", vec![]);
        assert_eq!(character.initials(), "P");
    }

    #[test]
    fn test_fallback_catalogue() {
        let catalogue = Catalogue::fallback();
        assert_eq!(catalogue.len(), 1);
        let jin = catalogue.get(FALLBACK_CHARACTER_ID).unwrap();
        assert_eq!(jin.name, "Jin");
        assert_eq!(jin.combos.len(), 1);
        assert_eq!(jin.combos[0].steps.len(), 4);
        assert_eq!(jin.combos[0].moves.len(), 4);
    }

    #[test]
    fn test_or_fallback() {
        let recovered = Catalogue::or_fallback(Err(IngestError::Missing));
        assert_eq!(recovered, Catalogue::fallback());

        let loaded = Catalogue::from_value(&testing::sample_dataset()).unwrap();
        assert_eq!(Catalogue::or_fallback(Ok(loaded.clone())), loaded);
    }

    #[test]
    fn test_from_source_text_variants() {
        let plain = r#"{"jin": [{"text": "1 > 2"}]}"#;
        assert!(Catalogue::from_source_text(plain).unwrap().contains("jin"));

        let script = "window.TEKKEN_COMBOS_DATA = {\"jin\": [{\"text\": \"1 > 2\"}]};\n";
        assert!(Catalogue::from_source_text(script).unwrap().contains("jin"));

        assert!(matches!(Catalogue::from_source_text("  "), Err(IngestError::Missing)));
        assert!(matches!(Catalogue::from_source_text("{oops"), Err(IngestError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalogue::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(IngestError::Io(_))));
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let catalogue = Catalogue::new(vec![
            Character::new("kazuya", vec![]),
            Character {
                style: "other".into(),
                ..Character::new("kazuya", vec![])
            },
        ]);
        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.get("kazuya").unwrap().style, CHARACTER_STYLE);
    }
}
