//! Raw route records as they arrive from the scraped catalogue
//!
//! The source JSON is loosely typed: fields may be missing, `null`, strings or
//! numbers. These types keep every field optional and convert from
//! `serde_json::Value` without ever failing.

use serde_json::Value;

/// Source tag marking an icon-backed move
pub const IMAGE_MOVE_TAG: &str = "img";

/// One raw route entry for a character
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRoute {
    /// Human-written notation, e.g. `"u/f+4 ▶ f+3~3"`
    pub text: Option<String>,

    /// Free text that may embed a hit count, e.g. `"7 hits"`
    pub hits: Option<String>,

    /// Free text or number that may embed a damage value
    pub damage: Option<String>,

    /// Structured inputs, possibly empty
    pub moves: Vec<RawMove>,
}

/// One structured input of a raw route
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMove {
    /// Source type tag (`"img"` or `"text"`)
    pub kind: Option<String>,

    /// Label or icon alt text
    pub name: Option<String>,

    /// Icon file reference
    pub img: Option<String>,
}

impl RawRoute {
    /// Route with only notation text
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Builder-style setter for the hit field
    #[must_use]
    pub fn hits(mut self, hits: impl Into<String>) -> Self {
        self.hits = Some(hits.into());
        self
    }

    /// Builder-style setter for the damage field
    #[must_use]
    pub fn damage(mut self, damage: impl Into<String>) -> Self {
        self.damage = Some(damage.into());
        self
    }

    /// Builder-style setter for structured moves
    #[must_use]
    pub fn moves(mut self, moves: Vec<RawMove>) -> Self {
        self.moves = moves;
        self
    }
}

impl RawMove {
    #[must_use]
    pub fn image(name: impl Into<String>, img: impl Into<String>) -> Self {
        Self {
            kind: Some(IMAGE_MOVE_TAG.to_string()),
            name: Some(name.into()),
            img: Some(img.into()),
        }
    }

    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            kind: Some("text".to_string()),
            name: Some(name.into()),
            img: None,
        }
    }
}

/// String form of a scalar JSON value
///
/// `null`, `false` and zero are treated as absent.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(scalar_string)
}

impl From<&Value> for RawMove {
    fn from(value: &Value) -> Self {
        Self {
            kind: field(value, "type"),
            name: field(value, "name"),
            img: value.get("img").and_then(Value::as_str).map(str::to_string),
        }
    }
}

impl From<&Value> for RawRoute {
    /// Non-object values become an empty route
    fn from(value: &Value) -> Self {
        let moves = value
            .get("moves")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(RawMove::from).collect())
            .unwrap_or_default();

        Self {
            text: field(value, "text"),
            hits: field(value, "hits"),
            damage: field(value, "damage"),
            moves,
        }
    }
}
