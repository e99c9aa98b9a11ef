//! Normalized combo data model
//!
//! These are the typed records produced by the route normalizer and consumed
//! by the browse layer. They are pure data with a handful of accessors;
//! parsing and inference live in [`crate::normalize`].
//!
//! # Types
//!
//! - [`Combo`]: one displayable combo with inferred metadata
//! - [`Move`]: one atomic step of a combo, optionally icon-backed
//! - [`ComboType`] / [`CarryTier`]: closed tag sets, never "unknown"

pub mod icons;

pub use icons::{IconBases, IconPaths, IconRef, RouteToken};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator used when rendering a combo's steps as one notation string
pub const NOTATION_SEPARATOR: &str = " ► ";

/// Combo classification inferred from route text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComboType {
    /// Bread-and-butter route
    Bnb,
    /// Route that spends or ends in Heat
    Heat,
    /// Route that carries to or uses the wall
    Wall,
}

impl ComboType {
    /// All combo types in display order
    pub const ALL: [Self; 3] = [Self::Bnb, Self::Heat, Self::Wall];

    /// Lowercase tag as used in filters and badges
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bnb => "bnb",
            Self::Heat => "heat",
            Self::Wall => "wall",
        }
    }

    /// Prefix used for generated combo titles
    #[must_use]
    pub const fn title_label(self) -> &'static str {
        match self {
            Self::Bnb => "BnB Route",
            Self::Heat => "Heat Route",
            Self::Wall => "Wall Carry",
        }
    }
}

impl fmt::Display for ComboType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComboType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bnb" => Ok(Self::Bnb),
            "heat" => Ok(Self::Heat),
            "wall" => Ok(Self::Wall),
            other => Err(format!("unknown combo type '{other}'")),
        }
    }
}

/// Coarse carry classification derived from hit count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarryTier {
    Low,
    Mid,
    High,
}

impl CarryTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Mid => "Mid",
            Self::High => "High",
        }
    }
}

impl fmt::Display for CarryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What backs a move token
///
/// The icon reference only exists on the image-backed variant, so a text move
/// can never carry one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Rendered from an input icon
    Image(IconRef),
    /// Rendered as plain notation text
    Text,
}

/// One atomic step of a combo
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Display label (icon alt text for image moves)
    pub name: String,

    /// Backing kind
    pub kind: MoveKind,
}

impl Move {
    /// Create a text-only move
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MoveKind::Text,
        }
    }

    /// Create an image-backed move
    #[must_use]
    pub fn image(name: impl Into<String>, icon: IconRef) -> Self {
        Self {
            name: name.into(),
            kind: MoveKind::Image(icon),
        }
    }

    /// Icon reference, present only for image-backed moves
    #[must_use]
    pub const fn icon(&self) -> Option<&IconRef> {
        match &self.kind {
            MoveKind::Image(icon) => Some(icon),
            MoveKind::Text => None,
        }
    }

    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self.kind, MoveKind::Image(_))
    }

    /// Build the presentation token for this move
    ///
    /// Image moves expose their ordered fallback paths plus the degraded
    /// label; text moves are a plain token.
    #[must_use]
    pub fn token(&self, bases: &IconBases) -> RouteToken {
        match &self.kind {
            MoveKind::Image(icon) => RouteToken::Icon {
                paths: icon.paths(bases),
                label: self.degraded_label().to_string(),
            },
            MoveKind::Text => RouteToken::Text(self.name.clone()),
        }
    }

    /// Label shown once both icon paths have failed to load
    #[must_use]
    pub fn degraded_label(&self) -> &str {
        if self.name.is_empty() {
            "input"
        } else {
            &self.name
        }
    }
}

/// A normalized, typed combo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combo {
    /// Generated title, e.g. "Heat Route 3"
    pub title: String,

    /// Inferred classification
    #[serde(rename = "type")]
    pub combo_type: ComboType,

    /// Name of the first move
    pub starter: String,

    /// Damage, 0 when the source could not be parsed
    pub damage: u32,

    /// Carry tier derived from hit count
    pub carry: CarryTier,

    /// Free-text notes
    pub notes: String,

    /// Raw notation tokens, never empty
    pub steps: Vec<String>,

    /// Structured moves
    pub moves: Vec<Move>,
}

impl Combo {
    /// Steps joined into a single notation line
    #[must_use]
    pub fn notation(&self) -> String {
        self.steps.join(NOTATION_SEPARATOR)
    }

    /// Lowercased haystack used by free-text search
    #[must_use]
    pub fn search_text(&self) -> String {
        let mut parts: Vec<&str> = vec![
            &self.title,
            &self.starter,
            &self.notes,
            self.combo_type.as_str(),
        ];
        parts.extend(self.steps.iter().map(String::as_str));
        parts.extend(self.moves.iter().map(|m| m.name.as_str()));
        parts.join(" ").to_lowercase()
    }

    /// Presentation tokens for the route strip
    #[must_use]
    pub fn route_tokens(&self, bases: &IconBases) -> Vec<RouteToken> {
        if self.moves.is_empty() {
            return vec![RouteToken::Text("No route data".to_string())];
        }
        self.moves.iter().map(|m| m.token(bases)).collect()
    }
}
