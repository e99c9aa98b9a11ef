//! Data models for browse state
//!
//! These are pure data structures with minimal logic. The session controller
//! owns the single [`SelectionState`]; everything else reads it.

use crate::combo::ComboType;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Selection Axes
// ============================================================================

/// Combo type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterTag {
    /// Show every combo type
    #[default]
    All,
    /// Show only one combo type
    Only(ComboType),
}

/// How the visible combos are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Multi-card grid
    #[default]
    Grid,
    /// One combo at a time with paging
    Deck,
}

/// Move-string table tier, bucketed by combo step count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveTier {
    #[default]
    All,
    /// Exploded view: individual deduplicated moves
    Single,
    Simple,
    MedSimple,
    Medium,
    Advanced,
    Expert,
}

/// How move-table rows render their moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveListMode {
    #[default]
    Icons,
    Text,
}

/// Current state of a browse session
///
/// Created with defaults, optionally overridden at startup from persisted or
/// locator values, then mutated only by intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    /// Active character id
    pub character_id: String,

    /// Free-text search, matched case-insensitively
    pub search_text: String,

    /// Combo type filter
    pub filter: FilterTag,

    /// Grid or deck presentation
    pub view_mode: ViewMode,

    /// 0-based index into the visible combos
    pub active_index: usize,

    /// Move-string table tier
    pub move_tier: MoveTier,

    /// Move-string table rendering
    pub move_list_mode: MoveListMode,
}

// ============================================================================
// Intents
// ============================================================================

/// Keys the deck view reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Discrete user intent raised by a presentation adapter
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SelectCharacter(String),
    SetFilter(FilterTag),
    SetSearch(String),
    SetView(ViewMode),
    /// Jump to a 0-based visible index
    GoTo(usize),
    Next,
    Prev,
    Key(Key),
    PointerDown { pointer: u32, x: f64 },
    PointerMove { pointer: u32, x: f64 },
    PointerUp { pointer: u32, x: f64 },
    PointerCancel { pointer: u32 },
    SetMoveTier(MoveTier),
    SetMoveListMode(MoveListMode),
}

// ============================================================================
// Implementations
// ============================================================================

impl SelectionState {
    /// Default state pointing at `character_id`
    #[must_use]
    pub fn new(character_id: impl Into<String>) -> Self {
        Self {
            character_id: character_id.into(),
            search_text: String::new(),
            filter: FilterTag::All,
            view_mode: ViewMode::Grid,
            active_index: 0,
            move_tier: MoveTier::All,
            move_list_mode: MoveListMode::Icons,
        }
    }

    /// Trimmed, lowercased search needle; empty means "match everything"
    #[must_use]
    pub fn search_needle(&self) -> String {
        self.search_text.trim().to_lowercase()
    }
}

impl FilterTag {
    /// All filter choices in display order
    pub const CHOICES: [Self; 4] = [
        Self::All,
        Self::Only(ComboType::Bnb),
        Self::Only(ComboType::Heat),
        Self::Only(ComboType::Wall),
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(combo_type) => combo_type.as_str(),
        }
    }

    /// Whether a combo of `combo_type` passes this filter
    #[must_use]
    pub fn accepts(self, combo_type: ComboType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == combo_type,
        }
    }
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Deck => "deck",
        }
    }
}

impl MoveTier {
    /// All tiers in display order
    pub const CHOICES: [Self; 7] = [
        Self::All,
        Self::Single,
        Self::Simple,
        Self::MedSimple,
        Self::Medium,
        Self::Advanced,
        Self::Expert,
    ];

    /// Stable key used in configuration and the CLI
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Single => "single",
            Self::Simple => "simple",
            Self::MedSimple => "med-simple",
            Self::Medium => "medium",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }

    /// Human label for table headers
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Single => "Single",
            Self::Simple => "Simple",
            Self::MedSimple => "Med-Simple",
            Self::Medium => "Medium",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl MoveListMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Icons => "icons",
            Self::Text => "text",
        }
    }
}

macro_rules! display_via_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_via_as_str!(FilterTag, ViewMode, MoveTier, MoveListMode);

impl FromStr for FilterTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == "all" {
            return Ok(Self::All);
        }
        normalized
            .parse::<ComboType>()
            .map(Self::Only)
            .map_err(|_| format!("unknown filter '{normalized}' (expected all, bnb, heat or wall)"))
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "deck" => Ok(Self::Deck),
            other => Err(format!("unknown view '{other}' (expected grid or deck)")),
        }
    }
}

impl FromStr for MoveTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::CHOICES
            .into_iter()
            .find(|tier| tier.as_str() == normalized)
            .ok_or_else(|| format!("unknown move tier '{normalized}'"))
    }
}

impl FromStr for MoveListMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "icons" => Ok(Self::Icons),
            "text" => Ok(Self::Text),
            other => Err(format!("unknown move list mode '{other}' (expected icons or text)")),
        }
    }
}
