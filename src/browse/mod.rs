//! Browse module - selection, navigation and sharing
//!
//! Everything here is UI-agnostic: a presentation adapter raises
//! [`Intent`]s against a [`BrowseSession`] and renders the returned
//! [`Snapshot`].
//!
//! # Architecture
//!
//! - `models`: Selection axes, [`SelectionState`] and intents
//! - `query`: Pure filtering and the move-string table
//! - `deck`: Bounded paging and swipe tracking
//! - `locator`: Shareable deep links
//! - `prefs`: Persisted last character and view mode
//! - `session`: The single owner of the selection

pub mod deck;
pub mod error;
pub mod locator;
pub mod models;
pub mod prefs;
pub mod query;
pub mod session;

pub use error::{BrowseError, PrefsError, ShareError};
pub use locator::Locator;
pub use models::{FilterTag, Intent, Key, MoveListMode, MoveTier, SelectionState, ViewMode};
pub use prefs::{MemoryPreferenceStore, PreferenceStore, Preferences, TomlPreferenceStore};
pub use query::{MoveRow, move_table_rows, visible_combos};
pub use session::{BrowseSession, ShareOutcome, ShareTarget, Snapshot, restore};
