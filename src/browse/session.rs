//! Browse session management
//!
//! `BrowseSession` is the single owner of the catalogue and the selection.
//! Presentation adapters raise [`Intent`]s; the session applies each one
//! atomically and hands back a [`Snapshot`] of every derived view.
//!
//! # Workflow
//!
//! ```text
//! Session Created
//!     ↓
//! restore(locator, preferences, catalogue) → SelectionState
//!     ↓
//! clamp active index against the visible list
//!     ↓
//! ┌─→ dispatch(intent)
//! │       ├─ copy selection, apply intent
//! │       ├─ re-clamp index if the visible list may have changed
//! │       ├─ commit selection, persist character / view if changed
//! │       └─ return Snapshot
//! └───────┘
//! ```

use super::error::{BrowseError, ShareError};
use crate::browse::deck::{self, DragTracker, PageTurn};
use crate::browse::locator::Locator;
use crate::browse::models::{Intent, SelectionState, ViewMode};
use crate::browse::prefs::{LAST_CHARACTER_KEY, PreferenceStore, Preferences, VIEW_MODE_KEY};
use crate::browse::query::{self, MoveRow};
use crate::catalogue::{Catalogue, Character};
use crate::combo::Combo;

/// Browse session error type
pub type Result<T> = std::result::Result<T, BrowseError>;

/// Shown when the selected character cannot be resolved
pub const UNAVAILABLE_MESSAGE: &str = "Unable to load combo data.";

/// Shown when filter and search leave nothing visible
pub const EMPTY_MESSAGE: &str = "No combos match this filter.";

/// Build the initial selection from startup inputs
///
/// Each field takes the locator value if usable, then the persisted
/// preference, then the default. The returned index is not clamped; the
/// session clamps it once the visible list is known.
#[must_use]
pub fn restore(locator: &Locator, preferences: &Preferences, catalogue: &Catalogue) -> SelectionState {
    let character_id = locator
        .character_id
        .as_deref()
        .filter(|id| catalogue.contains(id))
        .or_else(|| {
            preferences
                .last_character
                .as_deref()
                .filter(|id| catalogue.contains(id))
        })
        .or_else(|| catalogue.first_id())
        .unwrap_or_default();

    let mut selection = SelectionState::new(character_id);
    selection.view_mode = locator
        .view
        .or(preferences.view_mode)
        .unwrap_or_default();
    selection.active_index = locator.index().unwrap_or(0);
    selection
}

/// Something that can deliver a share link (system share sheet, clipboard)
pub trait ShareTarget {
    /// Deliver `url` titled `title`
    ///
    /// # Errors
    ///
    /// Returns `ShareError` if the link could not be delivered.
    fn share(&mut self, title: &str, url: &str) -> std::result::Result<(), ShareError>;
}

/// Result of a share request; failures are treated as cancellations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared { url: String },
    Cancelled { url: String },
}

impl ShareOutcome {
    /// The link either way, for a copy-link fallback
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Shared { url } | Self::Cancelled { url } => url,
        }
    }
}

/// Every derived view after an intent
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    /// Active character, `None` when it cannot be resolved
    pub character: Option<&'a Character>,

    /// Combos passing filter and search
    pub visible: Vec<&'a Combo>,

    /// Selection the views were derived from
    pub selection: &'a SelectionState,

    /// Move-string table for the full character list
    pub move_rows: Vec<MoveRow<'a>>,
}

impl<'a> Snapshot<'a> {
    /// Clamped active index
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.selection.active_index
    }

    #[must_use]
    pub fn active_combo(&self) -> Option<&'a Combo> {
        self.visible.get(self.selection.active_index).copied()
    }

    /// Deck position such as `3 / 12`, or `0 / 0` when nothing is visible
    #[must_use]
    pub fn position_label(&self) -> String {
        if self.visible.is_empty() {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.selection.active_index + 1, self.visible.len())
        }
    }

    /// Message for an empty or unavailable view
    #[must_use]
    pub fn status_message(&self) -> Option<&'static str> {
        if self.character.is_none() {
            Some(UNAVAILABLE_MESSAGE)
        } else if self.visible.is_empty() {
            Some(EMPTY_MESSAGE)
        } else {
            None
        }
    }
}

/// Browse session - owns the catalogue and the selection
pub struct BrowseSession {
    catalogue: Catalogue,
    selection: SelectionState,
    drag: DragTracker,
    prefs: Box<dyn PreferenceStore>,
}

impl BrowseSession {
    /// Create a session, restoring from `locator` and the preference store
    #[must_use]
    pub fn new(catalogue: Catalogue, prefs: Box<dyn PreferenceStore>, locator: &Locator) -> Self {
        let preferences = Preferences::read(prefs.as_ref());
        let mut selection = restore(locator, &preferences, &catalogue);
        selection.active_index = deck::clamp_index(
            selection.active_index,
            Self::visible_count(&catalogue, &selection),
        );

        Self {
            catalogue,
            selection,
            drag: DragTracker::new(),
            prefs,
        }
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub const fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Active character, if the id resolves
    #[must_use]
    pub fn character(&self) -> Option<&Character> {
        self.catalogue.get(&self.selection.character_id)
    }

    /// Combos visible under the current filter and search
    #[must_use]
    pub fn visible(&self) -> Vec<&Combo> {
        self.character()
            .map(|c| query::visible_combos(&c.combos, &self.selection))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn active_combo(&self) -> Option<&Combo> {
        self.visible().get(self.selection.active_index).copied()
    }

    /// Current deep link
    #[must_use]
    pub fn locator(&self) -> Locator {
        Locator::new(
            self.selection.character_id.clone(),
            self.selection.active_index,
            self.selection.view_mode,
        )
    }

    /// All derived views for the current selection
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        let character = self.character();
        let (visible, move_rows) = character.map_or_else(
            || (Vec::new(), Vec::new()),
            |c| {
                (
                    query::visible_combos(&c.combos, &self.selection),
                    query::move_table_rows(&c.combos, self.selection.move_tier),
                )
            },
        );

        Snapshot {
            character,
            visible,
            selection: &self.selection,
            move_rows,
        }
    }

    /// Apply one intent and return the resulting views
    pub fn dispatch(&mut self, intent: Intent) -> Snapshot<'_> {
        self.apply(intent);
        self.snapshot()
    }

    /// Select a character, failing on an unknown id
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::UnknownCharacter` if `id` is not in the catalogue.
    pub fn select_character(&mut self, id: &str) -> Result<()> {
        if !self.catalogue.contains(id) {
            return Err(BrowseError::UnknownCharacter(id.to_string()));
        }
        self.apply(Intent::SelectCharacter(id.to_string()));
        Ok(())
    }

    /// Swap in a freshly loaded catalogue
    ///
    /// The character falls back to the first key if it no longer exists.
    pub fn replace_catalogue(&mut self, catalogue: Catalogue) {
        self.catalogue = catalogue;
        let mut next = self.selection.clone();
        if !self.catalogue.contains(&next.character_id) {
            next.character_id = self.catalogue.first_id().unwrap_or_default().to_string();
            next.active_index = 0;
        }
        self.commit(next, true);
    }

    /// Offer the current deep link to `target`
    ///
    /// Failures are swallowed and reported as a cancellation.
    pub fn share(&self, target: &mut dyn ShareTarget, base_url: &str) -> ShareOutcome {
        let url = self.locator().to_url(base_url);
        let title = match (self.character(), self.active_combo()) {
            (Some(character), Some(combo)) => format!("{}: {}", character.name, combo.title),
            (Some(character), None) => character.name.clone(),
            _ => "Combos".to_string(),
        };

        match target.share(&title, &url) {
            Ok(()) => ShareOutcome::Shared { url },
            Err(e) => {
                tracing::debug!(error = %e, "share cancelled");
                ShareOutcome::Cancelled { url }
            }
        }
    }

    fn apply(&mut self, intent: Intent) {
        tracing::debug!(?intent, "browse intent");
        let mut next = self.selection.clone();
        let total = self.visible().len();
        let mut list_changed = false;

        match intent {
            Intent::SelectCharacter(id) => {
                if self.catalogue.contains(&id) {
                    next.character_id = id;
                    next.active_index = 0;
                    self.drag = DragTracker::new();
                    list_changed = true;
                } else {
                    tracing::debug!(character = %id, "ignoring unknown character");
                }
            }
            Intent::SetFilter(filter) => {
                next.filter = filter;
                list_changed = true;
            }
            Intent::SetSearch(text) => {
                next.search_text = text;
                list_changed = true;
            }
            Intent::SetView(view) => {
                if view != ViewMode::Deck {
                    self.drag = DragTracker::new();
                }
                next.view_mode = view;
            }
            Intent::GoTo(index) => next.active_index = deck::go_to(next.active_index, index, total),
            Intent::Next => next.active_index = deck::next(next.active_index, total),
            Intent::Prev => next.active_index = deck::prev(next.active_index, total),
            Intent::Key(key) => {
                if let Some(turn) = deck::key_turn(key, next.view_mode) {
                    next.active_index = turn.apply(next.active_index, total);
                }
            }
            Intent::PointerDown { pointer, x } => {
                if next.view_mode == ViewMode::Deck {
                    self.drag.pointer_down(pointer, x);
                }
            }
            Intent::PointerMove { pointer, x } => self.drag.pointer_move(pointer, x),
            Intent::PointerUp { pointer, x } => {
                if let Some(turn) = self.drag.pointer_up(pointer, x) {
                    next.active_index = PageTurn::apply(turn, next.active_index, total);
                }
            }
            Intent::PointerCancel { pointer } => self.drag.pointer_cancel(pointer),
            Intent::SetMoveTier(tier) => next.move_tier = tier,
            Intent::SetMoveListMode(mode) => next.move_list_mode = mode,
        }

        self.commit(next, list_changed);
    }

    /// Re-clamp, replace the selection, and persist what changed
    fn commit(&mut self, mut next: SelectionState, list_changed: bool) {
        if list_changed {
            next.active_index =
                deck::clamp_index(next.active_index, Self::visible_count(&self.catalogue, &next));
        }

        let character_changed = next.character_id != self.selection.character_id;
        let view_changed = next.view_mode != self.selection.view_mode;
        self.selection = next;

        if character_changed {
            let id = self.selection.character_id.clone();
            self.persist(LAST_CHARACTER_KEY, &id);
        }
        if view_changed {
            self.persist(VIEW_MODE_KEY, self.selection.view_mode.as_str());
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.prefs.set(key, value) {
            tracing::warn!(key, error = %e, "failed to persist preference");
        }
    }

    fn visible_count(catalogue: &Catalogue, selection: &SelectionState) -> usize {
        catalogue
            .get(&selection.character_id)
            .map_or(0, |c| query::visible_combos(&c.combos, selection).len())
    }
}
