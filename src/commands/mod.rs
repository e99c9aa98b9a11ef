//! Command implementations
//!
//! Each command is a module with an execute function that drives a
//! [`BrowseSession`] with intents and renders the resulting snapshot through
//! an [`OutputWriter`].

pub mod characters;
pub mod combos;
pub mod link;
pub mod moves;
pub mod portraits;

pub use characters::execute as characters;
pub use combos::execute as combos;
pub use combos::execute_deck as deck;
pub use combos::execute_open as open;
pub use link::execute as link;
pub use moves::execute as moves;
pub use portraits::execute as portraits;

use crate::{
    browse::{BrowseSession, Intent},
    cli::SelectionArgs,
    ComboDeckError,
};

type Result<T> = std::result::Result<T, ComboDeckError>;

/// Select an explicitly requested character, failing on unknown ids
fn select_character(session: &mut BrowseSession, character: Option<&str>) -> Result<()> {
    if let Some(id) = character {
        session.select_character(id)?;
    }
    Ok(())
}

/// Apply the shared selection flags in intent order
fn apply_selection(session: &mut BrowseSession, selection: &SelectionArgs) -> Result<()> {
    select_character(session, selection.character.as_deref())?;
    if let Some(filter) = selection.filter {
        session.dispatch(Intent::SetFilter(filter));
    }
    if let Some(search) = &selection.search {
        session.dispatch(Intent::SetSearch(search.clone()));
    }
    Ok(())
}

/// 1-based combo number → visible index
fn combo_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| ComboDeckError::InvalidInput("Combo numbers start at 1".into()))
}
