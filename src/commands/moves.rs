//! Moves command - the move-string table

use super::{Result, select_character};
use crate::{
    browse::{BrowseSession, Intent, MoveListMode, MoveTier},
    config::ComboDeckConfig,
    output::{self, OutputWriter},
};

/// Execute the moves command
///
/// # Errors
///
/// Returns an error if an explicitly requested character does not exist.
pub fn execute(
    session: &mut BrowseSession,
    character: Option<&str>,
    tier: Option<MoveTier>,
    mode: Option<MoveListMode>,
    config: &ComboDeckConfig,
    out: &dyn OutputWriter,
) -> Result<()> {
    select_character(session, character)?;
    if let Some(tier) = tier {
        session.dispatch(Intent::SetMoveTier(tier));
    }
    if let Some(mode) = mode {
        session.dispatch(Intent::SetMoveListMode(mode));
    }

    let snapshot = session.snapshot();
    let Some(character) = snapshot.character else {
        out.warning(crate::browse::session::UNAVAILABLE_MESSAGE);
        return Ok(());
    };

    out.info(&format!(
        "{} move strings ({})",
        character.name,
        snapshot.selection.move_tier.label()
    ));
    let bases = config.assets.icon_bases();
    for row in &snapshot.move_rows {
        out.write(&output::move_row(row, &bases, snapshot.selection.move_list_mode));
    }
    Ok(())
}
