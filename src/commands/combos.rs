//! Combos, deck and open commands - render the visible combos

use super::{Result, apply_selection, combo_index};
use crate::{
    browse::{BrowseSession, Intent, Snapshot, ViewMode},
    cli::SelectionArgs,
    config::ComboDeckConfig,
    output::{self, OutputWriter},
};

/// Execute the combos command (grid listing)
///
/// # Errors
///
/// Returns an error if an explicitly requested character does not exist.
pub fn execute(
    session: &mut BrowseSession,
    selection: &SelectionArgs,
    config: &ComboDeckConfig,
    out: &dyn OutputWriter,
) -> Result<()> {
    apply_selection(session, selection)?;
    render_grid(&session.snapshot(), config, out);
    Ok(())
}

/// Execute the deck command
///
/// Switches the session to deck view, so the choice is remembered.
///
/// # Errors
///
/// Returns an error if the character does not exist or `number` is 0.
pub fn execute_deck(
    session: &mut BrowseSession,
    selection: &SelectionArgs,
    number: Option<usize>,
    next: bool,
    prev: bool,
    config: &ComboDeckConfig,
    out: &dyn OutputWriter,
) -> Result<()> {
    apply_selection(session, selection)?;
    session.dispatch(Intent::SetView(ViewMode::Deck));
    if let Some(number) = number {
        session.dispatch(Intent::GoTo(combo_index(number)?));
    }
    if next {
        session.dispatch(Intent::Next);
    } else if prev {
        session.dispatch(Intent::Prev);
    }

    render_deck(&session.snapshot(), config, out);
    Ok(())
}

/// Execute the open command
///
/// The session was already restored from the link; this only reports what
/// could not be honored and renders the restored view.
pub fn execute_open(
    session: &BrowseSession,
    requested_character: Option<&str>,
    config: &ComboDeckConfig,
    out: &dyn OutputWriter,
) {
    let snapshot = session.snapshot();
    if let Some(requested) = requested_character
        && requested != snapshot.selection.character_id
    {
        out.warning(&format!(
            "Unknown character '{requested}' in link, showing '{}'",
            snapshot.selection.character_id
        ));
    }

    match snapshot.selection.view_mode {
        ViewMode::Deck => render_deck(&snapshot, config, out),
        ViewMode::Grid => render_grid(&snapshot, config, out),
    }
}

fn render_header(snapshot: &Snapshot<'_>, config: &ComboDeckConfig, out: &dyn OutputWriter) -> bool {
    let Some(character) = snapshot.character else {
        out.warning(crate::browse::session::UNAVAILABLE_MESSAGE);
        return false;
    };
    out.info(&output::character_header(character, &config.assets.portrait_base));
    true
}

fn render_grid(snapshot: &Snapshot<'_>, config: &ComboDeckConfig, out: &dyn OutputWriter) {
    if !render_header(snapshot, config, out) {
        return;
    }
    if let Some(message) = snapshot.status_message() {
        out.warning(message);
        return;
    }

    let bases = config.assets.icon_bases();
    for (i, combo) in snapshot.visible.iter().enumerate() {
        let marker = if i == snapshot.active_index() { "▸" } else { " " };
        out.write(&format!(
            "{marker}{:>3}. {}",
            i + 1,
            output::combo_card(combo, &bases, snapshot.selection.move_list_mode)
        ));
    }
}

fn render_deck(snapshot: &Snapshot<'_>, config: &ComboDeckConfig, out: &dyn OutputWriter) {
    if !render_header(snapshot, config, out) {
        return;
    }
    out.write(&output::deck_view(
        snapshot,
        &config.assets.icon_bases(),
        snapshot.selection.move_list_mode,
    ));
}
