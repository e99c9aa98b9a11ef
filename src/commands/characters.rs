//! Characters command - list the roster

use crate::{browse::BrowseSession, output, output::OutputWriter};

/// Execute the characters command
pub fn execute(session: &BrowseSession, out: &dyn OutputWriter) {
    let active = session.selection().character_id.as_str();
    out.info(&format!("{} characters:", session.catalogue().len()));
    for character in session.catalogue().iter() {
        out.write(&output::character_line(character, character.id == active));
    }
}
