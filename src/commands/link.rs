//! Link command - shareable deep links

use super::{Result, combo_index, select_character};
use crate::{
    browse::{BrowseSession, Intent, ShareError, ShareOutcome, ShareTarget, ViewMode},
    config::ComboDeckConfig,
    output::OutputWriter,
};

/// Shares links by copying them to the system clipboard
pub struct ClipboardShare;

impl ShareTarget for ClipboardShare {
    fn share(&mut self, _title: &str, url: &str) -> std::result::Result<(), ShareError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ShareError(format!("Clipboard unavailable: {e}")))?;
        clipboard
            .set_text(url)
            .map_err(|e| ShareError(format!("Clipboard error: {e}")))
    }
}

/// Execute the link command
///
/// # Errors
///
/// Returns an error if the character does not exist or `number` is 0.
pub fn execute(
    session: &mut BrowseSession,
    character: Option<&str>,
    number: Option<usize>,
    view: Option<ViewMode>,
    target: Option<&mut dyn ShareTarget>,
    config: &ComboDeckConfig,
    out: &dyn OutputWriter,
) -> Result<()> {
    select_character(session, character)?;
    if let Some(view) = view {
        session.dispatch(Intent::SetView(view));
    }
    if let Some(number) = number {
        session.dispatch(Intent::GoTo(combo_index(number)?));
    }

    let url = match target {
        Some(target) => match session.share(target, &config.share_base_url) {
            ShareOutcome::Shared { url } => {
                out.success("Link copied to clipboard");
                url
            }
            ShareOutcome::Cancelled { url } => {
                out.warning("Could not copy link, printing it instead");
                url
            }
        },
        None => session.locator().to_url(&config.share_base_url),
    };
    out.write(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::session;
    use crate::output::{BufferedWriter, MessageLevel};

    struct Refusing;

    impl ShareTarget for Refusing {
        fn share(&mut self, _title: &str, _url: &str) -> std::result::Result<(), ShareError> {
            Err(ShareError("no clipboard".into()))
        }
    }

    #[test]
    fn test_prints_link() {
        let mut session = session();
        let out = BufferedWriter::new();
        execute(
            &mut session,
            Some("devil_jin"),
            Some(2),
            Some(ViewMode::Deck),
            None,
            &ComboDeckConfig::default(),
            &out,
        )
        .unwrap();

        assert_eq!(
            out.at_level(MessageLevel::Normal),
            vec!["https://combodeck.local/?character=devil_jin&combo=2&view=deck".to_string()]
        );
    }

    #[test]
    fn test_failed_copy_still_prints() {
        let mut session = session();
        let out = BufferedWriter::new();
        let mut target = Refusing;
        execute(
            &mut session,
            None,
            Some(99),
            None,
            Some(&mut target),
            &ComboDeckConfig::default(),
            &out,
        )
        .unwrap();

        assert_eq!(out.at_level(MessageLevel::Warning).len(), 1);
        assert_eq!(
            out.at_level(MessageLevel::Normal),
            vec!["https://combodeck.local/?character=paul&combo=4&view=grid".to_string()]
        );
    }
}
