//! Output formatting for CLI display
//!
//! Terminal rendering of characters, combo cards, the deck view and the
//! move-string table. Icons cannot be drawn in a terminal, so an icon token
//! shows which asset resolved and falls back to its degraded label when
//! neither the raster nor the vector file exists.

mod writer;

pub use writer::{BufferedWriter, MessageLevel, OutputWriter, StdoutWriter};

use crate::browse::{MoveListMode, MoveRow, Snapshot};
use crate::catalogue::Character;
use crate::combo::{CarryTier, Combo, ComboType, IconBases, IconPaths, RouteToken};
use colored::{ColoredString, Colorize};
use std::path::Path;

/// First candidate path that exists on disk
#[must_use]
pub fn resolve_icon(paths: &IconPaths) -> Option<&str> {
    paths
        .candidates()
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
}

fn type_badge(combo_type: ComboType) -> ColoredString {
    let label = format!("[{}]", combo_type.as_str().to_uppercase());
    match combo_type {
        ComboType::Bnb => label.blue(),
        ComboType::Heat => label.red(),
        ComboType::Wall => label.yellow(),
    }
}

fn carry_label(carry: CarryTier) -> ColoredString {
    match carry {
        CarryTier::Low => carry.as_str().dimmed(),
        CarryTier::Mid => carry.as_str().normal(),
        CarryTier::High => carry.as_str().green(),
    }
}

/// One character in the roster listing
#[must_use]
pub fn character_line(character: &Character, active: bool) -> String {
    let marker = if active { "▸".green() } else { " ".normal() };
    format!(
        "{marker} {:<3} {} {}",
        character.initials().bold(),
        character.name,
        format!("({} combos)", character.combos.len()).dimmed()
    )
}

/// Render a route strip
///
/// In icon mode image moves show `[label]` when an asset resolves and the bare
/// label otherwise. In text mode every move prints as text.
#[must_use]
pub fn route_line(tokens: &[RouteToken], mode: MoveListMode) -> String {
    tokens
        .iter()
        .map(|token| match (mode, token) {
            (MoveListMode::Icons, RouteToken::Icon { paths, label }) => {
                if resolve_icon(paths).is_some() {
                    format!("[{label}]").cyan().to_string()
                } else {
                    label.clone()
                }
            }
            _ => token.text_label().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combo card as shown in the grid listing
#[must_use]
pub fn combo_card(combo: &Combo, bases: &IconBases, mode: MoveListMode) -> String {
    let mut lines = vec![
        format!(
            "{} {}  {} dmg  carry {}",
            type_badge(combo.combo_type),
            combo.title.bold(),
            combo.damage,
            carry_label(combo.carry)
        ),
        format!("  {} {}", "Starter:".dimmed(), combo.starter),
        format!("  {}", combo.notation()),
    ];

    if combo.moves.iter().any(|m| m.is_image()) || combo.moves.is_empty() {
        lines.push(format!("  {}", route_line(&combo.route_tokens(bases), mode)));
    }
    lines.push(format!("  {}", combo.notes.italic()));
    lines.join("\n")
}

/// Character header shown above listings
#[must_use]
pub fn character_header(character: &Character, portrait_base: &str) -> String {
    let portrait = character.portrait_path(portrait_base);
    let badge = if Path::new(&portrait).exists() {
        portrait
    } else {
        character.initials()
    };
    format!(
        "{} {}\n{} · {}",
        character.name.bold(),
        format!("({badge})").dimmed(),
        character.style,
        character.difficulty
    )
}

/// One-combo deck view with its position label
#[must_use]
pub fn deck_view(snapshot: &Snapshot<'_>, bases: &IconBases, mode: MoveListMode) -> String {
    let position = snapshot.position_label();
    match (snapshot.status_message(), snapshot.active_combo()) {
        (None, Some(combo)) => format!("{}\n{}", position.bold(), combo_card(combo, bases, mode)),
        (Some(message), _) => format!("{}\n{}", position.bold(), message.yellow()),
        (None, None) => position,
    }
}

/// One row of the move-string table
#[must_use]
pub fn move_row(row: &MoveRow<'_>, bases: &IconBases, mode: MoveListMode) -> String {
    match row {
        MoveRow::Combo { tier, combo } => format!(
            "{:<11} {}",
            tier.label().dimmed(),
            route_line(&combo.route_tokens(bases), mode)
        ),
        MoveRow::Single(mv) => format!(
            "{:<11} {}",
            "Single".dimmed(),
            route_line(&[mv.token(bases)], mode)
        ),
        MoveRow::NoMatches => crate::browse::query::NO_MATCHES.dimmed().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combo::{IconRef, Move};
    use crate::testing::{combo_with_steps, sample_character};
    use tempfile::TempDir;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_route_line_degrades_missing_icons() {
        plain();
        let bases = IconBases {
            png_base: "/nonexistent/png".into(),
            svg_base: "/nonexistent/svg".into(),
        };
        let tokens = vec![
            Move::image("d/f+1", IconRef::new("df1.svg")).token(&bases),
            Move::image("", IconRef::new("blank.svg")).token(&bases),
            Move::text("Heat Burst").token(&bases),
        ];
        assert_eq!(route_line(&tokens, MoveListMode::Icons), "d/f+1 input Heat Burst");
        assert_eq!(route_line(&tokens, MoveListMode::Text), "d/f+1 input Heat Burst");
    }

    #[test]
    fn test_resolve_icon_prefers_raster_then_vector() {
        plain();
        let dir = TempDir::new().unwrap();
        let png = dir.path().join("png");
        let svg = dir.path().join("svg");
        std::fs::create_dir_all(&png).unwrap();
        std::fs::create_dir_all(&svg).unwrap();
        std::fs::write(svg.join("df1.svg"), "<svg/>").unwrap();

        let bases = IconBases {
            png_base: png.display().to_string(),
            svg_base: svg.display().to_string(),
        };
        let paths = IconRef::new("df1.svg").paths(&bases);
        assert_eq!(resolve_icon(&paths), Some(paths.fallback.as_str()));

        std::fs::write(png.join("df1.png"), "png").unwrap();
        assert_eq!(resolve_icon(&paths), Some(paths.primary.as_str()));

        let token = Move::image("d/f+1", IconRef::new("df1.svg")).token(&bases);
        assert_eq!(route_line(&[token.clone()], MoveListMode::Icons), "[d/f+1]");
        assert_eq!(route_line(&[token], MoveListMode::Text), "d/f+1");
    }

    #[test]
    fn test_combo_card_contents() {
        plain();
        let combo = combo_with_steps(ComboType::Heat, &["u/f+4", "Heat Burst"]);
        let card = combo_card(&combo, &IconBases::default(), MoveListMode::Icons);
        assert!(card.contains("[HEAT] Heat Route 1"));
        assert!(card.contains("u/f+4 ► Heat Burst"));
        assert!(card.contains("Practical route"));
    }

    #[test]
    fn test_empty_route_shows_placeholder() {
        plain();
        let mut combo = combo_with_steps(ComboType::Bnb, &["1"]);
        combo.moves.clear();
        let card = combo_card(&combo, &IconBases::default(), MoveListMode::Icons);
        assert!(card.contains("No route data"));
    }

    #[test]
    fn test_character_line_and_header() {
        plain();
        let paul = sample_character();
        let line = character_line(&paul, true);
        assert!(line.contains("P"));
        assert!(line.contains("Paul"));
        assert!(line.contains("(4 combos)"));

        let header = character_header(&paul, "/nonexistent");
        assert!(header.contains("Paul (P)"));
        assert!(header.contains("Execution: Variable (4 combos)"));
    }

    #[test]
    fn test_move_row_placeholder() {
        plain();
        let row = move_row(&MoveRow::NoMatches, &IconBases::default(), MoveListMode::Text);
        assert_eq!(row, "No matches");
    }
}
