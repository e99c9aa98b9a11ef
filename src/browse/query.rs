//! Query logic for browse views
//!
//! Derives what is visible from a character's combos and the current
//! selection. Nothing here mutates state; the session recomputes these views
//! after every intent.

use crate::browse::models::{FilterTag, MoveTier, SelectionState};
use crate::combo::{Combo, Move, MoveKind};
use std::collections::HashSet;

/// Placeholder text for an empty move table
pub const NO_MATCHES: &str = "No matches";

/// Combos passing both the type filter and the search text
///
/// Search is a case-insensitive substring match over title, starter, notes,
/// type, steps and move names. Both predicates must hold.
///
/// # Examples
/// ```ignore
/// let visible = visible_combos(&character.combos, &selection);
/// println!("{} of {} combos", visible.len(), character.combos.len());
/// ```
#[must_use]
pub fn visible_combos<'a>(combos: &'a [Combo], selection: &SelectionState) -> Vec<&'a Combo> {
    let needle = selection.search_needle();
    combos
        .iter()
        .filter(|combo| matches_combo(combo, selection.filter, &needle))
        .collect()
}

/// Filter/search predicate for a single combo; `needle` must be lowercased
#[must_use]
pub fn matches_combo(combo: &Combo, filter: FilterTag, needle: &str) -> bool {
    filter.accepts(combo.combo_type) && (needle.is_empty() || combo.search_text().contains(needle))
}

/// Move-table tier for a combo with `step_count` steps
#[must_use]
pub const fn move_tier_of(step_count: usize) -> MoveTier {
    match step_count {
        1 => MoveTier::Single,
        2..=3 => MoveTier::Simple,
        4..=5 => MoveTier::MedSimple,
        6..=7 => MoveTier::Medium,
        8..=9 => MoveTier::Advanced,
        _ => MoveTier::Expert,
    }
}

/// One row of the move-string table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRow<'a> {
    /// A whole combo bucketed by step count
    Combo { tier: MoveTier, combo: &'a Combo },
    /// One deduplicated move from the exploded view
    Single(&'a Move),
    /// Placeholder when nothing matches the tier
    NoMatches,
}

impl MoveRow<'_> {
    /// Tier this row is tagged with, `None` for the placeholder
    #[must_use]
    pub const fn tier(&self) -> Option<MoveTier> {
        match self {
            Self::Combo { tier, .. } => Some(*tier),
            Self::Single(_) => Some(MoveTier::Single),
            Self::NoMatches => None,
        }
    }
}

/// Dedup key: icon file for image moves, name for text moves
#[derive(Debug, PartialEq, Eq, Hash)]
enum MoveKey<'a> {
    Image(&'a str),
    Text(&'a str),
}

impl<'a> From<&'a Move> for MoveKey<'a> {
    fn from(mv: &'a Move) -> Self {
        match &mv.kind {
            MoveKind::Image(icon) => Self::Image(icon.file_name()),
            MoveKind::Text => Self::Text(&mv.name),
        }
    }
}

/// Rows of the move-string table for `combos` at `tier`
///
/// `MoveTier::Single` explodes every combo into individual moves, dropping
/// repeats in first-seen order. Any other tier yields one row per combo,
/// filtered to that tier unless it is `MoveTier::All`. Never returns an
/// empty list: no matches yields a single [`MoveRow::NoMatches`].
#[must_use]
pub fn move_table_rows(combos: &[Combo], tier: MoveTier) -> Vec<MoveRow<'_>> {
    let rows: Vec<MoveRow<'_>> = if tier == MoveTier::Single {
        let mut seen: HashSet<MoveKey<'_>> = HashSet::new();
        combos
            .iter()
            .flat_map(|combo| combo.moves.iter())
            .filter(|mv| seen.insert(MoveKey::from(*mv)))
            .map(MoveRow::Single)
            .collect()
    } else {
        combos
            .iter()
            .map(|combo| MoveRow::Combo {
                tier: move_tier_of(combo.steps.len()),
                combo,
            })
            .filter(|row| tier == MoveTier::All || row.tier() == Some(tier))
            .collect()
    };

    if rows.is_empty() {
        vec![MoveRow::NoMatches]
    } else {
        rows
    }
}
