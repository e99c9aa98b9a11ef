//! Route normalizer
//!
//! Pure transform from raw route records to typed [`Combo`] values. Every
//! helper here is total: malformed input falls back to a documented default
//! instead of failing.
//!
//! # Pipeline (per route, in source order)
//!
//! ```text
//! RawRoute
//!   ├─ infer_type(text + move names)      → heat | wall | bnb
//!   ├─ parse_steps(text)                  → non-empty Vec<String>
//!   ├─ derive_moves(raw moves, steps)     → Vec<Move>
//!   ├─ starter(moves, steps)
//!   ├─ extract_number(damage / hits)      → u32
//!   ├─ carry_from_hits(hits)              → Low | Mid | High
//!   └─ combo_title(type, position)
//! ```

pub mod raw;

pub use raw::{RawMove, RawRoute};

use crate::combo::{CarryTier, Combo, ComboType, IconRef, Move};
use regex::Regex;
use std::sync::LazyLock;

/// Step used when a route carries no notation at all
pub const UNKNOWN_ROUTE: &str = "Unknown route";

/// Move name used when the source omits one
pub const UNKNOWN_MOVE: &str = "Unknown";

/// Starter used when no move or step has a name
pub const UNKNOWN_STARTER: &str = "Unknown starter";

/// Notes used when the route has no hit description
pub const DEFAULT_NOTES: &str = "Practical route";

/// Hit count at which a route counts as high carry
pub const HIGH_CARRY_HITS: u32 = 9;

/// Hit count at which a route counts as mid carry
pub const MID_CARRY_HITS: u32 = 6;

static STEP_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{25BA}|->|\u{25B6}|>").expect("step separator regex is valid"));

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("digit regex is valid"));

/// Classify a route from its text and structured move names
///
/// "heat" is checked before "wall"; anything else is a bnb.
#[must_use]
pub fn infer_type(text: Option<&str>, moves: &[RawMove]) -> ComboType {
    let names: Vec<&str> = moves
        .iter()
        .map(|m| m.name.as_deref().unwrap_or_default())
        .collect();
    let haystack = format!("{} {}", text.unwrap_or_default(), names.join(" ")).to_lowercase();

    if haystack.contains("heat") {
        ComboType::Heat
    } else if haystack.contains("wall") {
        ComboType::Wall
    } else {
        ComboType::Bnb
    }
}

/// Split notation text into trimmed, non-empty steps
///
/// Never returns an empty list: unsplittable text becomes a single step, and
/// blank text becomes [`UNKNOWN_ROUTE`].
#[must_use]
pub fn parse_steps(text: Option<&str>) -> Vec<String> {
    let text = text.unwrap_or_default();
    let steps: Vec<String> = STEP_SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::to_string)
        .collect();

    if !steps.is_empty() {
        return steps;
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        vec![UNKNOWN_ROUTE.to_string()]
    } else {
        vec![trimmed.to_string()]
    }
}

/// Convert one structured move
///
/// A move is image-backed only when tagged `img` and its reference names a
/// vector icon; otherwise it degrades to text.
#[must_use]
pub fn derive_move(raw: &RawMove) -> Move {
    let name = raw
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_MOVE);

    let icon = (raw.kind.as_deref() == Some(raw::IMAGE_MOVE_TAG))
        .then(|| raw.img.as_deref().and_then(IconRef::parse))
        .flatten();

    match icon {
        Some(icon) => Move::image(name, icon),
        None => Move::text(name),
    }
}

/// Structured moves when present, otherwise one text move per step
#[must_use]
pub fn derive_moves(raw_moves: &[RawMove], steps: &[String]) -> Vec<Move> {
    if !raw_moves.is_empty() {
        return raw_moves.iter().map(derive_move).collect();
    }

    steps
        .iter()
        .map(|step| {
            if step.is_empty() {
                Move::text(UNKNOWN_MOVE)
            } else {
                Move::text(step.clone())
            }
        })
        .collect()
}

/// Name of the opening move
#[must_use]
pub fn starter(moves: &[Move], steps: &[String]) -> String {
    moves
        .first()
        .map(|m| m.name.as_str())
        .or_else(|| steps.first().map(String::as_str))
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_STARTER)
        .to_string()
}

/// First contiguous ASCII digit run in `value`, or 0
///
/// Runs too large for `u32` saturate rather than reset.
#[must_use]
pub fn extract_number(value: Option<&str>) -> u32 {
    value
        .and_then(|v| DIGIT_RUN.find(v))
        .map_or(0, |digits| digits.as_str().parse().unwrap_or(u32::MAX))
}

/// Carry tier for a hit count
#[must_use]
pub const fn carry_from_hits(hits: u32) -> CarryTier {
    if hits >= HIGH_CARRY_HITS {
        CarryTier::High
    } else if hits >= MID_CARRY_HITS {
        CarryTier::Mid
    } else {
        CarryTier::Low
    }
}

/// Positional title; `position` is 0-based in the character's route list
#[must_use]
pub fn combo_title(combo_type: ComboType, position: usize) -> String {
    format!("{} {}", combo_type.title_label(), position + 1)
}

/// Normalize a single route at `position` in its character's list
#[must_use]
pub fn normalize_route(route: &RawRoute, position: usize) -> Combo {
    let combo_type = infer_type(route.text.as_deref(), &route.moves);
    let steps = parse_steps(route.text.as_deref());
    let moves = derive_moves(&route.moves, &steps);
    let hits = extract_number(route.hits.as_deref());

    Combo {
        title: combo_title(combo_type, position),
        combo_type,
        starter: starter(&moves, &steps),
        damage: extract_number(route.damage.as_deref()),
        carry: carry_from_hits(hits),
        notes: route
            .hits
            .clone()
            .filter(|hits| !hits.is_empty())
            .unwrap_or_else(|| DEFAULT_NOTES.to_string()),
        steps,
        moves,
    }
}

/// Normalize a character's routes, keeping source order
#[must_use]
pub fn normalize_routes(routes: &[RawRoute]) -> Vec<Combo> {
    routes
        .iter()
        .enumerate()
        .map(|(position, route)| normalize_route(route, position))
        .collect()
}

/// Turn a character id like `devil_jin` into `Devil Jin`
#[must_use]
pub fn display_name(id: &str) -> String {
    id.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
