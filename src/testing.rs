//! Testing utilities for combodeck
//!
//! Shared fixtures: a small raw dataset shaped like the scraped catalogue,
//! normalized views of it, and a hand-built combo helper.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalogue::{Catalogue, Character};
use crate::combo::{CarryTier, Combo, ComboType, Move};
use serde_json::{Value, json};

/// Raw dataset with three playable characters and one empty entry
///
/// - `paul`: four routes (bnb with icons, wall, heat, single-step bnb)
/// - `devil_jin`: two routes
/// - `jack-8`: one route
/// - `nina`: no routes, dropped during normalization
#[must_use]
pub fn sample_dataset() -> Value {
    json!({
        "paul": [
            {
                "id": "paul-1",
                "text": "d/f+1 ▶ d/f+2 ▶ b+3 ▶ d+3+4",
                "hits": "6 hits",
                "damage": "58 damages",
                "moves": [
                    {"type": "img", "name": "d/f+1", "img": "df1.svg"},
                    {"type": "img", "name": "d/f+2", "img": "df2.svg"},
                    {"type": "img", "name": "b+3", "img": "b3.svg"},
                    {"type": "text", "name": "d+3+4"}
                ]
            },
            {
                "id": "paul-2",
                "text": "b+1+2 ▶ wall splat ▶ d/f+2",
                "hits": "10 hits, heat engager",
                "damage": 71
            },
            {
                "id": "paul-3",
                "text": "u/f+4 > Heat Burst > qcf+2",
                "hits": "4 hits",
                "damage": "40"
            },
            {
                "id": "paul-4",
                "text": "qcb+1+2",
                "hits": "1 hit"
            }
        ],
        "devil_jin": [
            {"text": "b+2,1 -> f,F+2 -> laser", "hits": "9 hits", "damage": "66"},
            {"text": "ws2 -> wall -> b+4", "hits": "5 hits"}
        ],
        "jack-8": [
            {"text": "d/f+1,2 ▶ heat smash", "hits": "3 hits", "damage": "80"}
        ],
        "nina": []
    })
}

/// Normalized catalogue of [`sample_dataset`]
///
/// # Panics
/// Panics if the fixture stops normalizing.
#[must_use]
pub fn sample_catalogue() -> Catalogue {
    Catalogue::from_value(&sample_dataset()).expect("sample dataset normalizes")
}

/// The `paul` character from [`sample_catalogue`]
///
/// # Panics
/// Panics if the fixture no longer contains `paul`.
#[must_use]
pub fn sample_character() -> Character {
    sample_catalogue()
        .get("paul")
        .cloned()
        .expect("sample catalogue contains paul")
}

/// Hand-built combo with text moves mirroring `steps`
#[must_use]
pub fn combo_with_steps(combo_type: ComboType, steps: &[&str]) -> Combo {
    let steps: Vec<String> = steps.iter().map(|s| (*s).to_string()).collect();
    Combo {
        title: format!("{} 1", combo_type.title_label()),
        combo_type,
        starter: steps.first().cloned().unwrap_or_default(),
        damage: 0,
        carry: CarryTier::Low,
        notes: "Practical route".to_string(),
        moves: steps.iter().map(|s| Move::text(s.clone())).collect(),
        steps,
    }
}

/// Catalogue with one character holding `count` identical bnb combos
#[must_use]
pub fn catalogue_with_combos(id: &str, count: usize) -> Catalogue {
    let combos = (0..count)
        .map(|i| {
            let mut combo = combo_with_steps(ComboType::Bnb, &["1", "2"]);
            combo.title = format!("BnB Route {}", i + 1);
            combo
        })
        .collect();
    Catalogue::new(vec![Character::new(id, combos)])
}
