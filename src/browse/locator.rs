//! Shareable deep links
//!
//! A locator is the (character, combo number, view) triple encoded as a flat
//! query string:
//!
//! ```text
//! ?character=devil_jin&combo=3&view=deck
//! ```
//!
//! Parsing is lenient and never fails: anything unusable is dropped and the
//! caller falls back to persisted or default values. Whether the character
//! exists and whether the combo number is in range are decided later, once the
//! catalogue and the visible list are known.

use crate::browse::models::ViewMode;

pub const CHARACTER_PARAM: &str = "character";
pub const COMBO_PARAM: &str = "combo";
pub const VIEW_PARAM: &str = "view";

/// Decoded locator fields, each optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locator {
    /// Requested character id, not yet checked against the catalogue
    pub character_id: Option<String>,

    /// Requested combo, 1-based
    pub combo_number: Option<usize>,

    /// Present only when the link asked for deck view
    pub view: Option<ViewMode>,
}

impl Locator {
    /// Locator pointing at a concrete presentation state
    #[must_use]
    pub fn new(character_id: impl Into<String>, active_index: usize, view: ViewMode) -> Self {
        Self {
            character_id: Some(character_id.into()),
            combo_number: Some(active_index.saturating_add(1)),
            view: Some(view),
        }
    }

    /// 0-based index requested by the link
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.combo_number.and_then(|n| n.checked_sub(1))
    }

    /// Parse a full URL or bare query string
    ///
    /// Everything before `?` and after `#` is ignored. Repeated keys keep the
    /// last value; unknown keys are skipped.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let without_fragment = input.split_once('#').map_or(input, |(head, _)| head);
        let query = match without_fragment.split_once('?') {
            Some((_, query)) => query,
            None if without_fragment.contains('=') => without_fragment,
            None => "",
        };

        let mut locator = Self::default();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);
            match decode_component(key).as_str() {
                CHARACTER_PARAM => {
                    locator.character_id = Some(value).filter(|id| !id.trim().is_empty());
                }
                COMBO_PARAM => locator.combo_number = parse_combo_number(&value),
                VIEW_PARAM => {
                    locator.view = (value == ViewMode::Deck.as_str()).then_some(ViewMode::Deck);
                }
                _ => {}
            }
        }
        locator
    }

    /// Encode as a query string (without the leading `?`)
    ///
    /// Missing fields are omitted; the order is always character, combo, view.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut pairs = Vec::with_capacity(3);
        if let Some(id) = &self.character_id {
            pairs.push(format!("{CHARACTER_PARAM}={}", urlencoding::encode(id)));
        }
        if let Some(number) = self.combo_number {
            pairs.push(format!("{COMBO_PARAM}={number}"));
        }
        if let Some(view) = self.view {
            pairs.push(format!("{VIEW_PARAM}={view}"));
        }
        pairs.join("&")
    }

    /// Append this locator to `base`, replacing any existing query
    #[must_use]
    pub fn to_url(&self, base: &str) -> String {
        let base = base.split_once('#').map_or(base, |(head, _)| head);
        let base = base.split_once('?').map_or(base, |(head, _)| head);
        format!("{base}?{}", self.to_query())
    }
}

/// Positive integer or nothing
fn parse_combo_number(value: &str) -> Option<usize> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<usize>().ok().filter(|n| *n > 0)
}

/// Form-style decoding: `+` is a space, invalid UTF-8 keeps the raw text
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or(spaced.clone(), |decoded| decoded.into_owned())
}
