//! Deck navigation
//!
//! Bounded index arithmetic for the one-combo-at-a-time view, plus the
//! pointer tracker that turns a drag into a page turn. Indices saturate at
//! both ends; there is no wraparound.

use crate::browse::models::{Key, ViewMode};

/// Horizontal travel a drag must exceed to turn the page
pub const SWIPE_THRESHOLD: f64 = 80.0;

/// Clamp `index` into `[0, total - 1]`, or 0 when `total` is 0
#[must_use]
pub const fn clamp_index(index: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else if index >= total {
        total - 1
    } else {
        index
    }
}

/// Index after jumping to `target`
#[must_use]
pub const fn go_to(current: usize, target: usize, total: usize) -> usize {
    if total == 0 {
        clamp_index(current, total)
    } else {
        clamp_index(target, total)
    }
}

/// Index after paging forward
#[must_use]
pub const fn next(current: usize, total: usize) -> usize {
    go_to(current, current.saturating_add(1), total)
}

/// Index after paging back
#[must_use]
pub const fn prev(current: usize, total: usize) -> usize {
    go_to(current, current.saturating_sub(1), total)
}

/// Page direction derived from input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTurn {
    Next,
    Prev,
}

impl PageTurn {
    /// Apply this turn to `current`
    #[must_use]
    pub const fn apply(self, current: usize, total: usize) -> usize {
        match self {
            Self::Next => next(current, total),
            Self::Prev => prev(current, total),
        }
    }
}

/// Arrow keys page the deck; they do nothing in grid view
#[must_use]
pub const fn key_turn(key: Key, view: ViewMode) -> Option<PageTurn> {
    match (view, key) {
        (ViewMode::Deck, Key::ArrowLeft) => Some(PageTurn::Prev),
        (ViewMode::Deck, Key::ArrowRight) => Some(PageTurn::Next),
        _ => None,
    }
}

/// Net horizontal travel → page turn
///
/// Dragging left (negative) moves forward, dragging right moves back. Travel
/// at or below the threshold is a tap.
#[must_use]
pub fn swipe_turn(delta_x: f64) -> Option<PageTurn> {
    if delta_x < -SWIPE_THRESHOLD {
        Some(PageTurn::Next)
    } else if delta_x > SWIPE_THRESHOLD {
        Some(PageTurn::Prev)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveDrag {
    pointer: u32,
    start_x: f64,
    last_x: f64,
}

/// Tracks a single pointer through down/move/up
///
/// A second pointer pressed while one is active is ignored until the first
/// ends or is cancelled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragTracker {
    active: Option<ActiveDrag>,
}

impl DragTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Whether a drag is in progress
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Current offset of the tracked pointer from its start
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.active.map_or(0.0, |drag| drag.last_x - drag.start_x)
    }

    /// Start tracking `pointer` unless another pointer is active
    ///
    /// Returns whether the pointer was accepted.
    pub fn pointer_down(&mut self, pointer: u32, x: f64) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(ActiveDrag {
            pointer,
            start_x: x,
            last_x: x,
        });
        true
    }

    pub fn pointer_move(&mut self, pointer: u32, x: f64) {
        if let Some(drag) = self.active.as_mut()
            && drag.pointer == pointer
        {
            drag.last_x = x;
        }
    }

    /// Finish the drag and resolve it into a page turn
    pub fn pointer_up(&mut self, pointer: u32, x: f64) -> Option<PageTurn> {
        let drag = self.active.filter(|drag| drag.pointer == pointer)?;
        self.active = None;
        swipe_turn(x - drag.start_x)
    }

    /// Abandon the drag without turning
    pub fn pointer_cancel(&mut self, pointer: u32) {
        if self.active.is_some_and(|drag| drag.pointer == pointer) {
            self.active = None;
        }
    }
}
