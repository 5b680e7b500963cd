//! Intents for the carousel selection state.

use crate::widgets::mvi::Intent;

/// Every intent that touches the index carries the item count observed by
/// the caller at dispatch time; the reducer never stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Host attached the carousel; index starts at the first slide.
    Attach { item_count: usize },

    /// Relative move (`+1` next, `-1` previous, timer ticks use `+1`).
    Advance { delta: i64, item_count: usize },

    /// Absolute jump, e.g. from an indicator. Still normalized.
    Jump { position: usize, item_count: usize },

    /// Host added or removed slides.
    ItemsChanged { item_count: usize },

    /// Host detached the carousel.
    Detach,
}

impl Intent for CarouselIntent {}
