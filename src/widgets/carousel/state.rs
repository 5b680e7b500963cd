//! Selection state of a carousel.

use crate::widgets::mvi::WidgetState;

use super::indicator::IndicatorSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselState {
    /// Not attached to a host. Keeps the indicator id counter so handles
    /// from an earlier attachment never resolve after re-attaching.
    Detached { next_indicator_id: u64 },

    Attached {
        /// Selected slide. In range whenever the source has items.
        current: usize,
        indicators: IndicatorSet,
    },
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::Detached {
            next_indicator_id: 0,
        }
    }
}

impl WidgetState for CarouselState {}

impl CarouselState {
    pub fn is_attached(&self) -> bool {
        matches!(self, Self::Attached { .. })
    }

    pub fn current(&self) -> Option<usize> {
        match self {
            Self::Attached { current, .. } => Some(*current),
            Self::Detached { .. } => None,
        }
    }

    pub fn indicators(&self) -> Option<&IndicatorSet> {
        match self {
            Self::Attached { indicators, .. } => Some(indicators),
            Self::Detached { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_is_default() {
        let state = CarouselState::default();
        assert!(!state.is_attached());
        assert_eq!(state.current(), None);
        assert!(state.indicators().is_none());
    }
}
