//! Reducer for the carousel selection state.

use crate::widgets::mvi::Reducer;

use super::index::step_index;
use super::indicator::IndicatorSet;
use super::intent::CarouselIntent;
use super::state::CarouselState;

/// Pure transition function. Rendering, change events and the autoplay
/// timer are driven by [`Carousel`](super::Carousel) around each dispatch.
pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::Attach { item_count } => match state {
                CarouselState::Detached { next_indicator_id } => {
                    let mut indicators = IndicatorSet::starting_at(next_indicator_id);
                    indicators.rebuild(item_count);
                    indicators.resync(0usize.checked_rem(item_count));
                    CarouselState::Attached {
                        current: 0,
                        indicators,
                    }
                }
                attached => attached,
            },

            CarouselIntent::Advance { delta, item_count } => match state {
                CarouselState::Attached {
                    current,
                    indicators,
                } => move_to(
                    step_index(current, delta, item_count),
                    item_count,
                    current,
                    indicators,
                ),
                detached => detached,
            },

            CarouselIntent::Jump {
                position,
                item_count,
            } => match state {
                CarouselState::Attached {
                    current,
                    indicators,
                } => move_to(
                    position.checked_rem(item_count),
                    item_count,
                    current,
                    indicators,
                ),
                detached => detached,
            },

            CarouselIntent::ItemsChanged { item_count } => match state {
                CarouselState::Attached {
                    current,
                    mut indicators,
                } => {
                    if indicators.len() != item_count {
                        indicators.rebuild(item_count);
                    }
                    let wrapped = current.checked_rem(item_count);
                    indicators.resync(wrapped);
                    let current = wrapped.unwrap_or(current);
                    CarouselState::Attached {
                        current,
                        indicators,
                    }
                }
                detached => detached,
            },

            CarouselIntent::Detach => match state {
                CarouselState::Attached { indicators, .. } => CarouselState::Detached {
                    next_indicator_id: indicators.next_id(),
                },
                detached => detached,
            },
        }
    }
}

/// Commit an already normalized `index`, rebuilding the row if the item
/// count moved since the last rebuild, then resync every indicator. `None`
/// (zero items) leaves state untouched.
fn move_to(
    index: Option<usize>,
    item_count: usize,
    current: usize,
    mut indicators: IndicatorSet,
) -> CarouselState {
    let Some(index) = index else {
        return CarouselState::Attached {
            current,
            indicators,
        };
    };
    if indicators.len() != item_count {
        indicators.rebuild(item_count);
    }
    indicators.resync(Some(index));
    CarouselState::Attached {
        current: index,
        indicators,
    }
}
