//! Auto-advancing carousel.
//!
//! [`Carousel`] owns the selection state machine and the autoplay timer;
//! the host supplies the slides ([`ItemSource`]), the render hook
//! ([`SlideRenderer`]) and the event queue ticks are posted to.

mod config;
mod engine;
mod error;
mod index;
mod indicator;
mod intent;
mod reducer;
mod renderer;
mod source;
mod state;
mod timer;
mod view;

pub use config::{parse_interval, TimerConfig, DEFAULT_INTERVAL_MS, INTERVAL_ATTR, PAUSED_ATTR};
pub use engine::{Carousel, ChangeEvent};
pub use error::CarouselError;
pub use index::{step_index, wrap_index};
pub use indicator::{IndicatorHandle, IndicatorId, IndicatorSet};
pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use renderer::{SlideRenderer, Track};
pub use source::{ItemSource, SharedItems};
pub use state::CarouselState;
pub use timer::{channel_sink, AutoplayTick, AutoplayTimer, TickSink};
pub use view::{CarouselHit, CarouselLayout, CarouselView};
