//! Carousel, card and tabs widgets for ratatui, plus the demo host that
//! drives them.

pub mod args;
pub mod config;
pub mod logging;
pub mod ui;
pub mod widgets;

pub use widgets::card::{Card, CardVariant};
pub use widgets::carousel::{Carousel, ChangeEvent};
pub use widgets::tabs::{TabChangeEvent, Tabs};
