//! Self-contained widgets: card, carousel and tabs.
//!
//! Each widget keeps its own state, reads its configuration from an
//! [`Attributes`] map, reacts to host lifecycle calls (attach/connect,
//! detach/disconnect, attribute changes), and draws itself into the `Rect`
//! it is given.

pub mod attributes;
pub mod card;
pub mod carousel;
pub mod emitter;
pub mod mvi;
pub mod tabs;
pub mod theme;

pub use attributes::Attributes;
pub use emitter::{EventEmitter, ListenerId};
