mod loader;
mod store;
mod types;
mod watcher;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{CardConfig, CarouselConfig, Config, SlideConfig, TabConfig};
pub use watcher::{ConfigWatcher, WatcherError};
