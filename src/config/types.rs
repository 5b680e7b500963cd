use serde::{Deserialize, Serialize};

use crate::widgets::carousel::{TimerConfig, DEFAULT_INTERVAL_MS};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub card: CardConfig,
    #[serde(default = "default_slides")]
    pub slides: Vec<SlideConfig>,
    #[serde(default = "default_tabs")]
    pub tabs: Vec<TabConfig>,
}

/// Autoplay settings for the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Milliseconds between slides (default: 4000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Start with autoplay stopped.
    #[serde(default)]
    pub paused: bool,
}

/// Slot content and variant of the card hosting the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    /// "elevated", "dark", "bordered", or unset.
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideConfig {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabConfig {
    /// Tab label; falls back to "Tab N".
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub body: String,
}

impl CarouselConfig {
    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig {
            interval_ms: self.interval_ms,
            paused: self.paused,
        }
    }
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

fn default_slides() -> Vec<SlideConfig> {
    [
        ("Welcome", "Slides advance on their own. Use ← and → to move by hand."),
        ("Indicators", "Click a dot below, or press 1-9, to jump straight to a slide."),
        ("Autoplay", "Press p to pause or resume, + and - to change the interval."),
        ("Live items", "Press a to add a slide and d to remove one."),
    ]
    .into_iter()
    .map(|(title, body)| SlideConfig {
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}

fn default_tabs() -> Vec<TabConfig> {
    [
        (Some("Overview"), "Tab and Shift-Tab switch panels. Exactly one panel is visible."),
        (Some("Config"), "Edit config.toml while running; the carousel picks up changes."),
        (None, "Panels without a label get a numbered one."),
    ]
    .into_iter()
    .map(|(label, body)| TabConfig {
        label: label.map(str::to_string),
        body: body.to_string(),
    })
    .collect()
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            paused: false,
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            variant: None,
            title: Some("frmwk widgets".to_string()),
            subtitle: Some("card · carousel · tabs".to_string()),
            footer: Some("v cycles the card variant · q quits".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            card: CardConfig::default(),
            slides: default_slides(),
            tabs: default_tabs(),
        }
    }
}
