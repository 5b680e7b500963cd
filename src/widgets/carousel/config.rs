//! Autoplay configuration read from the carousel's attributes.

use std::time::Duration;

use crate::widgets::attributes::Attributes;

/// Fallback cadence when `interval` is absent or unusable.
pub const DEFAULT_INTERVAL_MS: u64 = 4000;

pub const INTERVAL_ATTR: &str = "interval";
pub const PAUSED_ATTR: &str = "paused";

/// Attributes whose changes restart the autoplay timer.
pub const OBSERVED_ATTRIBUTES: &[&str] = &[INTERVAL_ATTR, PAUSED_ATTR];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// Tick period in milliseconds, always positive.
    pub interval_ms: u64,
    pub paused: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            paused: false,
        }
    }
}

impl TimerConfig {
    pub fn from_attributes(attributes: &Attributes) -> Self {
        Self {
            interval_ms: parse_interval(attributes.get(INTERVAL_ATTR)),
            paused: attributes.has(PAUSED_ATTR),
        }
    }

    /// Write this config back as attributes.
    pub fn write_attributes(&self, attributes: &mut Attributes) {
        attributes.set(INTERVAL_ATTR, &self.interval_ms.to_string());
        attributes.toggle(PAUSED_ATTR, self.paused);
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

/// Parse an `interval` attribute value into milliseconds.
///
/// Accepts anything that reads as a positive finite number (surrounding
/// whitespace allowed, fractions rounded up). Missing, empty, zero,
/// negative or non-numeric values fall back to [`DEFAULT_INTERVAL_MS`].
pub fn parse_interval(value: Option<&str>) -> u64 {
    let Some(raw) = value else {
        return DEFAULT_INTERVAL_MS;
    };
    let trimmed = raw.trim();
    if let Ok(ms) = trimmed.parse::<u64>() {
        if ms > 0 {
            return ms;
        }
    } else if let Ok(ms) = trimmed.parse::<f64>() {
        if ms.is_finite() && ms > 0.0 {
            return (ms.ceil() as u64).max(1);
        }
    }
    tracing::debug!(value = %raw, "Unusable carousel interval, using default");
    DEFAULT_INTERVAL_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_interval_uses_default() {
        assert_eq!(parse_interval(None), DEFAULT_INTERVAL_MS);
        assert_eq!(parse_interval(Some("")), DEFAULT_INTERVAL_MS);
    }

    #[test]
    fn invalid_interval_uses_default() {
        assert_eq!(parse_interval(Some("fast")), DEFAULT_INTERVAL_MS);
        assert_eq!(parse_interval(Some("0")), DEFAULT_INTERVAL_MS);
        assert_eq!(parse_interval(Some("-250")), DEFAULT_INTERVAL_MS);
        assert_eq!(parse_interval(Some("NaN")), DEFAULT_INTERVAL_MS);
        assert_eq!(parse_interval(Some("inf")), DEFAULT_INTERVAL_MS);
    }

    #[test]
    fn numeric_interval_is_accepted() {
        assert_eq!(parse_interval(Some("1000")), 1000);
        assert_eq!(parse_interval(Some(" 250 ")), 250);
        assert_eq!(parse_interval(Some("1e3")), 1000);
        assert_eq!(parse_interval(Some("12.2")), 13);
    }

    #[test]
    fn paused_is_presence_based() {
        let attrs = Attributes::new().with(PAUSED_ATTR, "false");
        assert!(TimerConfig::from_attributes(&attrs).paused);
        assert!(!TimerConfig::from_attributes(&Attributes::new()).paused);
    }

    #[test]
    fn write_attributes_round_trips() {
        let mut attrs = Attributes::new();
        let config = TimerConfig {
            interval_ms: 1500,
            paused: true,
        };
        config.write_attributes(&mut attrs);
        assert_eq!(TimerConfig::from_attributes(&attrs), config);
    }
}
