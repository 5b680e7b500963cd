//! Command-line arguments of the demo binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal demo of the carousel, card and tabs widgets.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "frmwk-demo", version)]
#[command(about = "Terminal demo of the frmwk carousel, card and tabs widgets")]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Autoplay interval in milliseconds (overrides config)
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Start with autoplay paused (overrides config)
    #[arg(long)]
    pub paused: bool,

    /// Write tracing output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            interval_ms: self.interval,
            paused: self.paused,
        }
    }
}

/// Command-line values that win over the config file, reapplied on every reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub interval_ms: Option<u64>,
    pub paused: bool,
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(ms) = self.interval_ms {
            config.carousel.interval_ms = ms;
        }
        if self.paused {
            config.carousel.paused = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "frmwk-demo",
            "--interval",
            "1500",
            "--paused",
            "--config",
            "/tmp/c.toml",
        ])
        .unwrap();
        assert_eq!(cli.interval, Some(1500));
        assert!(cli.paused);
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/c.toml"));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        assert!(Cli::try_parse_from(["frmwk-demo", "--interval", "0"]).is_err());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut config = Config::default();
        Overrides {
            interval_ms: Some(250),
            paused: true,
        }
        .apply(&mut config);
        assert_eq!(config.carousel.interval_ms, 250);
        assert!(config.carousel.paused);
    }

    #[test]
    fn test_empty_overrides_keep_file_values() {
        let mut config = Config::default();
        config.carousel.paused = true;
        Overrides::default().apply(&mut config);
        assert_eq!(config, {
            let mut expected = Config::default();
            expected.carousel.paused = true;
            expected
        });
    }
}
