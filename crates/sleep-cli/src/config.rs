//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use sleep_core::insight::{DEFAULT_FAIR_HOURS, DEFAULT_HEALTHY_HOURS};
use sleep_core::{ClockStyle, EqualTimes, ThresholdError, Thresholds};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// How times are shown.
    pub clock: ClockStyle,

    /// Meaning of an entry whose sleep and wake times are identical.
    pub equal_times: EqualTimes,

    /// Lowest average, in hours, reported as healthy.
    pub healthy_hours: f64,

    /// Lowest average, in hours, reported as fair.
    pub fair_hours: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clock: ClockStyle::default(),
            equal_times: EqualTimes::default(),
            healthy_hours: DEFAULT_HEALTHY_HOURS,
            fair_hours: DEFAULT_FAIR_HOURS,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (SLEEPLOG_*)
        figment = figment.merge(Env::prefixed("SLEEPLOG_"));

        figment.extract()
    }

    /// Validated category thresholds.
    pub fn thresholds(&self) -> Result<Thresholds, ThresholdError> {
        Thresholds::new(self.healthy_hours, self.fair_hours)
    }
}

/// Returns the platform-specific config directory for sleeplog.
///
/// On Linux: `~/.config/sleeplog`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sleeplog"))
}
