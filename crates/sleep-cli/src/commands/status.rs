//! Status command for showing the effective configuration.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use sleep_core::{ClockStyle, EqualTimes};

use crate::Config;
use crate::config::dirs_config_path;

/// Prints the config sources and effective settings. `explicit` is the
/// `--config` path, if one was given.
pub fn run<W: Write>(writer: &mut W, config: &Config, explicit: Option<&Path>) -> Result<()> {
    writeln!(writer, "Sleep log status")?;
    match dirs_config_path() {
        Some(dir) => writeln!(writer, "Config file: {}", dir.join("config.toml").display())?,
        None => writeln!(writer, "Config file: (no config directory)")?,
    }
    if let Some(path) = explicit {
        writeln!(writer, "Extra config: {}", path.display())?;
    }

    let clock = match config.clock {
        ClockStyle::TwelveHour => "12h",
        ClockStyle::TwentyFourHour => "24h",
    };
    let equal_times = match config.equal_times {
        EqualTimes::FullDay => "full-day (identical times count as 24 hours)",
        EqualTimes::Zero => "zero (identical times count as no sleep)",
    };

    writeln!(writer, "Settings:")?;
    writeln!(writer, "- clock: {clock}")?;
    writeln!(writer, "- equal_times: {equal_times}")?;
    writeln!(writer, "- healthy_hours: {}", config.healthy_hours)?;
    writeln!(writer, "- fair_hours: {}", config.fair_hours)?;

    if let Err(err) = config.thresholds() {
        writeln!(writer, "Warning: {err}")?;
    }

    Ok(())
}
