//! Calc command for computing a single night's duration.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use sleep_core::{ClockStyle, EqualTimes, SleepEntry};

use super::report::{format_hours, format_span};
use super::util::parse_time;
use crate::Config;

/// JSON output for one computed night.
#[derive(Debug, Serialize)]
struct JsonCalc {
    #[serde(flatten)]
    entry: SleepEntry,
    minutes: u32,
}

/// Computes the entry for a sleep and wake time without keeping it anywhere.
pub fn compute(sleep: &str, wake: &str, equal_times: EqualTimes) -> Result<SleepEntry> {
    let start = parse_time(sleep)?;
    let end = parse_time(wake)?;
    Ok(SleepEntry::new(start, end, equal_times))
}

/// Formats one computed night for people.
pub fn format_calc(entry: &SleepEntry, clock: ClockStyle) -> String {
    format!(
        "{} ({})",
        format_hours(entry.hours),
        format_span(entry, clock)
    )
}

/// Runs the calc command.
pub fn run<W: Write>(
    writer: &mut W,
    sleep: &str,
    wake: &str,
    json: bool,
    config: &Config,
) -> Result<()> {
    let entry = compute(sleep, wake, config.equal_times)?;

    if json {
        let output = JsonCalc {
            entry,
            minutes: sleep_core::sleep_minutes(entry.start, entry.end, config.equal_times),
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(writer, "{}", format_calc(&entry, config.clock))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn output_of(sleep: &str, wake: &str, json: bool, config: &Config) -> String {
        let mut output = Vec::new();
        run(&mut output, sleep, wake, json, config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_calc_overnight() {
        let output = output_of("11pm", "7am", false, &Config::default());
        assert_eq!(output, "8.0 hrs (11:00 PM -> 7:00 AM)\n");
    }

    #[test]
    fn test_calc_same_day_24_hour_clock() {
        let config = Config {
            clock: ClockStyle::TwentyFourHour,
            ..Config::default()
        };
        let output = output_of("13:15", "14:45", false, &config);
        assert_eq!(output, "1.5 hrs (13:15 -> 14:45)\n");
    }

    #[test]
    fn test_calc_equal_times_follow_config() {
        assert_eq!(
            output_of("7:00", "7:00", false, &Config::default()),
            "24.0 hrs (7:00 AM -> 7:00 AM)\n"
        );
        let config = Config {
            equal_times: EqualTimes::Zero,
            ..Config::default()
        };
        assert_eq!(
            output_of("7:00", "7:00", false, &config),
            "0.0 hrs (7:00 AM -> 7:00 AM)\n"
        );
    }

    #[test]
    fn test_calc_json() {
        let output = output_of("22:30", "06:10", true, &Config::default());
        assert_snapshot!(output, @r#"
        {
          "start": "22:30",
          "end": "06:10",
          "hours": 7.666666666666667,
          "minutes": 460
        }
        "#);
    }

    #[test]
    fn test_calc_rejects_bad_time() {
        let mut output = Vec::new();
        let err = run(&mut output, "late", "7am", false, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid time: late"));
        assert!(output.is_empty());
    }
}
