//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::Context;
use chrono::Local;
use regex::Regex;
use sleep_core::TimeOfDay;

/// Pre-compiled regex for user-entered clock times.
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?::(\d{2}))?\s*([ap]m)?$").expect("time regex is valid")
});

/// Parse a clock time as typed by a person.
///
/// Supports:
/// - 24-hour: "23:00", "7:30", "23"
/// - 12-hour: "11pm", "11:30 PM", "12am"
/// - "now" for the current local time
pub fn parse_time(s: &str) -> anyhow::Result<TimeOfDay> {
    let input = s.trim().to_ascii_lowercase();

    if input == "now" {
        return Ok(TimeOfDay::from(Local::now().time()));
    }

    let Some(caps) = TIME_RE.captures(&input) else {
        anyhow::bail!("Invalid time: {s}. Use 24-hour (e.g., 23:00) or 12-hour (e.g., 11pm)");
    };

    let hour: u32 = caps[1].parse().context("failed to parse hour")?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().context("failed to parse minute")?,
        None => 0,
    };

    let hour = match caps.get(3).map(|m| m.as_str()) {
        None => hour,
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                anyhow::bail!("Invalid time: {s}. 12-hour times use hours 1 to 12");
            }
            match (meridiem, hour) {
                ("am", 12) => 0,
                ("am", h) => h,
                ("pm", 12) => 12,
                (_, h) => h + 12,
            }
        }
    };

    TimeOfDay::new(hour, minute).with_context(|| format!("Invalid time: {s}"))
}

/// Parse a `SLEEP-WAKE` pair such as "23:00-07:00" or "11pm-6:30am".
pub fn parse_night(s: &str) -> anyhow::Result<(TimeOfDay, TimeOfDay)> {
    let Some((sleep, wake)) = s.split_once('-') else {
        anyhow::bail!("Invalid night: {s}. Use SLEEP-WAKE (e.g., 23:00-07:00)");
    };
    let sleep = parse_time(sleep).with_context(|| format!("in night {s}"))?;
    let wake = parse_time(wake).with_context(|| format!("in night {s}"))?;
    Ok((sleep, wake))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::new(h, m).unwrap()
    }

    #[test]
    fn test_parse_24_hour() {
        assert_eq!(parse_time("23:00").unwrap(), hm(23, 0));
        assert_eq!(parse_time("7:30").unwrap(), hm(7, 30));
        assert_eq!(parse_time("00:00").unwrap(), hm(0, 0));
        assert_eq!(parse_time("23").unwrap(), hm(23, 0));
    }

    #[test]
    fn test_parse_12_hour_equivalents() {
        let expected = hm(23, 0);
        for input in ["11pm", "11 pm", "11:00 PM", "11:00pm", "  11PM  "] {
            assert_eq!(parse_time(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_parse_12_hour_midnight_and_noon() {
        assert_eq!(parse_time("12am").unwrap(), hm(0, 0));
        assert_eq!(parse_time("12:30 am").unwrap(), hm(0, 30));
        assert_eq!(parse_time("12pm").unwrap(), hm(12, 0));
        assert_eq!(parse_time("1:05 pm").unwrap(), hm(13, 5));
        assert_eq!(parse_time("6:45am").unwrap(), hm(6, 45));
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for input in ["", "13pm", "0am", "24:00", "7:60", "7:5", "noon", "7.30", "-1"] {
            assert!(parse_time(input).is_err(), "{input} should be rejected");
        }
    }

    #[test]
    fn test_parse_now_succeeds() {
        assert!(parse_time("now").is_ok());
        assert!(parse_time("NOW").is_ok());
    }

    #[test]
    fn test_parse_night() {
        assert_eq!(parse_night("23:00-07:00").unwrap(), (hm(23, 0), hm(7, 0)));
        assert_eq!(parse_night("11pm-6:30am").unwrap(), (hm(23, 0), hm(6, 30)));
    }

    #[test]
    fn test_parse_night_errors() {
        assert!(parse_night("23:00").is_err());
        let err = parse_night("25:00-07:00").unwrap_err();
        assert!(format!("{err:#}").contains("in night 25:00-07:00"));
    }
}
