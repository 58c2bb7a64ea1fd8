//! Wall-clock time of day with no date or timezone component.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Errors produced when constructing or parsing a [`TimeOfDay`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Hour outside 0-23.
    #[error("hour must be between 0 and 23, got {hour}")]
    HourOutOfRange { hour: u32 },

    /// Minute outside 0-59.
    #[error("minute must be between 0 and 59, got {minute}")]
    MinuteOutOfRange { minute: u32 },

    /// Minutes since midnight outside one day.
    #[error("minutes since midnight must be below 1440, got {minutes}")]
    MinutesOutOfRange { minutes: u32 },

    /// Input did not look like `HH:MM`.
    #[error("invalid time '{input}', expected HH:MM")]
    Malformed { input: String },
}

/// How a [`TimeOfDay`] is rendered for people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockStyle {
    /// `11:00 PM`
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// `23:00`
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// A time on the wall clock, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Midnight (00:00).
    pub const MIDNIGHT: Self = Self { minutes: 0 };

    /// Creates a time from a 24-hour hour and a minute.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour >= 24 {
            return Err(TimeError::HourOutOfRange { hour });
        }
        if minute >= 60 {
            return Err(TimeError::MinuteOutOfRange { minute });
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "hour * 60 + minute < 1440"
        )]
        let minutes = (hour * 60 + minute) as u16;
        Ok(Self { minutes })
    }

    /// Creates a time from minutes since midnight.
    pub fn from_minutes(minutes: u32) -> Result<Self, TimeError> {
        match u16::try_from(minutes) {
            Ok(m) if m < MINUTES_PER_DAY => Ok(Self { minutes: m }),
            _ => Err(TimeError::MinutesOutOfRange { minutes }),
        }
    }

    /// Hour in 24-hour form (0-23).
    #[must_use]
    pub const fn hour(self) -> u32 {
        self.minutes as u32 / 60
    }

    #[must_use]
    pub const fn minute(self) -> u32 {
        self.minutes as u32 % 60
    }

    #[must_use]
    pub const fn minutes_since_midnight(self) -> u32 {
        self.minutes as u32
    }

    /// Renders the time in the given clock style.
    pub fn display(self, style: ClockStyle) -> String {
        match style {
            ClockStyle::TwentyFourHour => self.to_string(),
            ClockStyle::TwelveHour => {
                let period = if self.hour() >= 12 { "PM" } else { "AM" };
                let hour = match self.hour() % 12 {
                    0 => 12,
                    h => h,
                };
                format!("{hour}:{:02} {period}", self.minute())
            }
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    /// Parses a strict 24-hour `HH:MM` (or `H:MM`) string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeError::Malformed {
            input: s.to_string(),
        };

        let (hour, minute) = s.trim().split_once(':').ok_or_else(malformed)?;
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(malformed());
        }
        if !digits(hour) || !digits(minute) {
            return Err(malformed());
        }
        let hour: u32 = hour.parse().map_err(|_| malformed())?;
        let minute: u32 = minute.parse().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Seconds and sub-second precision are dropped.
    fn from(time: NaiveTime) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "hour * 60 + minute < 1440"
        )]
        let minutes = (time.hour() * 60 + time.minute()) as u16;
        Self { minutes }
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}
