//! Core domain logic for the sleep log.
//!
//! This crate contains the fundamental types and logic for:
//! - Time of day: wall-clock times without a date
//! - Duration: elapsed sleep with overnight wraparound
//! - Entries: the append-only log of confirmed nights
//! - Insight: the running average and its qualitative category

pub mod duration;
pub mod entry;
pub mod insight;
mod sleep_log;
pub mod time;

pub use duration::{EqualTimes, sleep_hours, sleep_minutes};
pub use entry::{EntryLog, SleepEntry};
pub use insight::{Category, Insight, ThresholdError, Thresholds};
pub use sleep_log::{IncompleteEntry, MissingTimes, SleepLog};
pub use time::{ClockStyle, TimeError, TimeOfDay};
