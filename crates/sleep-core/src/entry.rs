//! Confirmed sleep entries and the session's log of them.

use serde::{Deserialize, Serialize};

use crate::duration::{EqualTimes, sleep_hours};
use crate::time::TimeOfDay;

/// One confirmed night of sleep.
///
/// The originating times are kept alongside the duration. The duration is
/// fixed when the entry is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepEntry {
    /// When sleep started.
    pub start: TimeOfDay,
    /// When the sleeper woke.
    pub end: TimeOfDay,
    /// Elapsed hours, unrounded.
    pub hours: f64,
}

impl SleepEntry {
    /// Creates an entry, computing its duration with overnight wraparound.
    pub fn new(start: TimeOfDay, end: TimeOfDay, equal_times: EqualTimes) -> Self {
        Self {
            start,
            end,
            hours: sleep_hours(start, end, equal_times),
        }
    }
}

/// Insertion-ordered, append-only list of entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryLog {
    entries: Vec<SleepEntry>,
}

impl EntryLog {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry. Always succeeds.
    pub fn push(&mut self, entry: SleepEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[SleepEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Durations in insertion order.
    pub fn hours(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.hours)
    }

    /// Arithmetic mean of all durations, or 0 for an empty log.
    #[expect(
        clippy::cast_precision_loss,
        reason = "entry counts are far below 2^52"
    )]
    pub fn average_hours(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.hours().sum::<f64>() / self.entries.len() as f64
    }
}

impl<'a> IntoIterator for &'a EntryLog {
    type Item = &'a SleepEntry;
    type IntoIter = std::slice::Iter<'a, SleepEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[expect(
    clippy::float_cmp,
    reason = "exact equality intended for whole-hour averages"
)]
mod tests {
    use super::*;

    fn entry(start: &str, end: &str) -> SleepEntry {
        SleepEntry::new(
            start.parse().unwrap(),
            end.parse().unwrap(),
            EqualTimes::FullDay,
        )
    }

    #[test]
    fn entry_keeps_originating_times() {
        let e = entry("23:00", "07:00");
        assert_eq!(e.start.to_string(), "23:00");
        assert_eq!(e.end.to_string(), "07:00");
        assert_eq!(e.hours, 8.0);
    }

    #[test]
    fn empty_log_average_is_zero() {
        let log = EntryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.average_hours(), 0.0);
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut log = EntryLog::new();
        log.push(entry("22:00", "04:00"));
        log.push(entry("23:00", "07:00"));
        log.push(entry("00:00", "05:00"));

        assert_eq!(log.len(), 3);
        assert_eq!(log.hours().collect::<Vec<_>>(), vec![6.0, 8.0, 5.0]);
        assert_eq!(log.entries().last().unwrap().hours, 5.0);
    }

    #[test]
    fn push_accepts_duplicates() {
        let mut log = EntryLog::new();
        log.push(entry("23:00", "07:00"));
        log.push(entry("23:00", "07:00"));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn average_of_eight_and_six_is_seven() {
        let mut log = EntryLog::new();
        log.push(entry("23:00", "07:00"));
        log.push(entry("00:00", "06:00"));
        assert_eq!(log.average_hours(), 7.0);
    }

    #[test]
    fn entry_serializes_times_as_strings() {
        let json = serde_json::to_string(&entry("23:00", "07:30")).unwrap();
        assert_eq!(json, r#"{"start":"23:00","end":"07:30","hours":8.5}"#);
    }
}
