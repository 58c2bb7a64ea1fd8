//! The sleep log component: pending time inputs plus the entry log.

use std::fmt;

use thiserror::Error;

use crate::duration::EqualTimes;
use crate::entry::{EntryLog, SleepEntry};
use crate::insight::{Insight, Thresholds};
use crate::time::TimeOfDay;

/// The add action was attempted before both times were set.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{missing} not set")]
pub struct IncompleteEntry {
    pub missing: MissingTimes,
}

/// Which inputs were unset when confirmation was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingTimes {
    Start,
    End,
    Both,
}

impl fmt::Display for MissingTimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Start => "sleep time",
            Self::End => "wake time",
            Self::Both => "sleep and wake times",
        };
        write!(f, "{s}")
    }
}

/// One session's worth of sleep tracking.
///
/// Holds the two optional time inputs and the append-only log. Nothing here
/// outlives the value itself.
#[derive(Debug, Clone, Default)]
pub struct SleepLog {
    start: Option<TimeOfDay>,
    end: Option<TimeOfDay>,
    entries: EntryLog,
    equal_times: EqualTimes,
}

impl SleepLog {
    pub fn new(equal_times: EqualTimes) -> Self {
        Self {
            equal_times,
            ..Self::default()
        }
    }

    pub const fn start(&self) -> Option<TimeOfDay> {
        self.start
    }

    pub const fn end(&self) -> Option<TimeOfDay> {
        self.end
    }

    pub const fn set_start(&mut self, time: TimeOfDay) {
        self.start = Some(time);
    }

    pub const fn set_end(&mut self, time: TimeOfDay) {
        self.end = Some(time);
    }

    /// Resets both inputs to unset.
    pub const fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Whether the add action is enabled.
    pub const fn can_confirm(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Computes an entry from the inputs, appends it, and clears the inputs.
    ///
    /// Fails without changing anything when either input is unset.
    pub fn confirm(&mut self) -> Result<SleepEntry, IncompleteEntry> {
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            (None, Some(_)) => {
                return Err(IncompleteEntry {
                    missing: MissingTimes::Start,
                });
            }
            (Some(_), None) => {
                return Err(IncompleteEntry {
                    missing: MissingTimes::End,
                });
            }
            (None, None) => {
                return Err(IncompleteEntry {
                    missing: MissingTimes::Both,
                });
            }
        };

        let entry = SleepEntry::new(start, end, self.equal_times);
        self.entries.push(entry);
        self.clear();

        tracing::debug!(
            %start,
            %end,
            hours = entry.hours,
            count = self.entries.len(),
            "sleep entry added"
        );
        Ok(entry)
    }

    pub const fn entries(&self) -> &EntryLog {
        &self.entries
    }

    /// Current average and category, recomputed from the whole log.
    pub fn insight(&self, thresholds: &Thresholds) -> Insight {
        Insight::from_log(&self.entries, thresholds)
    }
}

#[cfg(test)]
#[expect(
    clippy::float_cmp,
    reason = "exact equality intended for whole-hour durations"
)]
mod tests {
    use super::*;

    use crate::insight::Category;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn gate_requires_both_times() {
        let mut log = SleepLog::default();
        assert!(!log.can_confirm());
        log.set_start(t("23:00"));
        assert!(!log.can_confirm());
        log.set_end(t("07:00"));
        assert!(log.can_confirm());
    }

    #[test]
    fn confirm_appends_one_entry_and_resets_inputs() {
        let mut log = SleepLog::default();
        log.set_start(t("23:00"));
        log.set_end(t("07:00"));

        let entry = log.confirm().unwrap();

        assert_eq!(entry.hours, 8.0);
        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.start(), None);
        assert_eq!(log.end(), None);
        assert!(!log.can_confirm());
    }

    #[test]
    fn confirm_without_inputs_changes_nothing() {
        let mut log = SleepLog::default();
        assert_eq!(
            log.confirm(),
            Err(IncompleteEntry {
                missing: MissingTimes::Both
            })
        );

        log.set_start(t("22:00"));
        assert_eq!(
            log.confirm().unwrap_err().missing,
            MissingTimes::End
        );
        assert_eq!(log.start(), Some(t("22:00")));
        assert!(log.entries().is_empty());

        let mut log = SleepLog::default();
        log.set_end(t("06:00"));
        assert_eq!(log.confirm().unwrap_err().to_string(), "sleep time not set");
        assert_eq!(log.end(), Some(t("06:00")));
    }

    #[test]
    fn inputs_are_independent_and_overwritable() {
        let mut log = SleepLog::default();
        log.set_end(t("06:00"));
        log.set_start(t("22:00"));
        log.set_start(t("23:30"));
        assert_eq!(log.start(), Some(t("23:30")));
        assert_eq!(log.end(), Some(t("06:00")));

        log.clear();
        assert_eq!(log.start(), None);
        assert_eq!(log.end(), None);
    }

    #[test]
    fn overnight_scenario_is_healthy() {
        let mut log = SleepLog::default();
        log.set_start(t("23:00"));
        log.set_end(t("07:00"));
        log.confirm().unwrap();

        assert_eq!(log.entries().hours().collect::<Vec<_>>(), vec![8.0]);
        let insight = log.insight(&Thresholds::default());
        assert_eq!(insight.average, 8.0);
        assert_eq!(insight.category, Category::Healthy);
    }

    #[test]
    fn three_entries_scenario_is_fair() {
        let mut log = SleepLog::default();
        for (start, end) in [("02:00", "06:00"), ("01:00", "06:00"), ("00:00", "06:00")] {
            log.set_start(t(start));
            log.set_end(t(end));
            log.confirm().unwrap();
        }

        assert_eq!(
            log.entries().hours().collect::<Vec<_>>(),
            vec![4.0, 5.0, 6.0]
        );
        let insight = log.insight(&Thresholds::default());
        assert_eq!(insight.average, 5.0);
        assert_eq!(insight.category, Category::Fair);
    }

    #[test]
    fn equal_times_policy_is_applied_on_confirm() {
        let mut full_day = SleepLog::new(EqualTimes::FullDay);
        full_day.set_start(t("07:00"));
        full_day.set_end(t("07:00"));
        assert_eq!(full_day.confirm().unwrap().hours, 24.0);

        let mut zero = SleepLog::new(EqualTimes::Zero);
        zero.set_start(t("07:00"));
        zero.set_end(t("07:00"));
        assert_eq!(zero.confirm().unwrap().hours, 0.0);
    }
}
