//! Elapsed sleep time between two wall-clock times.
//!
//! Both times are placed on the same reference day. When the wake time is not
//! after the sleep time, the wake time is moved to the following day, so a
//! 23:00 to 07:00 night is 8 hours rather than -16.

use serde::{Deserialize, Serialize};

use crate::time::{MINUTES_PER_DAY, TimeOfDay};

/// What an entry whose sleep and wake times are identical means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EqualTimes {
    /// Wraparound applies: a full 24 hours.
    #[default]
    FullDay,
    /// No sleep at all.
    Zero,
}

/// Returns the minutes slept between `start` and `end`.
pub fn sleep_minutes(start: TimeOfDay, end: TimeOfDay, equal_times: EqualTimes) -> u32 {
    let start = start.minutes_since_midnight();
    let mut end = end.minutes_since_midnight();

    if end == start && equal_times == EqualTimes::Zero {
        return 0;
    }
    if end <= start {
        end += u32::from(MINUTES_PER_DAY);
    }
    end - start
}

/// Returns the hours slept between `start` and `end`, fractional and unrounded.
pub fn sleep_hours(start: TimeOfDay, end: TimeOfDay, equal_times: EqualTimes) -> f64 {
    f64::from(sleep_minutes(start, end, equal_times)) / 60.0
}

#[cfg(test)]
#[expect(
    clippy::float_cmp,
    reason = "minute counts divide exactly into the hours under test"
)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn same_day_has_no_wraparound() {
        assert_eq!(sleep_hours(t("01:00"), t("09:00"), EqualTimes::FullDay), 8.0);
        assert_eq!(sleep_hours(t("13:15"), t("14:45"), EqualTimes::FullDay), 1.5);
    }

    #[test]
    fn overnight_wraps_to_next_day() {
        assert_eq!(sleep_hours(t("23:00"), t("07:00"), EqualTimes::FullDay), 8.0);
        assert_eq!(sleep_hours(t("22:30"), t("06:00"), EqualTimes::FullDay), 7.5);
        assert_eq!(sleep_hours(t("00:01"), t("00:00"), EqualTimes::FullDay), 1439.0 / 60.0);
    }

    #[test]
    fn equal_times_full_day() {
        assert_eq!(sleep_hours(t("07:00"), t("07:00"), EqualTimes::FullDay), 24.0);
        assert_eq!(sleep_minutes(t("00:00"), t("00:00"), EqualTimes::FullDay), 1440);
    }

    #[test]
    fn equal_times_zero() {
        assert_eq!(sleep_hours(t("07:00"), t("07:00"), EqualTimes::Zero), 0.0);
        // Only exact equality is affected.
        assert_eq!(sleep_hours(t("23:00"), t("07:00"), EqualTimes::Zero), 8.0);
    }

    #[test]
    fn fractional_hours_are_not_rounded() {
        let hours = sleep_hours(t("23:10"), t("06:50"), EqualTimes::FullDay);
        assert!((hours - 460.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn result_never_exceeds_a_day() {
        for start in (0..1440).step_by(37) {
            for end in (0..1440).step_by(41) {
                let start = TimeOfDay::from_minutes(start).unwrap();
                let end = TimeOfDay::from_minutes(end).unwrap();
                let hours = sleep_hours(start, end, EqualTimes::FullDay);
                assert!(hours > 0.0 && hours <= 24.0, "{start} -> {end} gave {hours}");
            }
        }
    }

    #[test]
    fn equal_times_serde_names() {
        assert_eq!(
            serde_json::to_string(&EqualTimes::FullDay).unwrap(),
            "\"full-day\""
        );
        assert_eq!(
            serde_json::from_str::<EqualTimes>("\"zero\"").unwrap(),
            EqualTimes::Zero
        );
    }
}
