//! Average sleep and the qualitative message derived from it.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::EntryLog;

/// Default lower bound, in hours, for a healthy average.
pub const DEFAULT_HEALTHY_HOURS: f64 = 7.0;

/// Default lower bound, in hours, for a fair average.
pub const DEFAULT_FAIR_HOURS: f64 = 5.0;

/// Invalid classification thresholds.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThresholdError {
    #[error("{field} must be a finite, non-negative number of hours, got {value}")]
    Invalid { field: &'static str, value: f64 },

    #[error("fair threshold ({fair}h) must not exceed healthy threshold ({healthy}h)")]
    Inverted { healthy: f64, fair: f64 },
}

/// Lower bounds for each category. `fair <= healthy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    healthy: f64,
    fair: f64,
}

impl Thresholds {
    pub fn new(healthy: f64, fair: f64) -> Result<Self, ThresholdError> {
        for (field, value) in [("healthy_hours", healthy), ("fair_hours", fair)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ThresholdError::Invalid { field, value });
            }
        }
        if fair > healthy {
            return Err(ThresholdError::Inverted { healthy, fair });
        }
        Ok(Self { healthy, fair })
    }

    pub const fn healthy(&self) -> f64 {
        self.healthy
    }

    pub const fn fair(&self) -> f64 {
        self.fair
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            healthy: DEFAULT_HEALTHY_HOURS,
            fair: DEFAULT_FAIR_HOURS,
        }
    }
}

/// Qualitative bucket for an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Healthy,
    Fair,
    Poor,
}

impl Category {
    /// Classifies an average. Tiers are checked from the top, lower bounds inclusive.
    pub fn classify(average: f64, thresholds: &Thresholds) -> Self {
        if average >= thresholds.healthy() {
            Self::Healthy
        } else if average >= thresholds.fair() {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Healthy => "✅",
            Self::Fair => "⚠️",
            Self::Poor => "❌",
        }
    }

    /// Message shown to the user. The fair message names the healthy target.
    pub fn message(&self, thresholds: &Thresholds) -> String {
        match self {
            Self::Healthy => "Great job! Your sleep cycle is healthy.".to_string(),
            Self::Fair => format!(
                "Getting there! Try aiming for {}+ hours.",
                thresholds.healthy()
            ),
            Self::Poor => "Poor sleep cycle. Consider reducing screen time, avoiding caffeine, and maintaining consistency.".to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Average and category for a log at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insight {
    /// Mean hours, rounded to 2 decimal places.
    pub average: f64,
    pub category: Category,
}

impl Insight {
    /// Derives the insight from the current log contents.
    ///
    /// The category is decided on the rounded average so that it always
    /// agrees with the number shown to the user.
    pub fn from_log(log: &EntryLog, thresholds: &Thresholds) -> Self {
        let average = round_hundredths(log.average_hours());
        Self {
            average,
            category: Category::classify(average, thresholds),
        }
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[expect(
    clippy::float_cmp,
    reason = "exact equality intended for boundary tests"
)]
mod tests {
    use super::*;

    use crate::duration::EqualTimes;
    use crate::entry::SleepEntry;
    use crate::time::TimeOfDay;

    fn log_of(durations_in_minutes: &[u32]) -> EntryLog {
        let mut log = EntryLog::new();
        for &minutes in durations_in_minutes {
            let end = TimeOfDay::from_minutes(minutes).unwrap();
            log.push(SleepEntry::new(TimeOfDay::MIDNIGHT, end, EqualTimes::FullDay));
        }
        log
    }

    #[test]
    fn classify_boundaries() {
        let t = Thresholds::default();
        assert_eq!(Category::classify(7.0, &t), Category::Healthy);
        assert_eq!(Category::classify(6.99, &t), Category::Fair);
        assert_eq!(Category::classify(5.0, &t), Category::Fair);
        assert_eq!(Category::classify(4.99, &t), Category::Poor);
        assert_eq!(Category::classify(0.0, &t), Category::Poor);
        assert_eq!(Category::classify(24.0, &t), Category::Healthy);
    }

    #[test]
    fn empty_log_is_zero_and_poor() {
        let insight = Insight::from_log(&EntryLog::new(), &Thresholds::default());
        assert_eq!(insight.average, 0.0);
        assert_eq!(insight.category, Category::Poor);
    }

    #[test]
    fn eight_and_six_average_to_healthy_seven() {
        let insight = Insight::from_log(&log_of(&[480, 360]), &Thresholds::default());
        assert_eq!(insight.average, 7.0);
        assert_eq!(insight.category, Category::Healthy);
    }

    #[test]
    fn four_five_six_average_to_fair_five() {
        let insight = Insight::from_log(&log_of(&[240, 300, 360]), &Thresholds::default());
        assert_eq!(insight.average, 5.0);
        assert_eq!(insight.category, Category::Fair);
    }

    #[test]
    fn category_follows_rounded_average() {
        // 7h and 6h59m average to 6.991..., which rounds to 6.99.
        let insight = Insight::from_log(&log_of(&[420, 419]), &Thresholds::default());
        assert_eq!(insight.average, 6.99);
        assert_eq!(insight.category, Category::Fair);

        // A mean just under the threshold that displays as 7.00 is healthy.
        assert_eq!(round_hundredths(6.996), 7.0);
        assert_eq!(
            Category::classify(round_hundredths(6.996), &Thresholds::default()),
            Category::Healthy
        );
    }

    #[test]
    fn insight_is_idempotent() {
        let log = log_of(&[480, 300, 415]);
        let t = Thresholds::default();
        assert_eq!(Insight::from_log(&log, &t), Insight::from_log(&log, &t));
    }

    #[test]
    fn custom_thresholds() {
        let t = Thresholds::new(8.0, 6.0).unwrap();
        assert_eq!((t.healthy(), t.fair()), (8.0, 6.0));
        assert_eq!(Category::classify(7.5, &t), Category::Fair);
        assert_eq!(Category::classify(5.5, &t), Category::Poor);
        assert_eq!(Category::Fair.message(&t), "Getting there! Try aiming for 8+ hours.");
    }

    #[test]
    fn thresholds_reject_bad_values() {
        assert!(matches!(
            Thresholds::new(5.0, 7.0),
            Err(ThresholdError::Inverted { .. })
        ));
        assert!(matches!(
            Thresholds::new(f64::NAN, 5.0),
            Err(ThresholdError::Invalid { field: "healthy_hours", .. })
        ));
        assert!(matches!(
            Thresholds::new(7.0, -1.0),
            Err(ThresholdError::Invalid { field: "fair_hours", .. })
        ));
        assert!(Thresholds::new(6.0, 6.0).is_ok());
    }

    #[test]
    fn default_messages() {
        let t = Thresholds::default();
        assert_eq!(
            Category::Healthy.message(&t),
            "Great job! Your sleep cycle is healthy."
        );
        assert_eq!(
            Category::Fair.message(&t),
            "Getting there! Try aiming for 7+ hours."
        );
        assert!(Category::Poor.message(&t).contains("avoiding caffeine"));
    }

    #[test]
    fn category_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Fair).unwrap(), "\"fair\"");
    }
}
