//! Report rendering for the sleep log.
//!
//! This module formats the log in human-readable and JSON forms. It is used by
//! `sleeplog report` and by the interactive session after every change.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use sleep_core::{
    Category, ClockStyle, EntryLog, EqualTimes, Insight, SleepEntry, SleepLog, Thresholds,
    TimeOfDay,
};

use super::util::parse_night;
use crate::Config;

// ========== Duration Formatting ==========

/// Formats a duration as shown next to each entry ("8.0 hrs").
///
/// Ties round away from zero, so a quarter hour past six shows as 6.3.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1} hrs", (hours * 10.0).round() / 10.0)
}

/// Formats the average ("7.00 hrs"). Ties round away from zero.
pub fn format_average(hours: f64) -> String {
    format!("{:.2} hrs", (hours * 100.0).round() / 100.0)
}

/// Formats one entry's times ("11:00 PM -> 7:00 AM").
pub fn format_span(entry: &SleepEntry, clock: ClockStyle) -> String {
    format!(
        "{} -> {}",
        entry.start.display(clock),
        entry.end.display(clock)
    )
}

// ========== Human Output ==========

/// Formats the human-readable report for a log.
pub fn format_report(log: &EntryLog, thresholds: &Thresholds, clock: ClockStyle) -> String {
    let mut output = String::new();

    writeln!(output, "SLEEP LOG").unwrap();
    writeln!(output, "─────────").unwrap();

    if log.is_empty() {
        writeln!(output, "No sleep entries yet.").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "Hint: set a sleep time and a wake time, then add the entry."
        )
        .unwrap();
        return output;
    }

    let insight = Insight::from_log(log, thresholds);
    writeln!(
        output,
        "Average sleep:  {}",
        format_average(insight.average)
    )
    .unwrap();
    writeln!(
        output,
        "{} {}",
        insight.category.symbol(),
        insight.category.message(thresholds)
    )
    .unwrap();

    writeln!(output).unwrap();
    writeln!(output, "ENTRIES").unwrap();
    writeln!(output, "───────").unwrap();

    let spans: Vec<String> = log.into_iter().map(|e| format_span(e, clock)).collect();
    let width = spans.iter().map(String::len).max().unwrap_or(0);
    for (index, (entry, span)) in log.into_iter().zip(&spans).enumerate() {
        writeln!(
            output,
            "{:>3}. {span:<width$}  {:>8}",
            index + 1,
            format_hours(entry.hours)
        )
        .unwrap();
    }

    output
}

/// Formats the pending inputs of a session ("Sleep time: 11:00 PM").
pub fn format_pending(log: &SleepLog, clock: ClockStyle) -> String {
    let show = |time: Option<TimeOfDay>| {
        time.map_or_else(|| "(not set)".to_string(), |t| t.display(clock))
    };

    let mut output = String::new();
    writeln!(output, "Sleep time: {}", show(log.start())).unwrap();
    writeln!(output, "Wake time:  {}", show(log.end())).unwrap();
    if !log.can_confirm() {
        writeln!(output, "(set both times to add an entry)").unwrap();
    }
    output
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub entries: &'a [SleepEntry],
    pub average_hours: f64,
    pub category: Category,
    pub message: String,
}

/// Formats the report as JSON.
pub fn format_report_json(log: &EntryLog, thresholds: &Thresholds) -> Result<String> {
    let insight = Insight::from_log(log, thresholds);
    let report = JsonReport {
        entries: log.entries(),
        average_hours: insight.average,
        category: insight.category,
        message: insight.category.message(thresholds),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

// ========== Public Interface ==========

/// Builds a fresh log from `SLEEP-WAKE` pairs, confirming each in order.
pub fn build_log(nights: &[String], equal_times: EqualTimes) -> Result<SleepLog> {
    let mut log = SleepLog::new(equal_times);
    for night in nights {
        let (start, end) = parse_night(night)?;
        log.set_start(start);
        log.set_end(end);
        log.confirm()?;
    }
    Ok(log)
}

/// Runs the report command.
pub fn run<W: Write>(writer: &mut W, nights: &[String], json: bool, config: &Config) -> Result<()> {
    let thresholds = config
        .thresholds()
        .context("invalid sleep thresholds in configuration")?;
    let log = build_log(nights, config.equal_times)?;

    if json {
        writeln!(writer, "{}", format_report_json(log.entries(), &thresholds)?)?;
    } else {
        write!(writer, "{}", format_report(log.entries(), &thresholds, config.clock))?;
    }

    Ok(())
}
