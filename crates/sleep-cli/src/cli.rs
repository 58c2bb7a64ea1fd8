//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sleep cycle tracker.
///
/// Record when you fell asleep and woke up, and see your average sleep with
/// a short assessment. Nothing is saved when the session ends.
#[derive(Debug, Parser)]
#[command(name = "sleeplog", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start an interactive logging session (the default).
    Session,

    /// Compute the sleep duration for one pair of times.
    Calc {
        /// When sleep started (e.g. 23:00, 11pm, 11:30 PM, now).
        sleep: String,

        /// When you woke up.
        wake: String,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Log several nights at once and print the report.
    Report {
        /// Nights as SLEEP-WAKE pairs, in order (e.g. 23:00-07:00 11pm-6:30am).
        #[arg(required = true, value_name = "SLEEP-WAKE")]
        nights: Vec<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration.
    Status,
}
