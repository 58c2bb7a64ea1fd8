use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sleep_cli::commands::{calc, report, session, status};
use sleep_cli::{Cli, Commands, Config};

/// Load config from the default locations plus an optional explicit file.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout carries only program output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = load_config(cli.config.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Calc { sleep, wake, json }) => {
            calc::run(&mut out, sleep, wake, *json, &config)?;
        }
        Some(Commands::Report { nights, json }) => {
            report::run(&mut out, nights, *json, &config)?;
        }
        Some(Commands::Status) => {
            status::run(&mut out, &config, cli.config.as_deref())?;
        }
        Some(Commands::Session) | None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            session::run(stdin.lock(), &mut out, &config, prompt)?;
        }
    }

    Ok(())
}
