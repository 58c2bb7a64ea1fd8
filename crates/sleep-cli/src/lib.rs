//! Sleep log CLI library.
//!
//! This crate provides the terminal interface for the sleep log.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
