//! CLI subcommand implementations.

pub mod calc;
pub mod report;
pub mod session;
pub mod status;
pub mod util;
