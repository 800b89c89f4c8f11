//! Campusnet - campus navigation and utility layout planner
//!
//! Reads a weighted campus graph and answers two questions about it:
//! the shortest distance from one building to every other, and the
//! cheapest set of paths connecting all buildings.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use campusnet_core::logging;
use cli::Cli;
use commands::dispatch::{self, ErrorStyle};

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::parse_args(std::env::args_os().collect()) {
        Ok(cli) => cli,
        Err(e) => return ErrorStyle::Json.report(&e),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {e}");
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    ErrorStyle::for_cli(&cli).finish(dispatch::run(&cli, start))
}
