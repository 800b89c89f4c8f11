//! Command context shared by every subcommand

use std::time::Instant;

use campusnet_core::config::{Config, WeightKind};
use campusnet_core::format::OutputFormat;

use crate::cli::Cli;

/// Shared context for command execution
///
/// CLI flags take precedence over the configuration file.
pub struct CommandContext {
    pub format: OutputFormat,
    pub weights: WeightKind,
    pub quiet: bool,
    pub unreachable: String,
    pub start: Instant,
}

impl CommandContext {
    pub fn new(cli: &Cli, config: Config, start: Instant) -> Self {
        Self {
            format: cli.format.unwrap_or(config.output.format),
            weights: cli.weights.map(WeightKind::from).unwrap_or(config.weights),
            quiet: cli.quiet,
            unreachable: config.output.unreachable,
            start,
        }
    }
}
