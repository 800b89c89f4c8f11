//! Turning a command outcome into stderr output and a process exit status

use std::process::ExitCode;

use campusnet_core::error::{CampusError, ExitCode as CampusExitCode, Result};
use campusnet_core::format::OutputFormat;

use crate::cli::Cli;

/// How a failed run describes its error on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStyle {
    /// `{"error": {...}}` envelope, for `--format json`
    Json,
    /// `error: <message>`
    Plain,
    /// Nothing, for `--quiet`; the exit status still reports the failure
    Silent,
}

impl ErrorStyle {
    /// JSON output wins over `--quiet` so scripts always get the envelope
    pub fn for_cli(cli: &Cli) -> Self {
        if cli.format == Some(OutputFormat::Json) {
            ErrorStyle::Json
        } else if cli.quiet {
            ErrorStyle::Silent
        } else {
            ErrorStyle::Plain
        }
    }

    fn render(self, err: &CampusError) -> Option<String> {
        match self {
            ErrorStyle::Json => Some(err.to_json().to_string()),
            ErrorStyle::Plain => Some(format!("error: {err}")),
            ErrorStyle::Silent => None,
        }
    }

    /// Print `err` in this style and return its exit status
    pub fn report(self, err: &CampusError) -> ExitCode {
        if let Some(text) = self.render(err) {
            eprintln!("{text}");
        }
        exit_status(err.exit_code())
    }

    pub fn finish(self, outcome: Result<()>) -> ExitCode {
        match outcome {
            Ok(()) => exit_status(CampusExitCode::Success),
            Err(err) => self.report(&err),
        }
    }
}

fn exit_status(code: CampusExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}
