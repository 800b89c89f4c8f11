//! CLI argument parsing for campusnet
//!
//! Global flags: --format, --weights, --config, --quiet, --verbose,
//! --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

use campusnet_core::config::WeightKind;
use campusnet_core::error::CampusError;
use campusnet_core::format::OutputFormat;
use parse::{args_request_json, clap_to_campus_error, parse_output_format};

/// Campusnet - campus navigation and utility layout planner
#[derive(Parser, Debug)]
#[command(name = "campusnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records (default from config, else human)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Edge weight type used when reading the graph
    #[arg(long, global = true, value_enum)]
    pub weights: Option<WeightArg>,

    /// Configuration file (defaults to ~/.config/campusnet/config.toml)
    #[arg(long, global = true, env = "CAMPUSNET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs, including timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, campusnet_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse `args` (program name first).
    ///
    /// When `--format json` is on the command line, argument errors come back
    /// as a `CampusError` for the JSON envelope. Otherwise clap prints its own
    /// message and exits, as it does for `--help` and `--version`.
    pub fn parse_args(args: Vec<OsString>) -> Result<Self, CampusError> {
        let wants_json = args_request_json(args.iter().skip(1));
        Self::try_parse_from(args).map_err(|err| match clap_to_campus_error(&err) {
            Some(e) if wants_json => e,
            _ => err.exit(),
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the campus graph as adjacency lists
    Show {
        /// Graph input file (`-` for stdin)
        file: PathBuf,
    },

    /// Shortest distances from one building to every other
    Paths {
        /// Graph input file (`-` for stdin)
        file: PathBuf,

        /// Source vertex index
        #[arg(long, short)]
        from: usize,
    },

    /// Cheapest set of paths connecting every building (spanning forest)
    Layout {
        /// Graph input file (`-` for stdin)
        file: PathBuf,
    },
}

/// Weight type selector for the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeightArg {
    Integer,
    Real,
}

impl From<WeightArg> for WeightKind {
    fn from(arg: WeightArg) -> Self {
        match arg {
            WeightArg::Integer => WeightKind::Integer,
            WeightArg::Real => WeightKind::Real,
        }
    }
}
