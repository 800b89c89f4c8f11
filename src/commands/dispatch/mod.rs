//! Command dispatch logic for campusnet

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use campusnet_core::config::{Config, WeightKind};
use campusnet_core::error::Result;
use campusnet_core::graph::Weight;
use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, Commands};

mod command;
mod report;

pub use command::CommandContext;
pub use report::ErrorStyle;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match ctx.weights {
        WeightKind::Integer => run_with::<i64>(&cli.command, &ctx),
        WeightKind::Real => run_with::<f64>(&cli.command, &ctx),
    }
}

fn run_with<W>(command: &Commands, ctx: &CommandContext) -> Result<()>
where
    W: Weight + FromStr + Serialize,
    W::Err: Display,
{
    let graph = super::load::read_graph::<W>(graph_file(command))?;

    debug!(
        elapsed = ?ctx.start.elapsed(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "load_graph"
    );

    match command {
        Commands::Show { .. } => super::show::execute(ctx, &graph),
        Commands::Paths { from, .. } => super::paths::execute(ctx, &graph, *from),
        Commands::Layout { .. } => super::layout::execute(ctx, &graph),
    }
}

fn graph_file(command: &Commands) -> &Path {
    match command {
        Commands::Show { file } | Commands::Paths { file, .. } | Commands::Layout { file } => {
            file.as_path()
        }
    }
}
