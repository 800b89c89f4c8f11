//! Paths command: shortest distances from one source vertex

use campusnet_core::error::Result;
use campusnet_core::format::OutputFormat;
use campusnet_core::graph::{Distance, Graph, ShortestPaths, Weight};
use campusnet_core::records;
use serde::Serialize;
use tracing::debug;

use super::dispatch::CommandContext;

/// Execute the paths command
pub fn execute<W: Weight + Serialize>(
    ctx: &CommandContext,
    graph: &Graph<W>,
    source: usize,
) -> Result<()> {
    let result = graph.shortest_paths_from(source)?;

    debug!(elapsed = ?ctx.start.elapsed(), source, "shortest_paths");

    match ctx.format {
        OutputFormat::Human => output_human(ctx, graph, &result),
        OutputFormat::Json => output_json(graph, &result)?,
        OutputFormat::Records => output_records(ctx, graph, &result),
    }
    Ok(())
}

fn distance_text<W: Weight>(ctx: &CommandContext, distance: Distance<W>) -> String {
    match distance {
        Distance::Reachable(d) => d.to_string(),
        Distance::Unreachable => ctx.unreachable.clone(),
    }
}

fn output_human<W: Weight>(ctx: &CommandContext, graph: &Graph<W>, result: &ShortestPaths<W>) {
    if !ctx.quiet {
        println!(
            "Shortest distances from {} ({}):",
            result.source,
            graph.display_label(result.source)
        );
    }
    for (v, distance) in result.iter() {
        println!(
            "  To {} ({}): {}",
            v,
            graph.display_label(v),
            distance_text(ctx, distance)
        );
    }
}

fn output_json<W: Weight + Serialize>(graph: &Graph<W>, result: &ShortestPaths<W>) -> Result<()> {
    let distances: Vec<serde_json::Value> = result
        .iter()
        .map(|(v, distance)| {
            serde_json::json!({
                "vertex": v,
                "label": graph.label(v),
                "distance": distance,
            })
        })
        .collect();

    let output = serde_json::json!({
        "source": result.source,
        "reachable": result.reachable_count(),
        "distances": distances,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records<W: Weight>(ctx: &CommandContext, graph: &Graph<W>, result: &ShortestPaths<W>) {
    println!(
        "{}",
        records::header(
            "paths",
            &[
                ("source", result.source.to_string()),
                ("vertices", result.len().to_string()),
                ("reachable", result.reachable_count().to_string()),
            ],
        )
    );
    for (v, distance) in result.iter() {
        println!(
            "D {} {} {}",
            v,
            records::label_field(graph.label(v)),
            distance_text(ctx, distance)
        );
    }
}
