//! Layout command: minimum spanning forest for utility cabling

use campusnet_core::error::Result;
use campusnet_core::format::OutputFormat;
use campusnet_core::graph::{Graph, SpanningForest, Weight};
use campusnet_core::records;
use serde::Serialize;
use tracing::debug;

use super::dispatch::CommandContext;

/// Execute the layout command
pub fn execute<W: Weight + Serialize>(ctx: &CommandContext, graph: &Graph<W>) -> Result<()> {
    let forest = graph.minimum_spanning_forest();

    debug!(
        elapsed = ?ctx.start.elapsed(),
        accepted = forest.edges.len(),
        "spanning_forest"
    );

    match ctx.format {
        OutputFormat::Human => output_human(ctx, graph, &forest),
        OutputFormat::Json => output_json(graph, &forest)?,
        OutputFormat::Records => output_records(&forest),
    }
    Ok(())
}

fn output_human<W: Weight>(ctx: &CommandContext, graph: &Graph<W>, forest: &SpanningForest<W>) {
    if !ctx.quiet {
        if forest.spans_all() {
            println!("Spanning tree edges:");
        } else {
            println!(
                "Spanning forest edges ({} components, graph is disconnected):",
                forest.component_count()
            );
        }
    }
    for edge in &forest.edges {
        println!(
            "  {} ({}) - {} ({}), cost={}",
            edge.u,
            graph.display_label(edge.u),
            edge.v,
            graph.display_label(edge.v),
            edge.weight
        );
    }
    println!("Total weight: {}", forest.total_weight);
}

fn output_json<W: Weight + Serialize>(graph: &Graph<W>, forest: &SpanningForest<W>) -> Result<()> {
    let edges: Vec<serde_json::Value> = forest
        .edges
        .iter()
        .map(|edge| {
            serde_json::json!({
                "u": edge.u,
                "v": edge.v,
                "u_label": graph.label(edge.u),
                "v_label": graph.label(edge.v),
                "weight": edge.weight,
            })
        })
        .collect();

    let output = serde_json::json!({
        "total_weight": forest.total_weight,
        "components": forest.component_count(),
        "spanning_tree": forest.spans_all(),
        "edges": edges,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records<W: Weight>(forest: &SpanningForest<W>) {
    println!(
        "{}",
        records::header(
            "layout",
            &[
                ("components", forest.component_count().to_string()),
                ("edges", forest.edges.len().to_string()),
                ("total", forest.total_weight.to_string()),
            ],
        )
    );
    for edge in &forest.edges {
        println!("E {} {} {}", edge.u, edge.v, edge.weight);
    }
}
