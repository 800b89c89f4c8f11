//! Show command: adjacency listing of the loaded graph

use campusnet_core::error::Result;
use campusnet_core::format::OutputFormat;
use campusnet_core::graph::{Graph, Weight};
use campusnet_core::records;
use serde::Serialize;

use super::dispatch::CommandContext;

/// Execute the show command
pub fn execute<W: Weight + Serialize>(ctx: &CommandContext, graph: &Graph<W>) -> Result<()> {
    match ctx.format {
        OutputFormat::Human => output_human(ctx, graph),
        OutputFormat::Json => output_json(graph)?,
        OutputFormat::Records => output_records(graph),
    }
    Ok(())
}

fn output_human<W: Weight>(ctx: &CommandContext, graph: &Graph<W>) {
    if !ctx.quiet {
        println!(
            "Campus graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
    }

    for u in 0..graph.vertex_count() {
        let mut line = format!("Vertex {} ({}) ->", u, graph.display_label(u));
        for n in graph.neighbors(u).into_iter().flatten() {
            line.push_str(&format!(" [{} (w={})]", n.vertex, n.weight));
        }
        println!("{}", line);
    }
}

fn output_json<W: Weight + Serialize>(graph: &Graph<W>) -> Result<()> {
    let vertices: Vec<serde_json::Value> = (0..graph.vertex_count())
        .map(|u| {
            serde_json::json!({
                "index": u,
                "label": graph.label(u),
                "neighbors": graph.neighbors(u).unwrap_or_default(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "vertex_count": graph.vertex_count(),
        "edge_count": graph.edge_count(),
        "vertices": vertices,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records<W: Weight>(graph: &Graph<W>) {
    println!(
        "{}",
        records::header(
            "graph",
            &[
                ("vertices", graph.vertex_count().to_string()),
                ("edges", graph.edge_count().to_string()),
            ],
        )
    );
    for u in 0..graph.vertex_count() {
        println!("V {} {}", u, records::label_field(graph.label(u)));
    }
    for edge in graph.edges() {
        println!("E {} {} {}", edge.u, edge.v, edge.weight);
    }
}
