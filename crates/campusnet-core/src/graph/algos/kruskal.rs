use crate::graph::disjoint_set::DisjointSet;
use crate::graph::types::{SpanningForest, Weight};
use crate::graph::Graph;
use tracing::{debug, trace};

/// Minimum spanning forest of `graph` by Kruskal's algorithm.
///
/// Edges are sorted ascending by weight with a stable sort, so equal weights
/// keep enumeration order. Each edge whose endpoints are still in different
/// components is accepted. A disconnected graph yields one tree per component
/// (`V - components` edges) rather than an error.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn minimum_spanning_forest<W: Weight>(graph: &Graph<W>) -> SpanningForest<W> {
    let mut candidates: Vec<_> = graph.edges().collect();
    candidates.sort_by(|a, b| a.weight.weight_cmp(&b.weight));

    let mut components = DisjointSet::new(graph.vertex_count());
    let mut forest = SpanningForest {
        vertex_count: graph.vertex_count(),
        edges: Vec::with_capacity(graph.vertex_count().saturating_sub(1)),
        total_weight: W::ZERO,
    };

    // `edges()` only yields endpoints below `vertex_count`
    for edge in candidates {
        if components.merge(edge.u, edge.v) {
            trace!(u = edge.u, v = edge.v, weight = %edge.weight, "accepted edge");
            forest.total_weight = forest.total_weight.plus(edge.weight);
            forest.edges.push(edge);
        } else {
            trace!(u = edge.u, v = edge.v, weight = %edge.weight, "rejected edge (cycle)");
        }
    }

    debug!(
        accepted = forest.edges.len(),
        components = components.set_count(),
        total_weight = %forest.total_weight,
        "minimum_spanning_forest"
    );

    forest
}
