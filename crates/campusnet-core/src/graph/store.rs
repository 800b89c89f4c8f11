use crate::error::{CampusError, Result};
use crate::graph::algos::{dijkstra, kruskal};
use crate::graph::types::{Neighbor, ShortestPaths, SpanningForest, Weight, WeightedEdge};
use std::cmp::Ordering;
use tracing::debug;

/// Weighted, undirected graph stored as adjacency lists.
///
/// Vertices are the indices `[0, V)`. Adjacency is always mirrored: adding
/// `(u, v, w)` appends `(v, w)` to `u`'s list and `(u, w)` to `v`'s list.
///
/// Mutators (`set_label`, `add_edge`) ignore out-of-range indices so a batch
/// of records is never aborted halfway; queries (`neighbors`,
/// `shortest_paths_from`) report [`CampusError::OutOfRange`] instead.
#[derive(Debug, Clone)]
pub struct Graph<W = i64> {
    adjacency: Vec<Vec<Neighbor<W>>>,
    labels: Vec<Option<String>>,
    edge_count: usize,
}

impl<W> Default for Graph<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> {
    /// Empty graph with no vertices
    pub fn new() -> Self {
        Self {
            adjacency: Vec::new(),
            labels: Vec::new(),
            edge_count: 0,
        }
    }

    /// Graph of `vertex_count` isolated, unlabeled vertices
    pub fn with_vertices(vertex_count: usize) -> Self {
        let mut graph = Self::new();
        graph.reset(vertex_count);
        graph
    }

    /// Discard all edges and labels and start over with `vertex_count`
    /// isolated vertices.
    pub fn reset(&mut self, vertex_count: usize) {
        self.adjacency.clear();
        self.adjacency.resize_with(vertex_count, Vec::new);
        self.labels.clear();
        self.labels.resize(vertex_count, None);
        self.edge_count = 0;
    }

    /// Like [`Graph::reset`], for a count that has not been validated yet.
    pub fn try_reset(&mut self, vertex_count: i64) -> Result<()> {
        let count = usize::try_from(vertex_count)
            .map_err(|_| CampusError::InvalidSize { size: vertex_count })?;
        self.reset(count);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges inserted, parallel edges included
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.adjacency.len()
    }

    /// Fail with `OutOfRange` unless `index` names a vertex
    pub fn check_vertex(&self, index: usize) -> Result<()> {
        if self.contains(index) {
            Ok(())
        } else {
            Err(CampusError::out_of_range(index, self.vertex_count()))
        }
    }

    /// Attach a display label to a vertex. Out-of-range indices are ignored.
    pub fn set_label(&mut self, index: usize, text: impl Into<String>) {
        match self.labels.get_mut(index) {
            Some(slot) => *slot = Some(text.into()),
            None => debug!(index, vertices = self.adjacency.len(), "ignoring label"),
        }
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).and_then(|l| l.as_deref())
    }

    /// Label if one was set, otherwise the vertex index
    pub fn display_label(&self, index: usize) -> String {
        self.label(index)
            .map(str::to_string)
            .unwrap_or_else(|| index.to_string())
    }

    /// Adjacency list of `u` in insertion order
    pub fn neighbors(&self, u: usize) -> Result<&[Neighbor<W>]> {
        self.adjacency
            .get(u)
            .map(Vec::as_slice)
            .ok_or_else(|| CampusError::out_of_range(u, self.vertex_count()))
    }
}

impl<W: Weight> Graph<W> {
    /// Insert the undirected edge `(u, v)`. Ignored if either endpoint is out
    /// of range. Weight sign is not checked here.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) {
        if !self.contains(u) || !self.contains(v) {
            debug!(u, v, vertices = self.adjacency.len(), "ignoring edge");
            return;
        }

        self.adjacency[u].push(Neighbor { vertex: v, weight });
        self.adjacency[v].push(Neighbor { vertex: u, weight });
        self.edge_count += 1;
    }

    /// Every undirected edge once, taken from the lower endpoint's list.
    ///
    /// Parallel edges are all yielded; self-loops are not, since they can
    /// never join two components.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge<W>> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, list)| {
            list.iter()
                .filter(move |n| u < n.vertex)
                .map(move |n| WeightedEdge::new(u, n.vertex, n.weight))
        })
    }

    /// First edge whose weight is below zero, self-loops included
    pub fn first_negative_edge(&self) -> Option<WeightedEdge<W>> {
        self.adjacency.iter().enumerate().find_map(|(u, list)| {
            list.iter()
                .find(|n| u <= n.vertex && n.weight.weight_cmp(&W::ZERO) == Ordering::Less)
                .map(|n| WeightedEdge::new(u, n.vertex, n.weight))
        })
    }

    /// Fail with `NegativeWeight` if any edge weighs less than zero.
    ///
    /// Shortest paths are only bounded for non-negative weights; callers
    /// feeding untrusted input should check before querying.
    pub fn ensure_non_negative(&self) -> Result<()> {
        match self.first_negative_edge() {
            Some(edge) => Err(CampusError::NegativeWeight {
                u: edge.u,
                v: edge.v,
                weight: edge.weight.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Shortest distances from `source` to every vertex
    pub fn shortest_paths_from(&self, source: usize) -> Result<ShortestPaths<W>> {
        dijkstra::shortest_paths_from(self, source)
    }

    /// Minimum spanning forest (a single tree when the graph is connected)
    pub fn minimum_spanning_forest(&self) -> SpanningForest<W> {
        kruskal::minimum_spanning_forest(self)
    }
}
