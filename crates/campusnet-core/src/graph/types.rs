use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Edge weight carried by a [`Graph`](crate::graph::Graph).
///
/// One weight type is used per graph. Integers and floats are both supported;
/// the shortest-path engine assumes weights are non-negative.
pub trait Weight: Copy + PartialOrd + fmt::Debug + fmt::Display {
    /// Additive identity, the distance of the source to itself
    const ZERO: Self;

    /// Accumulate two weights (saturating for integers)
    fn plus(self, other: Self) -> Self;

    /// Total order used by the frontier and the edge sort
    fn weight_cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

macro_rules! impl_integer_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                fn plus(self, other: Self) -> Self {
                    self.saturating_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0.0;

                fn plus(self, other: Self) -> Self {
                    self + other
                }

                fn weight_cmp(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )*
    };
}

impl_integer_weight!(i32, i64, u32, u64);
impl_float_weight!(f32, f64);

/// One entry of an adjacency list: the vertex reached and the cost to reach it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor<W> {
    pub vertex: usize,
    pub weight: W,
}

/// An undirected edge, canonicalized so that `u < v` when enumerated
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedEdge<W> {
    pub u: usize,
    pub v: usize,
    pub weight: W,
}

impl<W> WeightedEdge<W> {
    pub fn new(u: usize, v: usize, weight: W) -> Self {
        Self { u, v, weight }
    }
}

/// Shortest known distance to a vertex
///
/// Serializes as the number itself, or `null` when unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Distance<W> {
    Reachable(W),
    Unreachable,
}

impl<W: Copy> Distance<W> {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Reachable(_))
    }

    /// The numeric distance, if any
    pub fn value(&self) -> Option<W> {
        match self {
            Distance::Reachable(w) => Some(*w),
            Distance::Unreachable => None,
        }
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        match value {
            Some(w) => Distance::Reachable(w),
            None => Distance::Unreachable,
        }
    }
}

/// Distances from one source to every vertex of the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths<W> {
    pub source: usize,
    pub distances: Vec<Distance<W>>,
}

impl<W: Copy> ShortestPaths<W> {
    /// Distance to `vertex`, or `None` if the index is not part of the graph
    pub fn distance(&self, vertex: usize) -> Option<Distance<W>> {
        self.distances.get(vertex).copied()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_reachable()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Distance<W>)> + '_ {
        self.distances.iter().copied().enumerate()
    }
}

/// Minimum spanning forest: one tree per connected component.
///
/// `edges` are kept in the order they were accepted (ascending weight). A
/// disconnected graph is not an error; it simply yields fewer than `V - 1`
/// edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningForest<W> {
    pub vertex_count: usize,
    pub edges: Vec<WeightedEdge<W>>,
    pub total_weight: W,
}

impl<W> SpanningForest<W> {
    /// Number of connected components, `V - |edges|`
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }

    /// True when the forest is a single spanning tree
    pub fn spans_all(&self) -> bool {
        self.component_count() <= 1
    }
}
