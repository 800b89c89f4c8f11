//! Weighted graph store and the algorithms that read it
//!
//! - `store`: adjacency-list graph with mirrored undirected edges
//! - `disjoint_set`: union-find used for cycle detection
//! - `algos`: Dijkstra shortest paths and Kruskal spanning forest
//! - `types`: weights, edges, and result structures

pub mod algos;
pub mod disjoint_set;
pub mod store;
pub mod types;

pub use algos::{minimum_spanning_forest, shortest_paths_from};
pub use disjoint_set::DisjointSet;
pub use store::Graph;
pub use types::{Distance, Neighbor, ShortestPaths, SpanningForest, Weight, WeightedEdge};
