//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest paths with a lazy-deletion frontier
//! - `kruskal`: minimum spanning forest via sorted edges and a disjoint set

pub mod dijkstra;
pub mod kruskal;

pub use dijkstra::shortest_paths_from;
pub use kruskal::minimum_spanning_forest;
