//! Campusnet Core Library
//!
//! Weighted, undirected graph engine behind the campusnet planner:
//! shortest paths from a single source and minimum spanning forests.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod input;
pub mod logging;
pub mod records;

pub use graph::{Graph, ShortestPaths, SpanningForest};
