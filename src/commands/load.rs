//! Reading graph input from a file or stdin

use std::fmt::Display;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use campusnet_core::error::{CampusError, Result};
use campusnet_core::graph::{Graph, Weight};
use campusnet_core::input::parse_graph;

/// Read and parse a graph; `-` reads from stdin
pub fn read_graph<W>(path: &Path) -> Result<Graph<W>>
where
    W: Weight + FromStr,
    W::Err: Display,
{
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| {
            CampusError::Other(format!(
                "failed to read graph from {}: {}",
                path.display(),
                e
            ))
        })?
    };

    parse_graph(&text)
}
