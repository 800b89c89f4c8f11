//! Graph input parsing
//!
//! Text layout, in the order an operator would type it at the planner:
//!
//! ```text
//! 4          # vertex count
//! Library
//! Gym
//! Hall #2
//! Lab
//! 2          # edge count
//! 0 1 4      # u v weight
//! 1 2 1
//! ```
//!
//! The vertex count is followed by exactly one label line per vertex, taken
//! verbatim apart from surrounding whitespace (`Hall #2` above is a label,
//! and a blank line leaves its vertex unlabeled). Everywhere else `#` starts
//! a comment and blank lines are skipped. Edge records naming vertices outside the graph
//! (negative indices included) are handed to [`Graph::add_edge`], which
//! ignores them, so one bad record never aborts the batch.

use std::fmt::Display;
use std::iter::Enumerate;
use std::str::{FromStr, Lines};

use tracing::debug;

use crate::bail_parse;
use crate::error::{CampusError, Result};
use crate::graph::{Graph, Weight};

/// Line cursor that tracks 1-based line numbers for error messages
struct InputLines<'a> {
    inner: Enumerate<Lines<'a>>,
    last_line: usize,
}

impl<'a> InputLines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
            last_line: 0,
        }
    }

    /// Next line with content, comments stripped
    fn next_content(&mut self) -> Option<(usize, &'a str)> {
        for (idx, raw) in self.inner.by_ref() {
            self.last_line = idx + 1;
            let content = strip_comment(raw);
            if !content.is_empty() {
                return Some((idx + 1, content));
            }
        }
        None
    }

    /// Next raw line, trimmed; no comment handling
    fn next_label(&mut self) -> Option<(usize, &'a str)> {
        let (idx, raw) = self.inner.next()?;
        self.last_line = idx + 1;
        Some((idx + 1, raw.trim()))
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => line[..pos].trim(),
        None => line.trim(),
    }
}

fn parse_count(line: usize, text: &str, what: &str) -> Result<i64> {
    text.parse::<i64>()
        .map_err(|e| CampusError::parse(line, format!("invalid {what} '{text}': {e}")))
}

/// Parse graph input text into a new graph.
pub fn parse_graph<W>(text: &str) -> Result<Graph<W>>
where
    W: Weight + FromStr,
    W::Err: Display,
{
    let mut lines = InputLines::new(text);
    let mut graph = Graph::new();

    let Some((line, count)) = lines.next_content() else {
        bail_parse!(1, "missing vertex count");
    };
    graph.try_reset(parse_count(line, count, "vertex count")?)?;

    for index in 0..graph.vertex_count() {
        let Some((line, label)) = lines.next_label() else {
            bail_parse!(
                lines.last_line + 1,
                "expected label for vertex {index} of {}",
                graph.vertex_count()
            );
        };
        if label.is_empty() {
            debug!(line, index, "vertex left unlabeled");
        } else {
            graph.set_label(index, label);
        }
    }

    let edge_count = match lines.next_content() {
        Some((line, text)) => {
            let count = parse_count(line, text, "edge count")?;
            if count < 0 {
                bail_parse!(line, "edge count must not be negative, got {count}");
            }
            count
        }
        None => 0,
    };

    for n in 0..edge_count {
        let Some((line, record)) = lines.next_content() else {
            bail_parse!(
                lines.last_line + 1,
                "expected {edge_count} edges, found {n}"
            );
        };
        add_edge_record(&mut graph, line, record)?;
    }

    if let Some((line, _)) = lines.next_content() {
        debug!(line, "ignoring trailing input after last edge");
    }

    Ok(graph)
}

fn add_edge_record<W>(graph: &mut Graph<W>, line: usize, record: &str) -> Result<()>
where
    W: Weight + FromStr,
    W::Err: Display,
{
    let fields: Vec<&str> = record.split_whitespace().collect();
    let [u, v, w] = fields.as_slice() else {
        bail_parse!(line, "expected 'u v weight', got '{record}'");
    };

    let u = parse_count(line, u, "vertex index")?;
    let v = parse_count(line, v, "vertex index")?;
    let weight = w
        .parse::<W>()
        .map_err(|e| CampusError::parse(line, format!("invalid weight '{w}': {e}")))?;

    match (usize::try_from(u), usize::try_from(v)) {
        (Ok(u), Ok(v)) => graph.add_edge(u, v, weight),
        _ => debug!(line, u, v, "ignoring edge with negative endpoint"),
    }

    Ok(())
}
