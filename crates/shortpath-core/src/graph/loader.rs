//! Edge-list loader
//!
//! The file holds whitespace-separated integers: the vertex count, then one
//! `src dst weight` triple per edge. Triples may span or share lines. `#`
//! starts a comment that runs to the end of the line.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{PathError, Result};
use crate::graph::types::Weight;
use crate::graph::{Graph, GraphProvider};

/// A numeric token and the 1-based line it came from
struct Token<'a> {
    text: &'a str,
    line: usize,
}

fn tokenize(text: &str) -> impl Iterator<Item = Token<'_>> {
    text.lines().enumerate().flat_map(|(idx, line)| {
        let content = line.split('#').next().unwrap_or("");
        content
            .split_whitespace()
            .map(move |text| Token { text, line: idx + 1 })
    })
}

fn parse_int(token: &Token<'_>, what: &str) -> Result<i64> {
    token.text.parse::<i64>().map_err(|_| {
        PathError::malformed_graph(
            token.line,
            format!("expected integer {}, found '{}'", what, token.text),
        )
    })
}

fn parse_endpoint(token: &Token<'_>, what: &str, num_vertices: usize) -> Result<usize> {
    let value = parse_int(token, what)?;
    usize::try_from(value)
        .ok()
        .filter(|v| *v < num_vertices)
        .ok_or_else(|| {
            PathError::malformed_graph(
                token.line,
                format!(
                    "{} {} out of range (graph has {} vertices)",
                    what, value, num_vertices
                ),
            )
        })
}

fn parse_weight(token: &Token<'_>) -> Result<Weight> {
    let value = parse_int(token, "weight")?;
    if value < 0 {
        return Err(PathError::malformed_graph(
            token.line,
            format!("negative weight {}", value),
        ));
    }
    Weight::try_from(value).map_err(|_| {
        PathError::malformed_graph(token.line, format!("weight {} too large", value))
    })
}

/// Parse a graph from edge-list text
pub fn parse_graph(text: &str) -> Result<Graph> {
    let mut tokens = tokenize(text);

    let header = tokens
        .next()
        .ok_or_else(|| PathError::malformed_graph(1, "missing vertex count"))?;
    let num_vertices = usize::try_from(parse_int(&header, "vertex count")?).map_err(|_| {
        PathError::malformed_graph(header.line, format!("negative vertex count {}", header.text))
    })?;

    let mut graph = Graph::try_new(num_vertices).map_err(|_| {
        PathError::malformed_graph(
            header.line,
            format!("vertex count {} is too large", num_vertices),
        )
    })?;
    while let Some(src) = tokens.next() {
        let from = parse_endpoint(&src, "source vertex", num_vertices)?;

        let dst = tokens.next().ok_or_else(|| {
            PathError::malformed_graph(src.line, "edge is missing destination and weight")
        })?;
        let to = parse_endpoint(&dst, "destination vertex", num_vertices)?;

        let weight = tokens
            .next()
            .ok_or_else(|| PathError::malformed_graph(dst.line, "edge is missing weight"))?;
        let weight = parse_weight(&weight)?;

        graph.add_edge(from, to, weight)?;
    }

    Ok(graph)
}

/// Load a graph from an edge-list file
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<Graph> {
    let start = Instant::now();
    let text = fs::read_to_string(path)
        .map_err(|e| PathError::io_operation("read graph file", path.display(), e))?;
    let graph = parse_graph(&text)?;

    crate::trace_time!(
        start,
        "load_graph",
        vertices = graph.num_vertices(),
        edges = graph.edge_count()
    );
    Ok(graph)
}
