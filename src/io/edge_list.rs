//! Whitespace-separated `src dst weight` edge lists.
//!
//! One directed record per line. An undirected edge has to appear in both
//! directions. Parsing is strict: the first malformed line aborts the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::LoadError;
use crate::graph::{Graph, GraphBuilder};
use crate::traits::VertexId;

/// Parse one line (`line_no` is 1-based and only used for errors).
///
/// Tokens after the third are ignored.
pub fn parse_edge_line(line: &str, line_no: usize) -> Result<(VertexId, VertexId, f64), LoadError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(LoadError::EmptyLine { line: line_no });
    }
    let mut tokens = trimmed.split_whitespace();
    let (Some(src), Some(dst), Some(weight)) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(LoadError::MissingFields {
            line: line_no,
            content: trimmed.to_string(),
        });
    };
    Ok((
        parse_id(src, "source id", line_no)?,
        parse_id(dst, "target id", line_no)?,
        parse_weight(weight, line_no)?,
    ))
}

pub(crate) fn parse_id(
    token: &str,
    field: &'static str,
    line: usize,
) -> Result<VertexId, LoadError> {
    token.parse().map_err(|_| LoadError::InvalidField {
        line,
        field,
        value: token.to_string(),
    })
}

pub(crate) fn parse_weight(token: &str, line: usize) -> Result<f64, LoadError> {
    token.parse().map_err(|_| LoadError::InvalidField {
        line,
        field: "weight",
        value: token.to_string(),
    })
}

/// Read a whole edge list into a [`Graph`].
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<Graph, LoadError> {
    let mut builder = GraphBuilder::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_no,
            source,
        })?;
        let (src, dst, weight) = parse_edge_line(&line, line_no)?;
        builder.add_edge(src, dst, weight);
    }
    let graph = builder.build();
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge list loaded"
    );
    Ok(graph)
}

/// Open `path` and read it with [`read_edge_list`].
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_edge_list(BufReader::new(file)).map_err(|err| err.with_path(path))
}
