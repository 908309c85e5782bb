//! Converters feeding the edge-list format.
//!
//! - [`gr_to_mtx`]: DIMACS-style `gr` (`c`/`p`/`a` lines) to a symmetric
//!   Matrix Market coordinate file.
//! - [`mtx_to_edge_list`]: Matrix Market coordinate file to a reciprocal
//!   `src dst weight` edge list.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use crate::error::{Error, LoadError};
use crate::io::edge_list::{parse_id, parse_weight};
use crate::traits::VertexId;

/// Counters reported by the converters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Largest vertex id among the edges kept.
    pub max_vertex_id: VertexId,
    /// Unique undirected edges (`gr_to_mtx`) or directed records
    /// (`mtx_to_edge_list`) written.
    pub edges: u64,
}

/// Convert `gr` arcs into a symmetric Matrix Market file.
///
/// Self-loops are dropped. Arcs are keyed by their unordered endpoint pair and
/// the last weight seen for a pair wins. Entries are written as `hi lo w`,
/// sorted by pair.
pub fn gr_to_mtx<R: BufRead, W: Write>(input: R, mut output: W) -> Result<ConversionStats, Error> {
    let mut unique: BTreeMap<(VertexId, VertexId), f64> = BTreeMap::new();
    let mut max_id: VertexId = 0;

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_no,
            source,
        })?;
        let line = line.trim();
        // `c` comments, the `p` problem line and blanks carry no arcs.
        if !line.starts_with('a') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 {
            continue;
        }
        let u = parse_id(tokens[1], "source id", line_no)?;
        let v = parse_id(tokens[2], "target id", line_no)?;
        let w = parse_weight(tokens[3], line_no)?;
        if u == v {
            continue;
        }
        max_id = max_id.max(u).max(v);
        unique.insert((u.min(v), u.max(v)), w);
    }

    writeln!(output, "%%MatrixMarket matrix coordinate real symmetric")?;
    writeln!(output, "{max_id} {max_id} {}", unique.len())?;
    for (&(lo, hi), w) in &unique {
        writeln!(output, "{hi} {lo} {w:?}")?;
    }
    output.flush()?;

    Ok(ConversionStats {
        max_vertex_id: max_id,
        edges: unique.len() as u64,
    })
}

/// Convert a Matrix Market coordinate file into a reciprocal edge list.
///
/// Comment lines and the size line are skipped, as are diagonal entries and
/// entries with fewer than two tokens. A missing value defaults to `1.0`.
pub fn mtx_to_edge_list<R: BufRead, W: Write>(
    input: R,
    mut output: W,
) -> Result<ConversionStats, Error> {
    let mut header_seen = false;
    let mut stats = ConversionStats::default();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_no,
            source,
        })?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }
        if !header_seen {
            header_seen = true;
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            continue;
        }
        let i = parse_id(tokens[0], "row", line_no)?;
        let j = parse_id(tokens[1], "column", line_no)?;
        let w = match tokens.get(2) {
            Some(token) => parse_weight(token, line_no)?,
            None => 1.0,
        };
        if i == j {
            continue;
        }
        stats.max_vertex_id = stats.max_vertex_id.max(i).max(j);
        writeln!(output, "{i} {j} {w:?}")?;
        writeln!(output, "{j} {i} {w:?}")?;
        stats.edges += 2;
    }
    output.flush()?;

    Ok(stats)
}
