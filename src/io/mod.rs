//! Input and output formats around the engine.

pub mod convert;
pub mod edge_list;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::traits::VertexId;

pub use convert::{gr_to_mtx, mtx_to_edge_list, ConversionStats};
pub use edge_list::{load_edge_list, parse_edge_line, read_edge_list};

/// File written into the output directory by [`write_components_file`].
pub const COMPONENTS_FILE: &str = "part-00000";

/// The single-line result, e.g. `MST_WEIGHT=6.000000`.
pub fn format_mst_weight(weight: f64) -> String {
    format!("MST_WEIGHT={weight:.6}")
}

/// Write one `id<TAB>component` line per vertex.
pub fn write_components<W: Write>(
    mut out: W,
    components: &[(VertexId, VertexId)],
) -> std::io::Result<()> {
    for (id, component) in components {
        writeln!(out, "{id}\t{component}")?;
    }
    out.flush()
}

/// Create `dir` if needed and write the component assignment into it.
///
/// Returns the path of the written file.
pub fn write_components_file(
    dir: impl AsRef<Path>,
    components: &[(VertexId, VertexId)],
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| Error::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(COMPONENTS_FILE);
    let file = File::create(&path).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;
    write_components(BufWriter::new(file), components).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
