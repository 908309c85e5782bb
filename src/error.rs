//! Error types for loading graphs and configuring the engine.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure while reading an edge list or one of the conversion formats.
///
/// Line numbers are 1-based. Any malformed line aborts the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: empty line in edge list is not allowed")]
    EmptyLine { line: usize },

    #[error("line {line}: expected `src dst weight`, got `{content}`")]
    MissingFields { line: usize, content: String },

    #[error("line {line}: invalid {field} `{value}`")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {} at line {line}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Attach `path` to a stream read failure; other variants pass through.
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            LoadError::Read { line, source } => LoadError::ReadFile {
                path: path.to_path_buf(),
                line,
                source,
            },
            other => other,
        }
    }
}

/// Invalid engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("worker count must be positive")]
    ZeroWorkers,

    #[error("partition count must be positive")]
    ZeroPartitions,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_errors_name_the_line() {
        let err = LoadError::InvalidField {
            line: 7,
            field: "weight",
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "line 7: invalid weight `abc`");
        assert_eq!(
            LoadError::EmptyLine { line: 3 }.to_string(),
            "line 3: empty line in edge list is not allowed"
        );
    }

    #[test]
    fn with_path_only_rewrites_stream_reads() {
        let read = LoadError::Read {
            line: 4,
            source: std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        };
        let err = read.with_path(Path::new("g.edgelist"));
        assert_eq!(err.to_string(), "failed to read g.edgelist at line 4: boom");
        let empty = LoadError::EmptyLine { line: 2 }.with_path(Path::new("g.edgelist"));
        assert!(matches!(empty, LoadError::EmptyLine { line: 2 }));
    }

    #[test]
    fn crate_error_is_transparent_over_load_error() {
        let err: Error = LoadError::MissingFields {
            line: 2,
            content: "1 2".into(),
        }
        .into();
        assert_eq!(err.to_string(), "line 2: expected `src dst weight`, got `1 2`");
    }
}
