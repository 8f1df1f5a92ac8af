//! Error types for cm-io.

use std::path::{Path, PathBuf};

use thiserror::Error;

use cm_core::PointId;
use cm_graph::GraphError;

/// Errors that abort a load step.
///
/// Points inserted before the failure stay in the map; the caller decides
/// whether to continue.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: {source}", .path.display())]
    InFile {
        path:   PathBuf,
        #[source]
        source: Box<LoadError>,
    },

    #[error("line {line}: {message}")]
    Malformed { line: u64, message: String },

    #[error("line {line}: point {id} {name:?} rejected: duplicate id or name")]
    Rejected { line: u64, id: PointId, name: String },

    #[error("line {line}: point {name:?} does not exist")]
    UnknownPoint { line: u64, name: String },

    #[error("connection matrix has {got} rows, expected {expected}")]
    MatrixSize { expected: usize, got: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl LoadError {
    /// Attach the file the error came from.
    pub fn in_file(self, path: &Path) -> LoadError {
        LoadError::InFile { path: path.to_path_buf(), source: Box::new(self) }
    }

    /// Offending input line, if the error is tied to one.
    pub fn line(&self) -> Option<u64> {
        match self {
            LoadError::InFile { source, .. } => source.line(),
            LoadError::Malformed { line, .. }
            | LoadError::Rejected { line, .. }
            | LoadError::UnknownPoint { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur when writing routes.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot create {}: {source}", .path.display())]
    Create {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type OutputResult<T> = Result<T, OutputError>;
