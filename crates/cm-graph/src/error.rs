//! Graph-subsystem error type.

use thiserror::Error;

use cm_core::PointId;

/// Errors produced by `cm-graph`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("point {0} not found in map")]
    PointNotFound(PointId),

    #[error("point {0:?} not found in map")]
    NameNotFound(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
