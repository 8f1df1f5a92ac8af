//! Core error type.
//!
//! Graph and I/O crates wrap `CoreError` as one variant of their own enums.

use thiserror::Error;

use crate::TravelMode;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A unified query or path was reinterpreted as the wrong concrete mode.
    /// This signals a logic defect in the caller, not bad input.
    #[error("travel mode mismatch: expected {expected}, found {actual}")]
    ModeMismatch {
        expected: TravelMode,
        actual:   TravelMode,
    },
}

/// Shorthand result type for `cm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
