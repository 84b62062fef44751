//! # Error reporting
//!
//! All fallible operations of the engine return an `EngineError`. Errors are reported to the
//! immediate caller; nothing is retried or worked around internally.
use std::fmt;
use std::fmt::Display;

use thiserror::Error;

/// Which index space an out of bounds index was checked against.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Axis {
    Row,
    Column,
    BasicVariable,
    Variable,
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Axis::Row => "Row",
            Axis::Column => "Column",
            Axis::BasicVariable => "Basic variable",
            Axis::Variable => "Non-basic variable",
        };
        f.write_str(name)
    }
}

/// An `EngineError` is created when an operation on the tableau can't be carried out.
///
/// An operation that returns an error has no effect: the tableau and the basis are left exactly
/// as they were.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The pivot value is too close to zero to divide by.
    ///
    /// Values are converted to `f64` for reporting only.
    #[error("Pivot ({row}, {column}) has magnitude {magnitude}, which is not above epsilon {epsilon}")]
    NumericalInstability {
        /// Pivot row index.
        row: usize,
        /// Pivot column index.
        column: usize,
        /// Absolute value of the rejected pivot.
        magnitude: f64,
        /// Threshold in effect.
        epsilon: f64,
    },

    /// A row, column or variable slot index is outside of the declared bounds.
    #[error("{axis} index {index} out of bounds (length {bound})")]
    InvalidIndex {
        /// Index space that was checked.
        axis: Axis,
        /// The offending index.
        index: usize,
        /// Length of the index space.
        bound: usize,
    },

    /// Input data doesn't have the shape the tableau requires.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// The engine configuration can't be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type of all fallible engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Verify that `index` lies in `0..bound`.
pub(crate) fn check_index(axis: Axis, index: usize, bound: usize) -> EngineResult<()> {
    if index < bound {
        Ok(())
    } else {
        Err(EngineError::InvalidIndex { axis, index, bound })
    }
}
