//! Error types shared by every part of the crate

use std::io;
use thiserror::Error;

/// Errors raised by matrix construction, arithmetic and file handling
#[derive(Error, Debug)]
pub enum SparseError {
    /// Operand shapes are incompatible for the requested operation
    #[error("cannot {operation} a {left_rows}×{left_cols} matrix with a {right_rows}×{right_cols} matrix")]
    DimensionMismatch {
        operation: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// A write addressed a coordinate outside the declared shape
    #[error("coordinate ({row}, {col}) is outside a {n_rows}×{n_cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        n_rows: usize,
        n_cols: usize,
    },

    /// An accumulated value does not fit in the element type
    #[error("{operation} overflowed the element type at ({row}, {col})")]
    Overflow {
        operation: &'static str,
        row: usize,
        col: usize,
    },

    /// A line of matrix text could not be parsed
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// An unknown compatibility mode or operation name
    #[error("unknown {kind} '{value}'")]
    InvalidMode { kind: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SparseError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        SparseError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SparseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SparseError::DimensionMismatch {
            operation: "add",
            left_rows: 2,
            left_cols: 3,
            right_rows: 3,
            right_cols: 2,
        };
        assert_eq!(err.to_string(), "cannot add a 2×3 matrix with a 3×2 matrix");

        let err = SparseError::parse(4, "expected 3 fields, found 2");
        assert_eq!(err.to_string(), "line 4: expected 3 fields, found 2");
    }
}
