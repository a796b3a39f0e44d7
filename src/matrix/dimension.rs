//! Shape compatibility checks performed before an operation is attempted

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SparseError};
use crate::matrix::SparseMatrix;

/// How two shapes are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    /// Both rows and columns must match (addition, subtraction)
    Same,
    /// Rows of one must match columns of the other, in both directions (multiplication)
    Inverse,
}

impl FromStr for Compatibility {
    type Err = SparseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "same" => Ok(Compatibility::Same),
            "inverse" => Ok(Compatibility::Inverse),
            _ => Err(SparseError::InvalidMode {
                kind: "compatibility mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Compares two shapes under the given mode
///
/// `Inverse` requires `rows1 == cols2` and `cols1 == rows2`. This is stricter
/// than what multiplication needs on its own (`cols1 == rows2`), and it is the
/// rule the external gate enforces.
pub fn check_compatible(
    rows1: usize,
    cols1: usize,
    rows2: usize,
    cols2: usize,
    mode: Compatibility,
) -> bool {
    match mode {
        Compatibility::Same => rows1 == rows2 && cols1 == cols2,
        Compatibility::Inverse => rows1 == cols2 && cols1 == rows2,
    }
}

/// The binary operations a caller can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// The compatibility mode the gate applies for this operation
    pub fn compatibility(&self) -> Compatibility {
        match self {
            Operation::Add | Operation::Subtract => Compatibility::Same,
            Operation::Multiply => Compatibility::Inverse,
        }
    }

    /// Lowercase name used in file names and messages
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = SparseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            _ => Err(SparseError::InvalidMode {
                kind: "operation",
                value: s.to_string(),
            }),
        }
    }
}

/// Gate for `op` on `a` and `b`, failing with [`SparseError::DimensionMismatch`]
///
/// Only the declared shapes are read, so any element type is accepted.
pub fn ensure_compatible<T>(op: Operation, a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<()> {
    if check_compatible(a.n_rows, a.n_cols, b.n_rows, b.n_cols, op.compatibility()) {
        Ok(())
    } else {
        Err(SparseError::DimensionMismatch {
            operation: op.name(),
            left_rows: a.n_rows,
            left_cols: a.n_cols,
            right_rows: b.n_rows,
            right_cols: b.n_cols,
        })
    }
}
