//! Addition, subtraction and multiplication of sparse matrices
//!
//! Every operation allocates a fresh result and leaves its operands untouched.
//! Accumulation may produce entries that net to zero, so each result is
//! pruned before it is returned. Sums and products are checked: a value that
//! does not fit in `T` fails the whole operation with
//! [`SparseError::Overflow`].

use std::collections::HashMap;

use log::debug;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Num};

use crate::error::{Result, SparseError};
use crate::matrix::{Operation, SparseMatrix};

impl<T> SparseMatrix<T>
where
    T: Copy + Num + CheckedAdd + CheckedSub + CheckedMul,
{
    /// Element-wise sum `self + other`
    ///
    /// Fails with [`SparseError::DimensionMismatch`] unless both shapes are equal.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.require_same_shape(Operation::Add, other)?;
        let result = self.merge(Operation::Add, other, |acc, value| acc.checked_add(&value))?;

        debug!(
            "add: {}×{} (nnz {}) + (nnz {}) -> nnz {}",
            self.n_rows,
            self.n_cols,
            self.nnz(),
            other.nnz(),
            result.nnz()
        );
        Ok(result)
    }

    /// Element-wise difference `self - other`
    ///
    /// Fails with [`SparseError::DimensionMismatch`] unless both shapes are equal.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.require_same_shape(Operation::Subtract, other)?;
        let result = self.merge(Operation::Subtract, other, |acc, value| acc.checked_sub(&value))?;

        debug!(
            "subtract: {}×{} (nnz {}) - (nnz {}) -> nnz {}",
            self.n_rows,
            self.n_cols,
            self.nnz(),
            other.nnz(),
            result.nnz()
        );
        Ok(result)
    }

    /// Matrix product `self × other`
    ///
    /// The result is `self.n_rows × other.n_cols`. Only `self.n_cols ==
    /// other.n_rows` is required here; the stricter square-compatible rule is
    /// applied by [`ensure_compatible`](crate::matrix::ensure_compatible).
    ///
    /// The entries of `other` are grouped by row once, so each entry of `self`
    /// only meets the entries of `other` that share its contraction coordinate.
    ///
    /// Partial sums are checked as they accumulate, so a running total that
    /// leaves the range of `T` fails even if later terms would bring it back.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.n_cols != other.n_rows {
            return Err(self.mismatch(Operation::Multiply, other));
        }

        let mut by_row: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for ((row, col), &value) in other.iter() {
            by_row.entry(row).or_default().push((col, value));
        }

        let mut result = Self::new(self.n_rows, other.n_cols);
        for ((row1, col1), &value1) in self.iter() {
            if let Some(row2_entries) = by_row.get(&col1) {
                for &(col2, value2) in row2_entries {
                    let acc = result.entry_mut(row1, col2);
                    *acc = value1
                        .checked_mul(&value2)
                        .and_then(|product| acc.checked_add(&product))
                        .ok_or(SparseError::Overflow {
                            operation: Operation::Multiply.name(),
                            row: row1,
                            col: col2,
                        })?;
                }
            }
        }
        result.remove_zeros();

        debug!(
            "multiply: {}×{} (nnz {}) × {}×{} (nnz {}) -> nnz {}",
            self.n_rows,
            self.n_cols,
            self.nnz(),
            other.n_rows,
            other.n_cols,
            other.nnz(),
            result.nnz()
        );
        Ok(result)
    }

    /// Runs `op` with `self` on the left and `other` on the right
    pub fn apply(&self, op: Operation, other: &Self) -> Result<Self> {
        match op {
            Operation::Add => self.add(other),
            Operation::Subtract => self.subtract(other),
            Operation::Multiply => self.multiply(other),
        }
    }

    /// Copies `self`, folds every entry of `other` into it, then prunes
    fn merge<F>(&self, op: Operation, other: &Self, combine: F) -> Result<Self>
    where
        F: Fn(T, T) -> Option<T>,
    {
        let mut result = self.clone();
        for ((row, col), &value) in other.iter() {
            let acc = result.entry_mut(row, col);
            *acc = combine(*acc, value).ok_or(SparseError::Overflow {
                operation: op.name(),
                row,
                col,
            })?;
        }
        Ok(result.pruned())
    }

    fn require_same_shape(&self, op: Operation, other: &Self) -> Result<()> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(self.mismatch(op, other))
        }
    }

    fn mismatch(&self, op: Operation, other: &Self) -> SparseError {
        SparseError::DimensionMismatch {
            operation: op.name(),
            left_rows: self.n_rows,
            left_cols: self.n_cols,
            right_rows: other.n_rows,
            right_cols: other.n_cols,
        }
    }
}
