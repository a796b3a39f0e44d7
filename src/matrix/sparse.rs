//! Coordinate-keyed sparse matrix storage

use std::collections::HashMap;
use std::fmt;

use ndarray::{Array2, ArrayView2};
use num_traits::Num;

use crate::error::{Result, SparseError};

/// A sparse matrix stored as a map from `(row, col)` to non-zero values
///
/// The shape is declared up front and never inferred from the stored
/// coordinates. Two invariants hold for every instance:
/// - no stored value is zero
/// - every key satisfies `row < n_rows` and `col < n_cols`
///
/// Both are enforced at the single mutation point, [`SparseMatrix::set`].
#[derive(Clone, PartialEq)]
pub struct SparseMatrix<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Non-zero entries keyed by coordinate
    entries: HashMap<(usize, usize), T>,
}

impl<T> Default for SparseMatrix<T> {
    /// An empty `0×0` matrix, used when the dimensions are not yet known
    fn default() -> Self {
        Self {
            n_rows: 0,
            n_cols: 0,
            entries: HashMap::new(),
        }
    }
}

impl<T> SparseMatrix<T>
where
    T: Copy + Num,
{
    /// Creates an empty matrix with the given dimensions
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            entries: HashMap::new(),
        }
    }

    /// Creates a matrix from `(row, col, value)` triplets
    ///
    /// Triplets go through [`set`](Self::set) in order, so zeros are skipped,
    /// a later triplet overwrites an earlier one at the same coordinate, and
    /// an out-of-range coordinate fails with [`SparseError::OutOfBounds`].
    pub fn from_triplets<I>(n_rows: usize, n_cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(n_rows, n_cols);
        for (row, col, value) in triplets {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Creates a matrix holding the non-zero elements of a dense array
    pub fn from_dense(dense: ArrayView2<'_, T>) -> Self {
        let mut matrix = Self::default();
        matrix.load_from_dense(dense);
        matrix
    }

    /// Replaces the contents of this matrix with a dense array
    ///
    /// The shape is taken from the array and any previous entries are dropped.
    pub fn load_from_dense(&mut self, dense: ArrayView2<'_, T>) {
        let (n_rows, n_cols) = dense.dim();
        self.n_rows = n_rows;
        self.n_cols = n_cols;
        self.entries.clear();

        for ((row, col), &value) in dense.indexed_iter() {
            if !value.is_zero() {
                self.entries.insert((row, col), value);
            }
        }
    }

    /// Materialises the dense representation
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::from_elem((self.n_rows, self.n_cols), T::zero());
        for (&(row, col), &value) in &self.entries {
            dense[[row, col]] = value;
        }
        dense
    }

    /// Returns the value at `(row, col)`, or zero if nothing is stored there
    ///
    /// Coordinates outside the shape also read as zero.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries
            .get(&(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Stores `value` at `(row, col)`; storing zero removes the entry
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.n_rows || col >= self.n_cols {
            return Err(SparseError::OutOfBounds {
                row,
                col,
                n_rows: self.n_rows,
                n_cols: self.n_cols,
            });
        }

        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Drops every stored entry whose value is zero
    pub fn remove_zeros(&mut self) {
        self.entries.retain(|_, value| !value.is_zero());
    }

    /// Consuming form of [`remove_zeros`](Self::remove_zeros)
    pub fn pruned(mut self) -> Self {
        self.remove_zeros();
        self
    }

    /// Entries in row-major order
    pub fn sorted_entries(&self) -> Vec<(usize, usize, T)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
            .collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
        entries
    }
}

impl<T> SparseMatrix<T> {
    /// Returns the number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is stored, i.e. the matrix is all zeros
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `(n_rows, n_cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Iterates over the stored entries in internal order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        self.entries.iter().map(|(&coord, value)| (coord, value))
    }

    /// Accumulator access for the arithmetic module; may leave zeros behind
    pub(crate) fn entry_mut(&mut self, row: usize, col: usize) -> &mut T
    where
        T: Num,
    {
        self.entries.entry((row, col)).or_insert_with(T::zero)
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let entries = self.sorted_entries();
        let max_entries = 10.min(entries.len());

        if max_entries > 0 {
            writeln!(f, "  content sample:")?;
            for (row, col, value) in &entries[..max_entries] {
                writeln!(f, "    ({}, {}) = {:?}", row, col, value)?;
            }
            if entries.len() > max_entries {
                writeln!(f, "    ... ({} more)", entries.len() - max_entries)?;
            }
        }

        write!(f, "}}")
    }
}
