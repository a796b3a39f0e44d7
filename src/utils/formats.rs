//! Utilities for converting between our matrix format and external libraries

use crate::error::Result;
use crate::matrix::SparseMatrix;
use num_traits::Num;
use sprs::{CsMat, TriMat};

/// Converts a sparse matrix to sprs CsMat format (CSR storage)
pub fn to_sprs_csr<T>(matrix: &SparseMatrix<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    let mut triplets = TriMat::with_capacity(matrix.shape(), matrix.nnz());
    for ((row, col), &value) in matrix.iter() {
        triplets.add_triplet(row, col, value);
    }
    triplets.to_csr()
}

/// Converts an sprs CsMat (CSR or CSC) back into a sparse matrix
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T>(matrix: &CsMat<T>) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + Default,
{
    let (n_rows, n_cols) = matrix.shape();
    SparseMatrix::from_triplets(
        n_rows,
        n_cols,
        matrix.iter().map(|(&value, (row, col))| (row, col, value)),
    )
}
