//! # sparse-ops: coordinate-keyed sparse integer matrices
//!
//! Matrices are stored as a map from `(row, col)` to non-zero values, with a
//! shape declared independently of the stored coordinates. Addition,
//! subtraction and multiplication work on the stored entries only and never
//! build the dense representation.
//!
//! ## Components
//!
//! 1. **[`SparseMatrix`]**: storage, element access and zero-pruning.
//! 2. **Arithmetic**: [`SparseMatrix::add`], [`SparseMatrix::subtract`] and
//!    [`SparseMatrix::multiply`], each returning a fresh matrix.
//! 3. **Dimension checks**: [`check_compatible`] and [`ensure_compatible`],
//!    the gate applied before an operation is requested.
//! 4. **Text format**: [`io`] reads and writes the `rows=`/`cols=` plus
//!    `(row, col, value)` format.
//!
//! ## Usage
//!
//! ```
//! use sparse_ops::SparseMatrix;
//!
//! let a = SparseMatrix::<i64>::from_triplets(1, 2, vec![(0, 0, 2), (0, 1, 3)]).unwrap();
//! let b = SparseMatrix::<i64>::from_triplets(2, 1, vec![(0, 0, 5), (1, 0, 7)]).unwrap();
//!
//! let c = a.multiply(&b).unwrap();
//! assert_eq!(c.shape(), (1, 1));
//! assert_eq!(c.get(0, 0), 31);
//! ```
//!
//! Shape mismatches are reported, not computed:
//!
//! ```
//! use sparse_ops::{SparseError, SparseMatrix};
//!
//! let a = SparseMatrix::<i64>::new(2, 2);
//! let b = SparseMatrix::<i64>::new(3, 3);
//! assert!(matches!(a.add(&b), Err(SparseError::DimensionMismatch { .. })));
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod matrix;
pub mod session;
pub mod utils;

// Re-export primary components
pub use config::{OutputConfig, OutputLayout};
pub use error::{Result, SparseError};
pub use io::{parse_matrix, read_matrix, save_matrix, write_entries, write_matrix};
pub use matrix::{check_compatible, ensure_compatible, Compatibility, Operation, SparseMatrix};
pub use session::{compute, result_file_name, run_menu, Session};
pub use utils::{from_sprs, to_sprs_csr};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
