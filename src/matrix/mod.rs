// Matrix data structure, arithmetic and shape checks

pub mod arithmetic;
pub mod dimension;
pub mod sparse;

pub use dimension::{check_compatible, ensure_compatible, Compatibility, Operation};
pub use sparse::SparseMatrix;
