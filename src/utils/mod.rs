//! Utility functions and helpers

pub mod formats;

pub use formats::{from_sprs, to_sprs_csr};

use std::path::Path;

/// File name of `path` without directories or extension
///
/// Falls back to the full path text when there is no usable stem.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
