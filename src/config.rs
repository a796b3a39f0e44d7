//! Configuration for persisting operation results

use std::path::PathBuf;

/// Directory used for results when none is given
pub const DEFAULT_RESULT_DIR: &str = "results";

/// How entries are laid out when a matrix is written as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputLayout {
    /// Emit entries in row-major order instead of internal order
    pub sorted: bool,

    /// Emit the `rows=`/`cols=` header, making the output loadable again
    pub header: bool,
}

impl OutputLayout {
    /// Layout accepted back by the loader
    pub fn round_trip() -> Self {
        Self {
            sorted: true,
            header: true,
        }
    }
}

/// Where and how results are written
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Directory receiving result files; created on first write
    pub result_dir: PathBuf,

    /// Text layout of result files
    pub layout: OutputLayout,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            result_dir: PathBuf::from(DEFAULT_RESULT_DIR),
            layout: OutputLayout::default(),
        }
    }
}

impl OutputConfig {
    /// Create a config writing into `result_dir` with the default layout
    pub fn with_result_dir(result_dir: impl Into<PathBuf>) -> Self {
        Self {
            result_dir: result_dir.into(),
            ..Self::default()
        }
    }

    /// Replace the output layout
    pub fn layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.result_dir, PathBuf::from("results"));
        assert!(!config.layout.sorted);
        assert!(!config.layout.header);
    }

    #[test]
    fn test_builder() {
        let config = OutputConfig::with_result_dir("out").layout(OutputLayout::round_trip());
        assert_eq!(config.result_dir, PathBuf::from("out"));
        assert!(config.layout.header);
    }
}
