use std::path::PathBuf;

use crate::data::model::GridSize;

/// Default source matrix, relative to the working directory.
pub const DEFAULT_INPUT: &str = "wavelet_2D_matrix.txt";
/// Default destination payload, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "wavelet_data.json";
/// About 10 000 particles.
pub const DEFAULT_TARGET: GridSize = GridSize::new(100, 100);

/// Everything one pipeline run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Approximate size of the downsampled grid.
    pub target: GridSize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            target: DEFAULT_TARGET,
        }
    }
}

impl PipelineConfig {
    /// Defaults with the given paths substituted where present.
    pub fn with_paths(input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            input: input.unwrap_or(defaults.input),
            output: output.unwrap_or(defaults.output),
            ..defaults
        }
    }
}
