use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::PipelineConfig;
use crate::data::export::{self, ParticleGrid};
use crate::data::loader;
use crate::data::model::GridSize;
use crate::data::normalize::{self, ValueRange};
use crate::data::resample;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub source: GridSize,
    pub downsampled: GridSize,
    /// Range of the downsampled matrix, before normalization.
    pub range: ValueRange,
    /// Normalization was skipped because every cell held the same value.
    pub degenerate: bool,
    pub output: PathBuf,
}

/// Load, downsample, normalize and export in one pass.
///
/// Progress lines go to stdout as each stage completes.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let matrix = loader::load_file(&config.input)
        .with_context(|| format!("loading {}", config.input.display()))?;
    println!("Data shape: {}", matrix.size());

    let downsampled = resample::downsample(&matrix, config.target);
    println!("Downsampled shape: {}", downsampled.size());

    let range = ValueRange::of(&downsampled);
    println!(
        "Original downsampled min: {:?}, max: {:?}",
        range.min, range.max
    );
    let degenerate = range.is_degenerate();
    if degenerate {
        log::warn!("downsampled matrix is constant, writing values unscaled");
    }
    let normalized = normalize::normalize(&downsampled, range);

    let grid = ParticleGrid::from_matrix(&normalized);
    export::write_json(&grid, &config.output)
        .with_context(|| format!("writing {}", config.output.display()))?;
    println!(
        "Successfully wrote normalized data to {}",
        config.output.display()
    );

    Ok(RunSummary {
        source: matrix.size(),
        downsampled: downsampled.size(),
        range,
        degenerate,
        output: config.output.clone(),
    })
}
