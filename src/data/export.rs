use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::error::{DataError, DataResult};
use super::model::Matrix;

/// Decimal places kept in the exported values.
pub const DECIMALS: i32 = 4;

// ---------------------------------------------------------------------------
// ParticleGrid – the JSON payload read by the particle field
// ---------------------------------------------------------------------------

/// Output schema:
///
/// ```json
/// {"rows": 100, "cols": 100, "data": [0.0, 0.1234, ...]}
/// ```
///
/// `data` is row-major and always holds `rows * cols` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleGrid {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl ParticleGrid {
    /// Flatten a matrix, rounding each cell to [`DECIMALS`] places.
    pub fn from_matrix(matrix: &Matrix) -> Self {
        ParticleGrid {
            rows: matrix.rows(),
            cols: matrix.cols(),
            data: matrix
                .values()
                .iter()
                .map(|&v| round_to(v, DECIMALS))
                .collect(),
        }
    }
}

/// Round half away from zero at `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Write the grid as JSON, replacing `path`.
///
/// The payload goes to a temp file beside the destination first and is then
/// renamed over it, so readers never see a half-written file.
pub fn write_json(grid: &ParticleGrid, path: &Path) -> DataResult<()> {
    let write_err = |source| DataError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = staging_file(dir, path).map_err(write_err)?;
    log::debug!("staging output in {}", tmp.path().display());

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer(&mut writer, grid)?;
        writer.flush().map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Temp file in `dir` carrying the mode the destination would end up with.
///
/// An existing destination keeps its permissions; a new one gets the usual
/// `0o666` less the umask instead of the private `0o600` default.
fn staging_file(dir: &Path, dest: &Path) -> io::Result<NamedTempFile> {
    let existing = std::fs::metadata(dest).ok().map(|m| m.permissions());

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;

    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms)?;
    }
    Ok(tmp)
}
