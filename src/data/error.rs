use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the data stages (load, reshape, export).
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: '{token}' is not a number")]
    Parse {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("line {line}: '{token}' is not a finite number")]
    NonFinite { line: usize, token: String },

    #[error("row {row} has {found} values, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix contains no data")]
    Empty,

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("encoding JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type DataResult<T> = Result<T, DataError>;
