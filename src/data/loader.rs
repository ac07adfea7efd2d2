use std::path::Path;

use super::error::{DataError, DataResult};
use super::model::Matrix;

/// Lines starting with this byte carry metadata (axis names etc.) and are skipped.
const COMMENT: u8 = b'#';

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a magnitude matrix from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – comma-separated rows, no header, `#` comment lines
/// * anything else – whitespace-separated rows, `#` comment lines
pub fn load_file(path: &Path) -> DataResult<Matrix> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        _ => load_text(path),
    }
}

// ---------------------------------------------------------------------------
// Whitespace text loader
// ---------------------------------------------------------------------------

/// Text layout, one matrix row per line:
///
/// ```text
/// # wavelet magnitude matrix; rows follow R axis, columns follow k axis
/// 0.0012 0.0031 0.0050 ...
/// 0.0019 0.0044 0.0071 ...
/// ```
fn load_text(path: &Path) -> DataResult<Matrix> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_text(&text)
}

/// Parse the whitespace text format.
///
/// Only a `#` in the very first column marks a comment. Lines that hold no
/// tokens produce no row.
pub fn parse_text(text: &str) -> DataResult<Matrix> {
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in text.lines().enumerate() {
        if line.as_bytes().first() == Some(&COMMENT) {
            skipped += 1;
            continue;
        }
        let row = parse_tokens(line.split_whitespace(), idx + 1)?;
        if !row.is_empty() {
            rows.push(row);
        }
    }

    log::debug!("parsed {} rows, skipped {skipped} comment lines", rows.len());
    Matrix::from_rows(rows)
}

fn parse_tokens<'a>(tokens: impl Iterator<Item = &'a str>, line: usize) -> DataResult<Vec<f64>> {
    tokens
        .map(|tok| {
            let value = tok.parse::<f64>().map_err(|source| DataError::Parse {
                line,
                token: tok.to_string(),
                source,
            })?;
            // `inf` and `NaN` parse, but would wreck the min-max range.
            if !value.is_finite() {
                return Err(DataError::NonFinite {
                    line,
                    token: tok.to_string(),
                });
            }
            Ok(value)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: no header row, one matrix row per record, `#` comment lines.
fn load_csv(path: &Path) -> DataResult<Matrix> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(COMMENT))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    read_csv(reader)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> DataResult<Matrix> {
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let mut fields: Vec<&str> = record.iter().collect();
        // A trailing comma leaves one empty field; any other empty field is an error.
        if fields.last() == Some(&"") {
            fields.pop();
        }
        let row = parse_tokens(fields.into_iter(), line)?;
        if !row.is_empty() {
            rows.push(row);
        }
    }

    log::debug!("parsed {} CSV rows", rows.len());
    Matrix::from_rows(rows)
}
