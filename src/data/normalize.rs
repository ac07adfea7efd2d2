use super::model::Matrix;

/// Smallest and largest cell of a matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Scan every cell once.
    pub fn of(matrix: &Matrix) -> Self {
        matrix.values().iter().fold(
            ValueRange {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |acc, &v| ValueRange {
                min: acc.min.min(v),
                max: acc.max.max(v),
            },
        )
    }

    /// True when there is no spread to scale by.
    pub fn is_degenerate(&self) -> bool {
        !(self.max > self.min)
    }
}

/// Min-max scale into `[0, 1]`, then square-root remap to lift the flat
/// regions relative to the sharp peaks.
///
/// A matrix without spread is returned as-is; neither the scaling nor the
/// square root is applied in that case.
pub fn normalize(matrix: &Matrix, range: ValueRange) -> Matrix {
    if range.is_degenerate() {
        log::debug!("constant matrix ({}), skipping normalization", range.min);
        return matrix.clone();
    }
    let span = range.max - range.min;
    matrix.map(|v| ((v - range.min) / span).sqrt())
}
