use std::fmt;

use super::error::{DataError, DataResult};

// ---------------------------------------------------------------------------
// GridSize – a (rows, cols) pair
// ---------------------------------------------------------------------------

/// Matrix dimensions, printed as `(rows, cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// Matrix – dense, rectangular, row-major
// ---------------------------------------------------------------------------

/// A rectangular grid of magnitudes stored row-major.
///
/// Every matrix that leaves the loader is non-empty and rectangular;
/// the derived matrices (downsampled, normalized) keep that property.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    size: GridSize,
    values: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from parsed rows.
    ///
    /// Rejects input with no rows, rows with no values, and rows whose
    /// length differs from the first row.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> DataResult<Self> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(DataError::Empty),
        };

        let mut values = Vec::with_capacity(rows.len() * cols);
        for (row, data) in rows.iter().enumerate() {
            if data.len() != cols {
                return Err(DataError::Ragged {
                    row,
                    expected: cols,
                    found: data.len(),
                });
            }
            values.extend_from_slice(data);
        }

        Ok(Matrix {
            size: GridSize::new(rows.len(), cols),
            values,
        })
    }

    /// Wrap an already flattened buffer. `values.len()` must equal `size.area()`.
    pub(crate) fn from_parts(size: GridSize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), size.area());
        Matrix { size, values }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.rows
    }

    pub fn cols(&self) -> usize {
        self.size.cols
    }

    /// Value at `(row, col)`. Panics when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.size.rows && col < self.size.cols);
        self.values[row * self.size.cols + col]
    }

    /// Row-major view of all cells.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Apply `f` to every cell, keeping the shape.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            size: self.size,
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }
}
