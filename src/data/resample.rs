use super::model::{GridSize, Matrix};

/// Stride that brings `len` down to roughly `target` samples.
///
/// Integer division, never below 1, so sources smaller than the target are
/// kept whole.
pub fn stride(len: usize, target: usize) -> usize {
    (len / target.max(1)).max(1)
}

/// Keep every `step_r`-th row and every `step_c`-th column, starting at 0.
///
/// The result is `ceil(rows / step_r) × ceil(cols / step_c)`, which can
/// overshoot the target when the source is not an exact multiple.
pub fn downsample(matrix: &Matrix, target: GridSize) -> Matrix {
    let step_r = stride(matrix.rows(), target.rows);
    let step_c = stride(matrix.cols(), target.cols);
    log::debug!("downsample strides: rows every {step_r}, cols every {step_c}");

    let size = GridSize::new(
        matrix.rows().div_ceil(step_r),
        matrix.cols().div_ceil(step_c),
    );

    let values: Vec<f64> = (0..matrix.rows())
        .step_by(step_r)
        .flat_map(|r| {
            (0..matrix.cols())
                .step_by(step_c)
                .map(move |c| matrix.get(r, c))
        })
        .collect();

    Matrix::from_parts(size, values)
}
