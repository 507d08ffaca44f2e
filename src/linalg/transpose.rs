//! Matrix transpose.

use crate::matrix::Matrix;

/// Transposes a matrix, swapping rows and columns.
///
/// Transposing twice restores the original values in a fresh matrix.
pub fn transpose<T: Clone>(matrix: &Matrix<T>) -> Matrix<T> {
    let (m, n) = matrix.dims();

    let mut values = Vec::with_capacity(m * n);
    for j in 0..n {
        for i in 0..m {
            values.push(matrix[[i, j]].clone());
        }
    }

    Matrix::from_parts(n, m, values)
}
