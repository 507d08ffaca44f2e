//! Element-wise primitives.
//!
//! `map`, `apply` and `zip_with` are the building blocks the arithmetic
//! operations sit on top of.

use crate::{
    error::{MatrixError, Result},
    matrix::Matrix,
};

/// Applies an indexed per-cell operation, returning a new matrix.
///
/// The result starts as a deep clone of `matrix` and cells are overwritten
/// in row-major order (row ascending, then column ascending). The operation
/// receives `(row, column, in_progress)` where `in_progress` is the clone's
/// evolving state: cells not yet overwritten in this pass still hold their
/// original values, cells already overwritten hold their new ones. The
/// input matrix is never touched.
///
/// # Examples
/// ```
/// use matrust::{matrix, ops::map};
///
/// let m = matrix!([[1, 2], [3, 4]]);
/// let negated = map(&m, |i, j, current| -current[[i, j]]);
/// assert_eq!(negated, matrix!([[-1, -2], [-3, -4]]));
/// assert_eq!(m[[0, 0]], 1);
/// ```
pub fn map<T, F>(matrix: &Matrix<T>, mut op: F) -> Matrix<T>
where
    T: Clone,
    F: FnMut(usize, usize, &Matrix<T>) -> T,
{
    let mut out = matrix.clone();
    for i in 0..out.rows() {
        for j in 0..out.columns() {
            let value = op(i, j, &out);
            out[[i, j]] = value;
        }
    }
    out
}

/// Applies a function to every cell value, returning a new matrix.
pub fn apply<T, F>(matrix: &Matrix<T>, f: F) -> Matrix<T>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    let values = matrix.as_slice().iter().map(f).collect();
    Matrix::from_parts(matrix.rows(), matrix.columns(), values)
}

/// Combines two equally-shaped matrices cell by cell.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the operands differ in shape.
pub fn zip_with<T, F>(lhs: &Matrix<T>, rhs: &Matrix<T>, mut f: F) -> Result<Matrix<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> T,
{
    if lhs.dims() != rhs.dims() {
        return Err(MatrixError::dimension_mismatch(lhs.dims(), rhs.dims()));
    }

    let values = lhs
        .as_slice()
        .iter()
        .zip(rhs.as_slice())
        .map(|(a, b)| f(a, b))
        .collect();
    Ok(Matrix::from_parts(lhs.rows(), lhs.columns(), values))
}
