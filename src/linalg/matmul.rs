//! Matrix multiplication.

use crate::{
    error::{MatrixError, Result},
    matrix::Matrix,
};
use num_traits::Zero;
use std::ops::Mul;

/// Matrix product of `lhs` and `rhs`.
///
/// Produces an `lhs.rows x rhs.columns` matrix where each cell is the dot
/// product of an `lhs` row with an `rhs` column; the summation runs over
/// the inner dimension in ascending order.
///
/// # Errors
///
/// Returns `DimensionMismatch` unless `lhs.columns == rhs.rows`.
///
/// # Examples
/// ```
/// use matrust::{matrix, linalg::matmul};
///
/// let a = matrix!([[1, 2]]);
/// let b = matrix!([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!(matmul(&a, &b).unwrap(), matrix!([[9, 12, 15]]));
/// ```
pub fn matmul<T>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>>
where
    T: Clone + Zero + Mul<Output = T>,
{
    if lhs.columns() != rhs.rows() {
        return Err(MatrixError::dimension_mismatch(lhs.dims(), rhs.dims()));
    }

    let (m, k) = lhs.dims();
    let n = rhs.columns();

    let mut values = Vec::with_capacity(m * n);
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for l in 0..k {
                sum = sum + lhs[[i, l]].clone() * rhs[[l, j]].clone();
            }
            values.push(sum);
        }
    }

    Ok(Matrix::from_parts(m, n, values))
}
