//! Arithmetic operations over matrices.

use crate::{
    error::Result,
    matrix::Matrix,
    ops::elementwise::{apply, zip_with},
};
use std::ops::{Add, Mul, Sub};

/// Cell-wise addition of two equally-shaped matrices.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the operands differ in shape.
pub fn add<T>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>>
where
    T: Clone + Add<Output = T>,
{
    zip_with(lhs, rhs, |a, b| a.clone() + b.clone())
}

/// Cell-wise subtraction of two equally-shaped matrices.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the operands differ in shape.
pub fn sub<T>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>>
where
    T: Clone + Sub<Output = T>,
{
    zip_with(lhs, rhs, |a, b| a.clone() - b.clone())
}

/// Entrywise (Hadamard) product of two equally-shaped matrices.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the operands differ in shape.
pub fn hadamard<T>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>>
where
    T: Clone + Mul<Output = T>,
{
    zip_with(lhs, rhs, |a, b| a.clone() * b.clone())
}

/// Adds a scalar to every cell.
pub fn increment<T>(matrix: &Matrix<T>, inc: T) -> Matrix<T>
where
    T: Clone + Add<Output = T>,
{
    apply(matrix, |v| v.clone() + inc.clone())
}

/// Subtracts a scalar from every cell.
pub fn decrement<T>(matrix: &Matrix<T>, dec: T) -> Matrix<T>
where
    T: Clone + Sub<Output = T>,
{
    apply(matrix, |v| v.clone() - dec.clone())
}

/// Multiplies every cell by a scalar.
pub fn scale<T>(matrix: &Matrix<T>, factor: T) -> Matrix<T>
where
    T: Clone + Mul<Output = T>,
{
    apply(matrix, |v| v.clone() * factor.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::MatrixError, matrix};

    #[test]
    fn test_add() {
        let a = Matrix::new(3, 3, 2);
        let b = Matrix::new(3, 3, 4);
        let sum = add(&a, &b).unwrap();
        assert!(sum.as_slice().iter().all(|&v| v == 6));
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = Matrix::new(2, 2, 1);
        let b = Matrix::new(3, 3, 1);
        let err = add(&a, &b).unwrap_err();
        assert_eq!(err, MatrixError::dimension_mismatch((2, 2), (3, 3)));
    }

    #[test]
    fn test_sub() {
        let a = Matrix::new(3, 3, 2);
        let b = Matrix::new(3, 3, 4);
        let diff = sub(&a, &b).unwrap();
        assert!(diff.as_slice().iter().all(|&v| v == -2));
    }

    #[test]
    fn test_add_then_sub_restores_the_left_operand() {
        let a = matrix!([[1, -2], [3, 0]]);
        let b = matrix!([[4, 5], [-6, 7]]);
        let sum = add(&a, &b).unwrap();
        assert_eq!(sub(&sum, &b).unwrap(), a);
    }

    #[test]
    fn test_hadamard() {
        let a = Matrix::new(2, 2, 2);
        let b = Matrix::new(2, 2, 2);
        let product = hadamard(&a, &b).unwrap();
        assert!(product.as_slice().iter().all(|&v| v == 4));
    }

    #[test]
    fn test_hadamard_dimension_mismatch() {
        // The shape check applies to the entrywise product just like it
        // does to add and sub.
        let a = Matrix::new(2, 3, 1);
        let b = Matrix::new(3, 2, 1);
        let err = hadamard(&a, &b).unwrap_err();
        assert_eq!(err, MatrixError::dimension_mismatch((2, 3), (3, 2)));
    }

    #[test]
    fn test_increment() {
        let m = Matrix::new(3, 3, 2);
        let out = increment(&m, 7);
        assert!(out.as_slice().iter().all(|&v| v == 9));
    }

    #[test]
    fn test_decrement() {
        let m = Matrix::new(3, 3, 2);
        let out = decrement(&m, 7);
        assert!(out.as_slice().iter().all(|&v| v == -5));
    }

    #[test]
    fn test_scale() {
        let m = Matrix::new(3, 3, 9);
        let out = scale(&m, 3);
        assert!(out.as_slice().iter().all(|&v| v == 27));
    }

    #[test]
    fn test_scale_by_one_and_zero() {
        let m = matrix!([[1, 2], [3, 4]]);
        assert_eq!(scale(&m, 1), m);
        assert_eq!(scale(&m, 0), Matrix::new(2, 2, 0));
    }

    #[test]
    fn test_pure_ops_leave_operands_unchanged() {
        let a = matrix!([[1, 2], [3, 4]]);
        let b = matrix!([[5, 6], [7, 8]]);
        let _ = add(&a, &b).unwrap();
        let _ = sub(&a, &b).unwrap();
        let _ = hadamard(&a, &b).unwrap();
        let _ = scale(&a, 10);
        assert_eq!(a, matrix!([[1, 2], [3, 4]]));
        assert_eq!(b, matrix!([[5, 6], [7, 8]]));
    }

    #[test]
    fn test_in_place_wrappers() {
        let mut a = Matrix::new(3, 3, 2);
        a.add_mut(&Matrix::new(3, 3, 4)).unwrap();
        assert!(a.as_slice().iter().all(|&v| v == 6));

        a.scale_mut(2);
        assert!(a.as_slice().iter().all(|&v| v == 12));

        a.decrement_mut(12);
        assert!(a.as_slice().iter().all(|&v| v == 0));

        a.increment_mut(1);
        a.hadamard_mut(&Matrix::new(3, 3, 5)).unwrap();
        assert!(a.as_slice().iter().all(|&v| v == 5));
    }

    #[test]
    fn test_in_place_wrapper_keeps_receiver_on_error() {
        let mut a = Matrix::new(2, 2, 1);
        let b = Matrix::new(3, 3, 1);
        assert!(a.add_mut(&b).is_err());
        assert_eq!(a, Matrix::new(2, 2, 1));
    }
}
