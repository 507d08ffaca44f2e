//! Core matrix type.
//!
//! This module provides the `Matrix` value type that the rest of the crate
//! operates on: a rectangular grid of numeric cells in row-major storage.
//! The pure operation set lives in [`crate::ops`], [`crate::linalg`] and
//! [`crate::random`]; this module carries construction, accessors, the
//! array conversions, and the in-place wrappers over the pure operations.

use crate::error::{MatrixError, Result};
use num_traits::Zero;
use std::{
    fmt,
    ops::{Add, Index, IndexMut, Mul, Sub},
};

/// A dense two-dimensional matrix.
///
/// Cells are stored row-major in a single owned `Vec`, so cloning is always
/// a deep copy and two `Matrix` values never share storage.
///
/// # Type Parameters
///
/// * `T`: The numeric cell type.
///
/// # Examples
/// ```
/// use matrust::Matrix;
///
/// let m = Matrix::new(2, 3, 0.0);
/// assert_eq!(m.dims(), (2, 3));
/// assert_eq!(m[[1, 2]], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    columns: usize,
    values: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Creates a `rows x columns` matrix with every cell set to
    /// `initial_value`.
    ///
    /// Zero rows or columns are permitted and yield an empty grid along
    /// that axis.
    pub fn new(rows: usize, columns: usize, initial_value: T) -> Self {
        Self {
            rows,
            columns,
            values: vec![initial_value; rows * columns],
        }
    }

    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the rows do not all have the same
    /// length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let columns = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(row_count * columns);
        for row in rows {
            if row.len() != columns {
                return Err(MatrixError::invalid_argument(format!(
                    "ragged rows: expected {} columns, got {}",
                    columns,
                    row.len()
                )));
            }
            values.extend(row);
        }
        Ok(Self {
            rows: row_count,
            columns,
            values,
        })
    }

    /// Converts a one-dimensional array into an `N x 1` column vector.
    ///
    /// # Examples
    /// ```
    /// use matrust::Matrix;
    ///
    /// let v = Matrix::from_vec(vec![1, 2, 3]);
    /// assert_eq!(v.dims(), (3, 1));
    /// assert_eq!(v[[1, 0]], 2);
    /// ```
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            rows: values.len(),
            columns: 1,
            values,
        }
    }

    /// Converts a single-column matrix back into a one-dimensional array,
    /// the inverse of [`Matrix::from_vec`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for matrices with more than one column;
    /// only column vectors round-trip.
    pub fn to_vec(&self) -> Result<Vec<T>> {
        if self.columns != 1 {
            return Err(MatrixError::invalid_argument(format!(
                "to_vec expects a single-column matrix, got {} columns",
                self.columns
            )));
        }
        Ok(self.values.clone())
    }

    /// Returns the cells as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        if self.columns == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.values
            .chunks(self.columns)
            .map(<[T]>::to_vec)
            .collect()
    }

    /// Internal constructor from already-flattened row-major cells.
    ///
    /// Callers must pass exactly `rows * columns` values.
    pub(crate) fn from_parts(rows: usize, columns: usize, values: Vec<T>) -> Self {
        debug_assert_eq!(values.len(), rows * columns);
        Self {
            rows,
            columns,
            values,
        }
    }
}

impl<T> Matrix<T> {
    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the `(rows, columns)` shape pair.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Returns the total number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a row-major slice over all cells.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns the cell at `(row, column)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row < self.rows && column < self.columns {
            self.values.get(row * self.columns + column)
        } else {
            None
        }
    }

    /// Mutable variant of [`Matrix::get`].
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if row < self.rows && column < self.columns {
            self.values.get_mut(row * self.columns + column)
        } else {
            None
        }
    }
}

/// In-place wrappers over the pure operation set.
///
/// Each wrapper computes the pure result first and assigns its grid back
/// onto the receiver, so on error the receiver is left untouched and no
/// partial update is ever observable.
impl<T: Clone> Matrix<T> {
    /// Applies `op` to every cell in place; see [`crate::ops::map`] for
    /// the traversal contract.
    pub fn map_mut<F>(&mut self, op: F)
    where
        F: FnMut(usize, usize, &Matrix<T>) -> T,
    {
        *self = crate::ops::map(self, op);
    }

    /// Adds `other` into `self` cell by cell.
    pub fn add_mut(&mut self, other: &Matrix<T>) -> Result<()>
    where
        T: Add<Output = T>,
    {
        *self = crate::ops::add(self, other)?;
        Ok(())
    }

    /// Subtracts `other` from `self` cell by cell.
    pub fn sub_mut(&mut self, other: &Matrix<T>) -> Result<()>
    where
        T: Sub<Output = T>,
    {
        *self = crate::ops::sub(self, other)?;
        Ok(())
    }

    /// Multiplies `self` by `other` cell by cell (Hadamard product).
    pub fn hadamard_mut(&mut self, other: &Matrix<T>) -> Result<()>
    where
        T: Mul<Output = T>,
    {
        *self = crate::ops::hadamard(self, other)?;
        Ok(())
    }

    /// Adds `inc` to every cell.
    pub fn increment_mut(&mut self, inc: T)
    where
        T: Add<Output = T>,
    {
        *self = crate::ops::increment(self, inc);
    }

    /// Subtracts `dec` from every cell.
    pub fn decrement_mut(&mut self, dec: T)
    where
        T: Sub<Output = T>,
    {
        *self = crate::ops::decrement(self, dec);
    }

    /// Multiplies every cell by `factor`.
    pub fn scale_mut(&mut self, factor: T)
    where
        T: Mul<Output = T>,
    {
        *self = crate::ops::scale(self, factor);
    }
}

impl<T: Clone + Zero> Default for Matrix<T> {
    /// The `1 x 1` zero matrix.
    fn default() -> Self {
        Self::new(1, 1, T::zero())
    }
}

impl<T> Index<[usize; 2]> for Matrix<T> {
    type Output = T;

    fn index(&self, [row, column]: [usize; 2]) -> &T {
        assert!(
            row < self.rows && column < self.columns,
            "index [{row}, {column}] out of bounds for {}x{} matrix",
            self.rows,
            self.columns
        );
        &self.values[row * self.columns + column]
    }
}

impl<T> IndexMut<[usize; 2]> for Matrix<T> {
    fn index_mut(&mut self, [row, column]: [usize; 2]) -> &mut T {
        assert!(
            row < self.rows && column < self.columns,
            "index [{row}, {column}] out of bounds for {}x{} matrix",
            self.rows,
            self.columns
        );
        &mut self.values[row * self.columns + column]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            write!(f, "[")?;
            for j in 0..self.columns {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.values[i * self.columns + j])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
