//! Macros for creating matrices with a convenient literal syntax.

/// Creates a new matrix from a list of values.
///
/// A flat list builds a column vector, the shape
/// [`crate::Matrix::from_vec`] produces; a nested list builds a matrix
/// row by row.
///
/// # Panics
///
/// Panics if the rows of a nested literal have inconsistent lengths.
///
/// # Examples
/// ```
/// use matrust::matrix;
///
/// // Column vector
/// let v = matrix!([1, 2, 3]);
/// assert_eq!(v.dims(), (3, 1));
///
/// // 2x2 matrix
/// let m = matrix!([[1, 2], [3, 4]]);
/// assert_eq!(m.dims(), (2, 2));
/// assert_eq!(m[[1, 0]], 3);
/// ```
#[macro_export]
macro_rules! matrix {
    // Nested case: one inner list per row. This arm must come first: a
    // bracketed row is itself a valid `expr`, so the flat arm would
    // otherwise swallow nested literals as rows of arrays.
    ([$([$($x:expr),+ $(,)?]),+ $(,)?]) => {
        $crate::Matrix::from_rows(vec![$(vec![$($x),+]),+])
            .expect("inconsistent row lengths in matrix literal")
    };

    // Flat case: a column vector.
    ([$($x:expr),+ $(,)?]) => {
        $crate::Matrix::from_vec(vec![$($x),+])
    };
}
