//! matrust: a small dense-matrix value type.
//!
//! The crate centers on one type, [`Matrix`], a rectangular grid of
//! numeric cells, and a pure operation set over it: cell-wise arithmetic
//! and scalar operations ([`ops`]), matrix multiplication and transpose
//! ([`linalg`]), random fills with an injectable generator ([`random`]),
//! and conversions to and from one-dimensional arrays. Every pure
//! operation returns a new matrix and leaves its operands untouched; each
//! has a thin in-place counterpart on `Matrix` for callers that prefer
//! mutation.
//!
//! # Examples
//! ```
//! use matrust::{matrix, linalg, ops};
//!
//! let a = matrix!([[1, 2]]);
//! let b = matrix!([[1, 2, 3], [4, 5, 6]]);
//! let product = linalg::matmul(&a, &b)?;
//! assert_eq!(product, matrix!([[9, 12, 15]]));
//!
//! let doubled = ops::scale(&product, 2);
//! assert_eq!(doubled, matrix!([[18, 24, 30]]));
//! # Ok::<(), matrust::MatrixError>(())
//! ```

#[macro_use]
pub mod macros;

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod ops;
pub mod random;

pub use error::{MatrixError, Result};
pub use linalg::{matmul, transpose};
pub use matrix::Matrix;
pub use ops::{add, apply, decrement, hadamard, increment, map, scale, sub, zip_with};
pub use random::{randomized, DEFAULT_CEILING, DEFAULT_FLOOR};
