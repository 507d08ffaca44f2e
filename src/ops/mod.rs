//! Pure matrix operations.
//!
//! Every function here takes its operands by reference and returns a new
//! matrix; the in-place forms live on [`crate::matrix::Matrix`] as thin
//! wrappers that assign the pure result back onto the receiver.

mod arithmetic;
mod elementwise;

pub use arithmetic::*;
pub use elementwise::*;
