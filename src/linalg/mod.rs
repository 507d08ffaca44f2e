//! Linear-algebra operations.

mod matmul;
mod transpose;

pub use matmul::matmul;
pub use transpose::transpose;
