use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Dimension mismatch: {lhs:?} is incompatible with {rhs:?}")]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl MatrixError {
    pub fn dimension_mismatch(lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        MatrixError::DimensionMismatch { lhs, rhs }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        MatrixError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
