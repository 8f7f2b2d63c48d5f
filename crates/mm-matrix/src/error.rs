use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("invalid matrix size {n}: {reason}")]
    InvalidSize { n: usize, reason: String },
    #[error(
        "block of size {block} at ({row_offset}, {col_offset}) is out of bounds for a {n}x{n} matrix"
    )]
    OutOfBounds {
        row_offset: usize,
        col_offset: usize,
        block: usize,
        n: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
