use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Invalid matrix shape: {0}")]
    InvalidShape(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Matrix must be square (dims: {rows}x{cols})")]
    NonSquare { rows: usize, cols: usize },
}

pub type Result<T> = core::result::Result<T, MatrixError>;
