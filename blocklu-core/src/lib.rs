//! # Dense Matrix Core
//!
//! Provides the immutable dense matrix container, block slicing and assembly,
//! and matrix formatting used by the block LU solvers.

pub mod block;
pub mod display;
pub mod error;
pub mod matrix;
pub mod traits;

// Re-export public types
pub use display::{DisplayConfig, MatrixDisplay};
pub use error::{MatrixError, Result};
pub use matrix::DenseMatrix;
pub use traits::Matrix;
