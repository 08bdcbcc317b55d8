use num_traits::Float;
use std::fmt::Debug;

use crate::error::{MatrixError, Result};

/// Generic trait representing a matrix.
pub trait Matrix: Debug {
    /// The underlying real type of the matrix elements (e.g., f32, f64).
    type Value: Float + Debug;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }

    /// Returns `NonSquare` unless the matrix is square.
    fn ensure_square(&self) -> Result<()> {
        let (rows, cols) = self.dims();
        if rows != cols {
            return Err(MatrixError::NonSquare { rows, cols });
        }
        Ok(())
    }
}
