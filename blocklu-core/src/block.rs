//! Sub-matrix extraction and block assembly.
//!
//! Slice ranges are half-open and must select at least one row and one
//! column of the matrix they are applied to.

use crate::error::{MatrixError, Result};
use crate::matrix::{check_dims, DenseMatrix};
use num_traits::Float;

impl<T: Float> DenseMatrix<T> {
    /// Rows `i1..i2`, all columns.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`DenseMatrix::slice`].
    pub fn slice_rows(&self, i1: usize, i2: usize) -> Self {
        self.slice(i1, i2, 0, self.cols())
    }

    /// All rows, columns `j1..j2`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`DenseMatrix::slice`].
    pub fn slice_columns(&self, j1: usize, j2: usize) -> Self {
        self.slice(0, self.rows(), j1, j2)
    }

    /// Rows `i1..i2`, columns `j1..j2`.
    ///
    /// # Panics
    ///
    /// Panics if either range is empty or extends past the matrix.
    pub fn slice(&self, i1: usize, i2: usize, j1: usize, j2: usize) -> Self {
        assert!(
            i1 < i2 && i2 <= self.rows(),
            "row range {}..{} out of bounds for {} rows",
            i1,
            i2,
            self.rows()
        );
        assert!(
            j1 < j2 && j2 <= self.cols(),
            "column range {}..{} out of bounds for {} columns",
            j1,
            j2,
            self.cols()
        );
        let mut data = Vec::with_capacity((i2 - i1) * (j2 - j1));
        for i in i1..i2 {
            data.extend_from_slice(&self.row(i)[j1..j2]);
        }
        Self::from_parts(i2 - i1, j2 - j1, data)
    }

    /// Assembles a matrix from a grid of blocks.
    ///
    /// Each inner `Vec` is a block-row: its blocks must share a row count and
    /// are concatenated horizontally. Block-rows are stacked vertically and
    /// must all add up to the same number of columns.
    pub fn block(grid: &[Vec<&Self>]) -> Result<Self> {
        let first_row = grid.first().ok_or_else(|| {
            MatrixError::ShapeMismatch("block grid must contain at least one block-row".to_string())
        })?;
        let cols: usize = first_row.iter().map(|b| b.cols()).sum();

        let mut rows = 0;
        for (r, block_row) in grid.iter().enumerate() {
            let height = match block_row.first() {
                Some(b) => b.rows(),
                None => {
                    return Err(MatrixError::ShapeMismatch(format!(
                        "block-row {} is empty",
                        r
                    )))
                }
            };
            if let Some(b) = block_row.iter().find(|b| b.rows() != height) {
                return Err(MatrixError::ShapeMismatch(format!(
                    "block-row {} mixes heights {} and {}",
                    r,
                    height,
                    b.rows()
                )));
            }
            let width: usize = block_row.iter().map(|b| b.cols()).sum();
            if width != cols {
                return Err(MatrixError::ShapeMismatch(format!(
                    "block-row {} spans {} columns, expected {}",
                    r, width, cols
                )));
            }
            rows += height;
        }

        let mut data = Vec::with_capacity(rows * cols);
        for block_row in grid {
            for i in 0..block_row[0].rows() {
                for b in block_row {
                    data.extend_from_slice(b.row(i));
                }
            }
        }
        Ok(Self::from_parts(rows, cols, data))
    }

    /// An `m x n` matrix of zeros. Both dimensions must be at least 1.
    pub fn zeros(m: usize, n: usize) -> Result<Self> {
        check_dims(m, n)?;
        Ok(Self::from_parts(m, n, vec![T::zero(); m * n]))
    }

    /// The `n x n` identity matrix. `n` must be at least 1.
    pub fn identity(n: usize) -> Result<Self> {
        check_dims(n, n)?;
        Ok(Self::from_fn(n, n, |i, j| {
            if i == j {
                T::one()
            } else {
                T::zero()
            }
        }))
    }

    /// Copies of the rows listed in `order`, in that order.
    pub fn select_rows(&self, order: &[usize]) -> Result<Self> {
        check_dims(order.len(), self.cols())?;
        let mut data = Vec::with_capacity(order.len() * self.cols());
        for &i in order {
            if i >= self.rows() {
                return Err(MatrixError::ShapeMismatch(format!(
                    "row index {} out of range for {} rows",
                    i,
                    self.rows()
                )));
            }
            data.extend_from_slice(self.row(i));
        }
        Ok(Self::from_parts(order.len(), self.cols(), data))
    }
}
