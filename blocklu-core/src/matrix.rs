use crate::error::{MatrixError, Result};
use crate::traits::Matrix;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Represents a dense matrix of real numbers stored in row-major order.
///
/// The shape is fixed at construction and every operation returns a new
/// matrix; there is no public way to mutate an existing instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Vec<T>>",
    into = "Vec<Vec<T>>",
    bound(
        serialize = "T: Float + Serialize",
        deserialize = "T: Float + Deserialize<'de>"
    )
)]
pub struct DenseMatrix<T: Float> {
    rows: usize,
    cols: usize,
    data: Vec<T>, // Data stored row-major: data[row * cols + col]
}

/// Rejects shapes with no rows or no columns.
pub(crate) fn check_dims(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidShape(format!(
            "Dimensions must be at least 1x1 (got {}x{})",
            rows, cols
        )));
    }
    Ok(())
}

impl<T: Float> DenseMatrix<T> {
    /// Creates a new DenseMatrix from raw data, dimensions, assuming row-major order.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        check_dims(rows, cols)?;
        if data.len() != rows * cols {
            return Err(MatrixError::InvalidShape(format!(
                "Data length ({}) does not match dimensions ({}x{})",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a new DenseMatrix from a sequence of equally sized rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = match rows.first() {
            Some(first) => first.as_ref().len(),
            None => {
                return Err(MatrixError::InvalidShape(
                    "Matrix must have at least one row".to_string(),
                ))
            }
        };
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::InvalidShape(format!(
                    "Row {} has {} elements, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }
        Self::new(rows.len(), cols, data)
    }

    /// Creates a 1x1 matrix holding `value`.
    pub fn from_scalar(value: T) -> Self {
        Self {
            rows: 1,
            cols: 1,
            data: vec![value],
        }
    }

    /// Builds a matrix by evaluating `f(i, j)` for every entry.
    pub(crate) fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    // --- Getters ---

    /// Returns the shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a slice view of the underlying row-major data.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Gets the element at the specified row and column.
    /// Returns None if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.cols).map(<[T]>::to_vec).collect()
    }

    /// Entries `a[i][i]` for `i < min(rows, cols)`.
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.rows.min(self.cols)).map(|i| self[(i, i)]).collect()
    }

    // --- Arithmetic ---

    /// Elementwise `x * k`.
    pub fn scalar_multiply(&self, k: T) -> Self {
        Self::from_parts(
            self.rows,
            self.cols,
            self.data.iter().map(|&x| x * k).collect(),
        )
    }

    /// Elementwise `self - other`.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch(format!(
                "cannot subtract a {}x{} matrix from a {}x{} matrix",
                other.rows, other.cols, self.rows, self.cols
            )));
        }
        Ok(Self::from_parts(
            self.rows,
            self.cols,
            self.data
                .iter()
                .zip(&other.data)
                .map(|(&x, &y)| x - y)
                .collect(),
        ))
    }

    /// Standard matrix product `self * other`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrixError::ShapeMismatch(format!(
                "cannot multiply a {}x{} matrix by a {}x{} matrix",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        Ok(Self::from_fn(self.rows, other.cols, |i, j| {
            let mut sum = T::zero();
            for k in 0..self.cols {
                sum = sum + self[(i, k)] * other[(k, j)];
            }
            sum
        }))
    }

    /// Row index of the largest-magnitude entry in column `j`.
    /// Ties keep the lowest index.
    pub fn column_argmax(&self, j: usize) -> usize {
        let mut argmax = 0;
        for i in 1..self.rows {
            if self[(i, j)].abs() > self[(argmax, j)].abs() {
                argmax = i;
            }
        }
        argmax
    }
}

impl<T: Float> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T: Float> TryFrom<Vec<Vec<T>>> for DenseMatrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl<T: Float> From<DenseMatrix<T>> for Vec<Vec<T>> {
    fn from(matrix: DenseMatrix<T>) -> Self {
        matrix.to_rows()
    }
}

impl<T: Float + std::fmt::Debug> Matrix for DenseMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    // rows(), cols(), is_square() are provided by default impls in the trait
}

#[cfg(test)]
mod tests {
    use crate::{DenseMatrix, Matrix, MatrixError};

    #[test]
    fn test_from_rows_shape() -> Result<(), MatrixError> {
        let m = DenseMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.dims(), (2, 3));
        assert!(!m.is_square());
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m.get(1, 0), Some(4.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
        Ok(())
    }

    #[test]
    fn test_from_rows_ragged() {
        let m = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        match m {
            Err(MatrixError::InvalidShape(msg)) => assert!(msg.contains("Row 1 has 1 elements")),
            other => panic!("Expected InvalidShape error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(
            DenseMatrix::from_rows(&rows),
            Err(MatrixError::InvalidShape(_))
        ));
        assert!(matches!(
            DenseMatrix::<f64>::from_rows(&[Vec::new()]),
            Err(MatrixError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_new_invalid_length() {
        match DenseMatrix::new(2, 2, vec![1.0, 2.0, 3.0]) {
            Err(MatrixError::InvalidShape(msg)) => assert!(msg.contains("Data length (3)")),
            other => panic!("Expected InvalidShape error, got {:?}", other),
        }
    }

    #[test]
    fn test_scalar_multiply() -> Result<(), MatrixError> {
        let m = DenseMatrix::from_rows(&[[1.0, -2.0], [0.5, 4.0]])?;
        let expected = DenseMatrix::from_rows(&[[3.0, -6.0], [1.5, 12.0]])?;
        assert_eq!(m.scalar_multiply(3.0), expected);
        Ok(())
    }

    #[test]
    fn test_subtract() -> Result<(), MatrixError> {
        let a = DenseMatrix::from_rows(&[[5.0, 4.0], [3.0, 2.0]])?;
        let b = DenseMatrix::from_rows(&[[1.0, 1.0], [1.0, 3.0]])?;
        let expected = DenseMatrix::from_rows(&[[4.0, 3.0], [2.0, -1.0]])?;
        assert_eq!(a.subtract(&b)?, expected);
        Ok(())
    }

    #[test]
    fn test_subtract_shape_mismatch() -> Result<(), MatrixError> {
        let a = DenseMatrix::<f64>::zeros(2, 2)?;
        let b = DenseMatrix::<f64>::zeros(3, 3)?;
        match a.subtract(&b) {
            Err(MatrixError::ShapeMismatch(msg)) => assert!(msg.contains("3x3")),
            other => panic!("Expected ShapeMismatch error, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_multiply() -> Result<(), MatrixError> {
        let a = DenseMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
        let b = DenseMatrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]])?;
        let expected = DenseMatrix::from_rows(&[[58.0, 64.0], [139.0, 154.0]])?;
        let product = a.multiply(&b)?;
        assert_eq!(product.shape(), (2, 2));
        assert_eq!(product, expected);
        Ok(())
    }

    #[test]
    fn test_multiply_shape_mismatch() -> Result<(), MatrixError> {
        let a = DenseMatrix::<f64>::zeros(2, 3)?;
        assert!(matches!(
            a.multiply(&a),
            Err(MatrixError::ShapeMismatch(_))
        ));
        Ok(())
    }

    #[test]
    fn test_column_argmax_first_index_wins_ties() -> Result<(), MatrixError> {
        let m = DenseMatrix::from_rows(&[[1.0, 0.0], [-3.0, 2.0], [3.0, -2.0]])?;
        assert_eq!(m.column_argmax(0), 1);
        assert_eq!(m.column_argmax(1), 1);
        let zeros = DenseMatrix::<f64>::zeros(3, 1)?;
        assert_eq!(zeros.column_argmax(0), 0);
        Ok(())
    }

    #[test]
    fn test_diagonal() -> Result<(), MatrixError> {
        let m = DenseMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
        assert_eq!(m.diagonal(), vec![1.0, 5.0]);
        Ok(())
    }

    #[test]
    fn test_serde_rows() -> Result<(), MatrixError> {
        let m = DenseMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.5]])?;
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.0,2.0],[3.0,4.5]]");
        let back: DenseMatrix<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        let ragged = serde_json::from_str::<DenseMatrix<f64>>("[[1.0,2.0],[3.0]]");
        assert!(ragged.is_err());
        Ok(())
    }
}
