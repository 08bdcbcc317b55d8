//! Linear solves, inverse and determinant on top of the LUP factors.

use blocklu_core::{DenseMatrix, Matrix, Result};
use num_traits::Float;
use std::fmt::Debug;

use crate::algorithms::{BlockLup, SolveAlgorithm};
use crate::decomposition::lup_decomp;
use crate::triangular::{backward_sub, forward_sub};

/// Solves `L * U * X = B` by forward then backward substitution.
pub fn lu_solve<T: Float + Debug>(
    l: &DenseMatrix<T>,
    u: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>> {
    let y = forward_sub(l, b)?;
    backward_sub(u, &y)
}

/// Solves `A * X = B` given `P * A = L * U`.
pub fn lup_solve<T: Float + Debug>(
    l: &DenseMatrix<T>,
    u: &DenseMatrix<T>,
    p: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>> {
    let z = p.multiply(b)?;
    lu_solve(l, u, &z)
}

/// Solves `A * X = B` for every column of `B`.
///
/// ```
/// use blocklu_solver::{solve, DenseMatrix};
///
/// let a: DenseMatrix<f64> = DenseMatrix::from_rows(&[[2.0, 1.0], [1.0, 3.0]]).unwrap();
/// let b = DenseMatrix::from_rows(&[[3.0], [4.0]]).unwrap();
/// let x = solve(&a, &b).unwrap();
/// assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!((x[(1, 0)] - 1.0).abs() < 1e-12);
/// ```
pub fn solve<T: Float + Debug>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
    BlockLup.solve(a, b).map(|result| result.x)
}

/// The inverse of a square matrix, computed as `solve(A, I)`.
pub fn inverse<T: Float + Debug>(a: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
    a.ensure_square()?;
    solve(a, &DenseMatrix::identity(a.rows())?)
}

/// The determinant of a square matrix from its LUP factors.
pub fn det<T: Float + Debug>(a: &DenseMatrix<T>) -> Result<T> {
    a.ensure_square()?;
    Ok(lup_decomp(a)?.det())
}
