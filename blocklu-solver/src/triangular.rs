use blocklu_core::{DenseMatrix, Matrix, MatrixError, Result};
use num_traits::Float;
use std::fmt::Debug;

/// Solves `L * X = B` for lower-triangular `L`, one column of `B` per system.
///
/// Rows are resolved top to bottom. A zero on the diagonal is not guarded
/// against and yields non-finite entries.
pub fn forward_sub<T: Float + Debug>(
    l: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>> {
    validate_triangular_inputs("forward substitution", l, b)?;
    let (n, p) = b.shape();
    let mut x = vec![T::zero(); n * p];
    for i in 0..n {
        let diag = l[(i, i)];
        for c in 0..p {
            let mut acc = T::zero();
            for k in 0..i {
                acc = acc + l[(i, k)] * x[k * p + c];
            }
            x[i * p + c] = (b[(i, c)] - acc) / diag;
        }
    }
    DenseMatrix::new(n, p, x)
}

/// Solves `U * X = B` for upper-triangular `U`, one column of `B` per system.
///
/// Rows are resolved bottom to top. A zero on the diagonal is not guarded
/// against and yields non-finite entries.
pub fn backward_sub<T: Float + Debug>(
    u: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>> {
    validate_triangular_inputs("backward substitution", u, b)?;
    let (n, p) = b.shape();
    let mut x = vec![T::zero(); n * p];
    for i in (0..n).rev() {
        let diag = u[(i, i)];
        for c in 0..p {
            let mut acc = T::zero();
            for k in i + 1..n {
                acc = acc + u[(i, k)] * x[k * p + c];
            }
            x[i * p + c] = (b[(i, c)] - acc) / diag;
        }
    }
    DenseMatrix::new(n, p, x)
}

fn validate_triangular_inputs<T: Float + Debug>(
    operation: &str,
    t: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
) -> Result<()> {
    t.ensure_square()?;
    if t.rows() != b.rows() {
        return Err(MatrixError::ShapeMismatch(format!(
            "{}: triangular factor is {}x{} but right-hand side has {} rows",
            operation,
            t.rows(),
            t.cols(),
            b.rows()
        )));
    }
    Ok(())
}
