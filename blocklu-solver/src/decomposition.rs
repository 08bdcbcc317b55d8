//! Recursive Schur-complement LU and LUP decomposition.
//!
//! At every level the leading row and column are split off, the Schur
//! complement `a22 - a21 * a12 / a11` of the trailing block is decomposed
//! recursively and the factors are reassembled with [`DenseMatrix::block`].
//! Recursion depth equals the matrix order; see
//! [`EliminationLup`](crate::algorithms::EliminationLup) for a loop-based
//! variant producing the same factors.

use blocklu_core::{DenseMatrix, Matrix, Result};
use num_traits::Float;
use std::fmt::Debug;

/// Factors of an unpivoted decomposition, `A = L * U`.
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors<T: Float> {
    /// Unit lower-triangular factor.
    pub l: DenseMatrix<T>,
    /// Upper-triangular factor; its diagonal holds the pivots.
    pub u: DenseMatrix<T>,
}

/// Factors of a partially pivoted decomposition, `P * A = L * U`.
#[derive(Debug, Clone, PartialEq)]
pub struct LupFactors<T: Float> {
    /// Unit lower-triangular factor.
    pub l: DenseMatrix<T>,
    /// Upper-triangular factor; its diagonal holds the pivots.
    pub u: DenseMatrix<T>,
    /// Row permutation matrix.
    pub p: DenseMatrix<T>,
    row_order: Vec<usize>,
    row_exchanges: usize,
}

impl<T: Float> LupFactors<T> {
    pub(crate) fn new(
        l: DenseMatrix<T>,
        u: DenseMatrix<T>,
        p: DenseMatrix<T>,
        row_order: Vec<usize>,
        row_exchanges: usize,
    ) -> Self {
        Self {
            l,
            u,
            p,
            row_order,
            row_exchanges,
        }
    }

    pub fn order(&self) -> usize {
        self.row_order.len()
    }

    /// The permutation as an index vector: row `k` of `P * A` is row
    /// `row_order()[k]` of `A`.
    pub fn row_order(&self) -> &[usize] {
        &self.row_order
    }

    /// Number of elimination steps whose pivot row was not already leading.
    pub fn row_exchanges(&self) -> usize {
        self.row_exchanges
    }

    /// Minimum number of transpositions composing `P` (`n - cycles`).
    pub fn permutation_parity(&self) -> usize {
        let n = self.row_order.len();
        let mut seen = vec![false; n];
        let mut cycles = 0;
        for start in 0..n {
            if seen[start] {
                continue;
            }
            cycles += 1;
            let mut j = start;
            while !seen[j] {
                seen[j] = true;
                j = self.row_order[j];
            }
        }
        n - cycles
    }

    /// `det(P)`, either `1` or `-1`.
    pub fn permutation_sign(&self) -> T {
        if self.permutation_parity() % 2 == 0 {
            T::one()
        } else {
            -T::one()
        }
    }

    /// `det(A) = det(P) * det(L) * det(U)` with `det(L) = 1`.
    pub fn det(&self) -> T {
        self.u
            .diagonal()
            .into_iter()
            .fold(self.permutation_sign(), |acc, pivot| acc * pivot)
    }
}

/// Decomposes a square matrix into `A = L * U` without pivoting.
///
/// A zero leading pivot at any level yields non-finite entries in the
/// factors; use [`lup_decomp`] when that can happen.
pub fn lu_decomp<T: Float + Debug>(a: &DenseMatrix<T>) -> Result<LuFactors<T>> {
    a.ensure_square()?;
    log::debug!("LU decomposition of order {}", a.rows());
    lu_recursive(a)
}

fn lu_recursive<T: Float>(a: &DenseMatrix<T>) -> Result<LuFactors<T>> {
    let m = a.rows();
    if m == 1 {
        return Ok(LuFactors {
            l: DenseMatrix::identity(1)?,
            u: a.clone(),
        });
    }

    let pivot = a[(0, 0)];
    warn_on_zero_pivot(pivot, m);
    let a11 = DenseMatrix::from_scalar(pivot);
    let a12 = a.slice(0, 1, 1, m);
    let a21 = a.slice(1, m, 0, 1);
    let a22 = a.slice(1, m, 1, m);

    let l21 = a21.scalar_multiply(T::one() / pivot);
    let s22 = a22.subtract(&l21.multiply(&a12)?)?;
    let LuFactors { l: l22, u: u22 } = lu_recursive(&s22)?;

    let one = DenseMatrix::identity(1)?;
    let zero_row = DenseMatrix::zeros(1, m - 1)?;
    let zero_col = DenseMatrix::zeros(m - 1, 1)?;
    let l = DenseMatrix::block(&[vec![&one, &zero_row], vec![&l21, &l22]])?;
    let u = DenseMatrix::block(&[vec![&a11, &a12], vec![&zero_col, &u22]])?;
    Ok(LuFactors { l, u })
}

/// Decomposes a square matrix into `P * A = L * U`, choosing the
/// largest-magnitude entry of the leading column as pivot at every level.
pub fn lup_decomp<T: Float + Debug>(a: &DenseMatrix<T>) -> Result<LupFactors<T>> {
    a.ensure_square()?;
    log::debug!("LUP decomposition of order {}", a.rows());
    let factors = lup_recursive(a)?;
    log::debug!(
        "LUP decomposition done: row order {:?}, {} row exchanges",
        factors.row_order,
        factors.row_exchanges
    );
    Ok(factors)
}

fn lup_recursive<T: Float>(a: &DenseMatrix<T>) -> Result<LupFactors<T>> {
    let m = a.rows();
    if m == 1 {
        return Ok(LupFactors::new(
            DenseMatrix::identity(1)?,
            a.clone(),
            DenseMatrix::identity(1)?,
            vec![0],
            0,
        ));
    }

    let i = a.column_argmax(0);
    log::trace!("order {}: pivot row {}", m, i);
    let a_bar = move_row_to_front(a, i)?;

    let pivot = a_bar[(0, 0)];
    warn_on_zero_pivot(pivot, m);
    let inv_pivot = T::one() / pivot;
    let a11 = DenseMatrix::from_scalar(pivot);
    let a12 = a_bar.slice(0, 1, 1, m);
    let a21 = a_bar.slice(1, m, 0, 1);
    let a22 = a_bar.slice(1, m, 1, m);

    let s22 = a22.subtract(&a21.multiply(&a12)?.scalar_multiply(inv_pivot))?;
    let sub = lup_recursive(&s22)?;

    // The trailing rows are reordered by the inner permutation, so their
    // multipliers must follow.
    let l21 = sub.p.multiply(&a21)?.scalar_multiply(inv_pivot);

    let one = DenseMatrix::identity(1)?;
    let zero_row = DenseMatrix::zeros(1, m - 1)?;
    let zero_col = DenseMatrix::zeros(m - 1, 1)?;
    let l = DenseMatrix::block(&[vec![&one, &zero_row], vec![&l21, &sub.l]])?;
    let u = DenseMatrix::block(&[vec![&a11, &a12], vec![&zero_col, &sub.u]])?;
    let p2 = DenseMatrix::block(&[vec![&one, &zero_row], vec![&zero_col, &sub.p]])?;
    let p = move_first_column_to(&p2, i)?;

    // Position r of a_bar holds row r - 1 of `a` for r <= i and row r after it.
    let mut row_order = Vec::with_capacity(m);
    row_order.push(i);
    row_order.extend(
        sub.row_order
            .iter()
            .map(|&s| if s < i { s } else { s + 1 }),
    );
    let row_exchanges = sub.row_exchanges + usize::from(i != 0);

    Ok(LupFactors::new(l, u, p, row_order, row_exchanges))
}

/// Row `i` first, then the remaining rows in their original order.
fn move_row_to_front<T: Float>(a: &DenseMatrix<T>, i: usize) -> Result<DenseMatrix<T>> {
    if i == 0 {
        return Ok(a.clone());
    }
    let m = a.rows();
    let pivot_row = a.slice_rows(i, i + 1);
    let above = a.slice_rows(0, i);
    let below = (i + 1 < m).then(|| a.slice_rows(i + 1, m));

    let mut grid = vec![vec![&pivot_row], vec![&above]];
    if let Some(below) = &below {
        grid.push(vec![below]);
    }
    DenseMatrix::block(&grid)
}

/// Column 0 moves to position `i`; columns `1..=i` shift left by one.
///
/// With `A_bar = Q * A` the result is `P2 * Q`, which keeps `P * A = L * U`.
fn move_first_column_to<T: Float>(p2: &DenseMatrix<T>, i: usize) -> Result<DenseMatrix<T>> {
    if i == 0 {
        return Ok(p2.clone());
    }
    let m = p2.cols();
    let shifted = p2.slice_columns(1, i + 1);
    let first = p2.slice_columns(0, 1);
    let rest = (i + 1 < m).then(|| p2.slice_columns(i + 1, m));

    let mut blocks = vec![&shifted, &first];
    if let Some(rest) = &rest {
        blocks.push(rest);
    }
    DenseMatrix::block(&[blocks])
}

pub(crate) fn warn_on_zero_pivot<T: Float>(pivot: T, order: usize) {
    if pivot == T::zero() {
        log::warn!(
            "zero pivot at order {}; factors will contain non-finite values",
            order
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocklu_core::MatrixError;

    fn assert_close(a: &DenseMatrix<f64>, b: &DenseMatrix<f64>, tolerance: f64) {
        assert_eq!(a.shape(), b.shape(), "Matrix shapes differ");
        for (i, (x, y)) in a.data().iter().zip(b.data()).enumerate() {
            assert!(
                (x - y).abs() <= tolerance,
                "Mismatch at flat index {}: {} vs {}",
                i,
                x,
                y
            );
        }
    }

    fn is_unit_lower(l: &DenseMatrix<f64>) -> bool {
        let n = l.rows();
        (0..n).all(|i| l[(i, i)] == 1.0 && (i + 1..n).all(|j| l[(i, j)] == 0.0))
    }

    fn is_upper(u: &DenseMatrix<f64>) -> bool {
        let n = u.rows();
        (0..n).all(|i| (0..i).all(|j| u[(i, j)] == 0.0))
    }

    #[test]
    fn test_lu_decomp_reconstructs() -> Result<()> {
        let a = DenseMatrix::from_rows(&[[4.0, 3.0, 2.0], [2.0, 1.0, 3.0], [3.0, 2.0, 1.0]])?;
        let LuFactors { l, u } = lu_decomp(&a)?;
        assert!(is_unit_lower(&l));
        assert!(is_upper(&u));
        assert_close(&l.multiply(&u)?, &a, 1e-12);
        Ok(())
    }

    #[test]
    fn test_lu_decomp_single_entry() -> Result<()> {
        let a = DenseMatrix::from_scalar(7.0);
        let factors = lu_decomp(&a)?;
        assert_eq!(factors.l, DenseMatrix::identity(1)?);
        assert_eq!(factors.u, a);
        Ok(())
    }

    #[test]
    fn test_lu_decomp_zero_pivot_is_not_finite() -> Result<()> {
        let a = DenseMatrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]])?;
        let factors = lu_decomp(&a)?;
        assert!(factors.l.data().iter().any(|x| !x.is_finite()));
        Ok(())
    }

    #[test]
    fn test_lup_decomp_non_square() -> Result<()> {
        let a = DenseMatrix::<f64>::zeros(2, 3)?;
        assert_eq!(
            lup_decomp(&a).err(),
            Some(MatrixError::NonSquare { rows: 2, cols: 3 })
        );
        assert!(matches!(lu_decomp(&a), Err(MatrixError::NonSquare { .. })));
        Ok(())
    }

    #[test]
    fn test_lup_decomp_pivot_from_third_row() -> Result<()> {
        // Largest entry of the first column sits below the second row.
        let a = DenseMatrix::from_rows(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [2.0, 0.0, 1.0]])?;
        let factors = lup_decomp(&a)?;
        let expected_p =
            DenseMatrix::from_rows(&[[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]])?;
        assert_eq!(factors.p, expected_p);
        assert_eq!(factors.row_order(), &[2, 1, 0]);
        assert_eq!(factors.row_exchanges(), 2);
        assert_eq!(factors.permutation_parity(), 1);
        assert_close(&factors.p.multiply(&a)?, &factors.l.multiply(&factors.u)?, 1e-12);
        Ok(())
    }

    #[test]
    fn test_lup_decomp_matches_row_order() -> Result<()> {
        let a = DenseMatrix::from_rows(&[
            [1.0, 2.0, 0.0, 1.0],
            [2.0, 1.0, 3.0, 0.0],
            [-4.0, 0.0, 1.0, 2.0],
            [0.0, 3.0, 1.0, 5.0],
        ])?;
        let factors = lup_decomp(&a)?;
        assert_eq!(factors.p, DenseMatrix::identity(4)?.select_rows(factors.row_order())?);
        assert!(is_unit_lower(&factors.l));
        assert!(is_upper(&factors.u));
        assert_close(&factors.p.multiply(&a)?, &factors.l.multiply(&factors.u)?, 1e-12);
        Ok(())
    }

    #[test]
    fn test_lup_decomp_multipliers_bounded() -> Result<()> {
        let a = DenseMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]])?;
        let factors = lup_decomp(&a)?;
        assert!(factors.l.data().iter().all(|x| x.abs() <= 1.0));
        Ok(())
    }

    #[test]
    fn test_row_swap_scenario() -> Result<()> {
        let a = DenseMatrix::from_rows(&[[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]])?;
        let factors = lup_decomp(&a)?;
        assert_eq!(factors.l, DenseMatrix::identity(3)?);
        assert_eq!(factors.u, DenseMatrix::identity(3)?);
        assert_eq!(factors.p, a);
        assert_eq!(factors.permutation_sign(), -1.0);
        assert_eq!(factors.det(), -1.0);
        Ok(())
    }

    #[test]
    fn test_identity_has_even_permutation() -> Result<()> {
        let factors = lup_decomp(&DenseMatrix::<f64>::identity(4)?)?;
        assert_eq!(factors.row_exchanges(), 0);
        assert_eq!(factors.permutation_sign(), 1.0);
        assert_eq!(factors.det(), 1.0);
        Ok(())
    }
}
