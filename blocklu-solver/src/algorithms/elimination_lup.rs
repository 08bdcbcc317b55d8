use blocklu_core::{DenseMatrix, Matrix, Result};
use num_traits::Float;
use std::fmt::Debug;

use super::{EliminationLup, SolveAlgorithm};
use crate::decomposition::{warn_on_zero_pivot, LupFactors};

impl<T: Float + Debug> SolveAlgorithm<T> for EliminationLup {
    /// Eliminates column by column on a working copy of `a`.
    ///
    /// The pivot row is rotated to the top of the active block rather than
    /// swapped, so the remaining rows keep their relative order and later
    /// pivot choices match the recursive construction. Multipliers are stored
    /// below the diagonal and travel with their rows.
    fn factorize(&self, a: &DenseMatrix<T>) -> Result<LupFactors<T>> {
        a.ensure_square()?;
        let n = a.rows();
        log::debug!("LUP elimination of order {}", n);

        let mut work = a.to_rows();
        let mut row_order: Vec<usize> = (0..n).collect();
        let mut row_exchanges = 0;

        for k in 0..n - 1 {
            let mut pivot_row = k;
            for r in k + 1..n {
                if work[r][k].abs() > work[pivot_row][k].abs() {
                    pivot_row = r;
                }
            }
            if pivot_row != k {
                log::trace!("step {}: pivot row {}", k, pivot_row);
                work[k..=pivot_row].rotate_right(1);
                row_order[k..=pivot_row].rotate_right(1);
                row_exchanges += 1;
            }

            let pivot = work[k][k];
            warn_on_zero_pivot(pivot, n - k);
            let inv_pivot = T::one() / pivot;
            for r in k + 1..n {
                let factor = work[r][k];
                for c in k + 1..n {
                    work[r][c] = work[r][c] - factor * work[k][c] * inv_pivot;
                }
                work[r][k] = factor * inv_pivot;
            }
        }

        let mut l = Vec::with_capacity(n * n);
        let mut u = Vec::with_capacity(n * n);
        for (i, row) in work.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                l.push(if j < i {
                    value
                } else if j == i {
                    T::one()
                } else {
                    T::zero()
                });
                u.push(if j >= i { value } else { T::zero() });
            }
        }
        let p = DenseMatrix::identity(n)?.select_rows(&row_order)?;

        log::debug!(
            "LUP elimination done: row order {:?}, {} row exchanges",
            row_order,
            row_exchanges
        );
        Ok(LupFactors::new(
            DenseMatrix::new(n, n, l)?,
            DenseMatrix::new(n, n, u)?,
            p,
            row_order,
            row_exchanges,
        ))
    }
}
