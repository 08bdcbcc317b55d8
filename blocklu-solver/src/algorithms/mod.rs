use blocklu_core::{DenseMatrix, Matrix, MatrixError, Result};
use num_traits::Float;
use std::fmt::Debug;

use crate::decomposition::LupFactors;
use crate::solve::lup_solve;

#[derive(Debug, Clone)]
pub struct SolveResult<T: Float> {
    pub x: DenseMatrix<T>,       // Solution, one column per right-hand side
    pub metadata: SolveMetadata, // Metadata about the factorization
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveMetadata {
    pub order: usize,
    pub row_exchanges: usize,
    pub permutation_parity: usize,
}

impl<T: Float> From<&LupFactors<T>> for SolveMetadata {
    fn from(factors: &LupFactors<T>) -> Self {
        Self {
            order: factors.order(),
            row_exchanges: factors.row_exchanges(),
            permutation_parity: factors.permutation_parity(),
        }
    }
}

// --- Algorithm Trait Definition ---
/// Trait representing a strategy for the pivoted factorization `P * A = L * U`
/// and the solves built on top of it.
pub trait SolveAlgorithm<T: Float + Debug> {
    /// Factors the square matrix `a`.
    fn factorize(&self, a: &DenseMatrix<T>) -> Result<LupFactors<T>>;

    /// Solves `A * X = B` for every column of `b`.
    fn solve(&self, a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> Result<SolveResult<T>> {
        self.validate_inputs(a, b)?;
        let factors = self.factorize(a)?;
        let x = lup_solve(&factors.l, &factors.u, &factors.p, b)?;
        Ok(SolveResult {
            x,
            metadata: SolveMetadata::from(&factors),
        })
    }

    // Helper for input validation, can be called by implementations.
    fn validate_inputs(&self, a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> Result<()> {
        a.ensure_square()?;
        if a.rows() != b.rows() {
            return Err(MatrixError::ShapeMismatch(format!(
                "Matrix A rows ({}) must match right-hand side rows ({})",
                a.rows(),
                b.rows()
            )));
        }
        Ok(())
    }
}

// --- Algorithm Implementations ---

pub mod block_lup; // Recursive Schur-complement construction
pub mod elimination_lup; // In-place elimination with a row order array

/// Recursive block LUP decomposition.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockLup;

/// Iterative LUP elimination producing the same factors as [`BlockLup`]
/// without recursion.
#[derive(Debug, Clone, Copy, Default)]
pub struct EliminationLup;
