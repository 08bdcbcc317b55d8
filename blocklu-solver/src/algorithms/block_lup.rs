use blocklu_core::{DenseMatrix, Result};
use num_traits::Float;
use std::fmt::Debug;

use super::{BlockLup, SolveAlgorithm};
use crate::decomposition::{lup_decomp, LupFactors};

impl<T: Float + Debug> SolveAlgorithm<T> for BlockLup {
    fn factorize(&self, a: &DenseMatrix<T>) -> Result<LupFactors<T>> {
        lup_decomp(a)
    }
}
