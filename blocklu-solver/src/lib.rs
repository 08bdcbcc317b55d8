//! `blocklu-solver`: dense linear system solving through recursive block
//! LU decomposition with partial pivoting.
//!
//! This library provides LU/LUP factorization, triangular substitution and the
//! solve, inverse and determinant operations built on top of them.

// Core modules
pub mod algorithms;
pub mod decomposition;
pub mod solve;
pub mod triangular;

pub use algorithms::{BlockLup, EliminationLup, SolveAlgorithm, SolveMetadata, SolveResult};
pub use decomposition::{lu_decomp, lup_decomp, LuFactors, LupFactors};
pub use solve::{det, inverse, lu_solve, lup_solve, solve};
pub use triangular::{backward_sub, forward_sub};

// Re-export from blocklu_core
pub use blocklu_core::{DenseMatrix, DisplayConfig, Matrix, MatrixError, Result};
