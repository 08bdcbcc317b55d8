use blocklu_solver::{BlockLup, DenseMatrix, EliminationLup, SolveAlgorithm};
use std::time::Instant;

/// Creates a pentadiagonal matrix A of size n x n.
/// Diagonals:
/// - Main: 4.0
/// - Adjacent (+1, -1): -1.0
/// - Outer (+2, -2): -0.5
fn create_pentadiagonal_matrix(n: usize) -> DenseMatrix<f64> {
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        for (offset, value) in [(-2, -0.5), (-1, -1.0), (0, 4.0), (1, -1.0), (2, -0.5)] {
            let j = i as isize + offset;
            if (0..n as isize).contains(&j) {
                data[i * n + j as usize] = value;
            }
        }
    }
    DenseMatrix::new(n, n, data).expect("Failed to create pentadiagonal matrix")
}

/// Creates a column b of size n with b[i] = sin(i / n).
fn create_sin_vector(n: usize) -> DenseMatrix<f64> {
    let data = (0..n).map(|i| (i as f64 / n as f64).sin()).collect();
    DenseMatrix::new(n, 1, data).expect("Failed to create right-hand side")
}

fn max_residual(a: &DenseMatrix<f64>, x: &DenseMatrix<f64>, b: &DenseMatrix<f64>) -> f64 {
    let r = a
        .multiply(x)
        .and_then(|ax| ax.subtract(b))
        .expect("Residual shapes must match");
    r.data().iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
}

fn main() {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let n = 200;
    log::info!(
        "Setting up {}x{} pentadiagonal matrix A and sin vector b...",
        n,
        n
    );
    let a = create_pentadiagonal_matrix(n);
    let b = create_sin_vector(n);

    let algorithms: [(&str, &dyn SolveAlgorithm<f64>); 2] =
        [("block recursion", &BlockLup), ("elimination", &EliminationLup)];

    for (name, algorithm) in algorithms {
        log::info!("Running {} LUP solver...", name);
        let start_time = Instant::now();
        match algorithm.solve(&a, &b) {
            Ok(result) => {
                log::info!("Solver finished successfully!");
                log::info!("  Row exchanges: {}", result.metadata.row_exchanges);
                log::info!("  Max residual: {:.6e}", max_residual(&a, &result.x, &b));
                log::info!("  Time elapsed: {:?}", start_time.elapsed());
            }
            Err(e) => {
                log::error!("Solver failed: {:?}", e);
            }
        }
    }
}
