use std::error::Error;

use blocklu_core::{DenseMatrix, DisplayConfig};
use blocklu_solver::{det, inverse, solve};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional first argument: number of decimal places to print.
    let config = match std::env::args().nth(1) {
        Some(arg) => DisplayConfig::with_precision(arg.parse()?),
        None => DisplayConfig::new(),
    };
    log::info!("Display precision: {:?}", config.precision);

    let a = DenseMatrix::from_rows(&[[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]])?;
    let a_inv = inverse(&a)?;
    println!("{}\n", a_inv.display_with(&config)); // [[3/4, 1/2, 1/4], [1/2, 1, 1/2], [1/4, 1/2, 3/4]]

    let a = DenseMatrix::from_rows(&[[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]])?;
    let b = DenseMatrix::from_rows(&[[8.0], [-11.0], [-3.0]])?;
    let x = solve(&a, &b)?; // [[2], [3], [-1]]
    println!("{}\n", x.display_with(&config));

    let a = DenseMatrix::from_rows(&[[6.0, 2.0, 3.0], [1.0, 1.0, 1.0], [0.0, 4.0, 9.0]])?;
    let d = DenseMatrix::from_scalar(det(&a)?); // 24
    println!("{}", d.display_with(&config));

    Ok(())
}
