//! `Display` formatting for [`DenseMatrix`].

use crate::matrix::DenseMatrix;
use num_traits::Float;
use std::fmt;

/// Formatting options for printing matrices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Fixed number of decimal places; `None` prints each entry in its
    /// shortest round-trip form.
    pub precision: Option<usize>,
}

impl DisplayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision: Some(precision),
        }
    }

    fn render<T: Float + fmt::Display>(&self, value: T) -> String {
        match self.precision {
            Some(p) => format!("{:.*}", p, value),
            None => format!("{}", value),
        }
    }
}

/// Borrowed adapter returned by [`DenseMatrix::display_with`].
pub struct MatrixDisplay<'a, T: Float> {
    matrix: &'a DenseMatrix<T>,
    config: DisplayConfig,
}

impl<T: Float> DenseMatrix<T> {
    pub fn display_with(&self, config: &DisplayConfig) -> MatrixDisplay<'_, T> {
        MatrixDisplay {
            matrix: self,
            config: *config,
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for MatrixDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self
            .matrix
            .data()
            .iter()
            .map(|&x| self.config.render(x))
            .collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);
        let (rows, cols) = self.matrix.shape();

        for (i, row) in cells.chunks(cols).enumerate() {
            f.write_str(if i == 0 { "[" } else { " " })?;
            f.write_str("[")?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{:>width$}", cell, width = width)?;
            }
            f.write_str("]")?;
            if i == rows - 1 {
                f.write_str("]")?;
            } else {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T: Float + fmt::Display> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&DisplayConfig::default()), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_default() {
        let m = DenseMatrix::from_rows(&[[0.75, 0.5, 0.25], [0.5, 1.0, 0.5]]).unwrap();
        assert_eq!(format!("{m}"), "[[0.75,  0.5, 0.25]\n [ 0.5,    1,  0.5]]");
        assert_eq!(m.display_with(&DisplayConfig::new()).to_string(), m.to_string());
    }

    #[test]
    fn test_display_precision() {
        let m = DenseMatrix::from_rows(&[[2.0], [-1.0 / 3.0]]).unwrap();
        let config = DisplayConfig::with_precision(3);
        assert_eq!(format!("{}", m.display_with(&config)), "[[ 2.000]\n [-0.333]]");
    }

    #[test]
    fn test_display_single_entry() {
        let m = DenseMatrix::from_scalar(-4.5_f64);
        assert_eq!(m.to_string(), "[[-4.5]]");
    }
}
