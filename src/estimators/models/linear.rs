use crate::estimators::EstimatorError;
use nalgebra::{DMatrix, DVector};

/// Ordinary least squares via the normal equations.
///
/// `design` is row-major with `cols` columns (intercept included by the
/// caller). Returns one coefficient per column.
pub fn fit_ols(design: &[f64], cols: usize, y: &[f64]) -> Result<Vec<f64>, EstimatorError> {
    let rows = y.len();
    if rows < cols {
        return Err(EstimatorError::TooFewObservations {
            required: cols,
            found: rows,
        });
    }

    let x = DMatrix::from_row_slice(rows, cols, design);
    let xt = x.transpose();
    let xtx = &xt * &x;
    let xty = &xt * DVector::from_column_slice(y);

    let sol = xtx
        .lu()
        .solve(&xty)
        .ok_or(EstimatorError::SingularDesign("X'X in outcome model"))?;
    if sol.iter().any(|v| !v.is_finite()) {
        return Err(EstimatorError::SingularDesign("X'X in outcome model"));
    }
    Ok(sol.iter().copied().collect())
}

#[inline]
pub fn linear_predictor(coefficients: &[f64], row: &[f64]) -> f64 {
    coefficients.iter().zip(row).map(|(b, x)| b * x).sum()
}
