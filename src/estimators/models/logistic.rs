use crate::estimators::EstimatorError;
use crate::estimators::models::linear_predictor;
use crate::utils::math::logistic;
use nalgebra::{DMatrix, DVector};

pub const MAX_ITERATIONS: usize = 50;
pub const TOLERANCE: f64 = 1e-8;

const PROB_EPS: f64 = 1e-10;

/// Logistic regression by Newton-Raphson (IRLS).
///
/// `design` is row-major with `cols` columns, `target` holds 0/1 values.
/// Starts from the zero vector and stops once the largest coefficient update
/// drops below [`TOLERANCE`].
pub fn fit_logistic(
    design: &[f64],
    cols: usize,
    target: &[f64],
) -> Result<Vec<f64>, EstimatorError> {
    let rows = target.len();
    if rows < cols {
        return Err(EstimatorError::TooFewObservations {
            required: cols,
            found: rows,
        });
    }

    let x = DMatrix::from_row_slice(rows, cols, design);
    let mut beta = DVector::<f64>::zeros(cols);

    for _ in 0..MAX_ITERATIONS {
        let eta = &x * &beta;
        let p = eta.map(|e| logistic(e).clamp(PROB_EPS, 1.0 - PROB_EPS));

        let residual = DVector::from_iterator(rows, target.iter().zip(p.iter()).map(|(t, p)| t - p));
        let gradient = x.transpose() * residual;

        let mut weighted = x.clone();
        for (i, mut row) in weighted.row_iter_mut().enumerate() {
            row *= p[i] * (1.0 - p[i]);
        }
        let hessian = x.transpose() * weighted;

        let step = hessian
            .lu()
            .solve(&gradient)
            .ok_or(EstimatorError::SingularDesign("Hessian in propensity model"))?;
        if step.iter().any(|v| !v.is_finite()) {
            return Err(EstimatorError::SingularDesign("Hessian in propensity model"));
        }

        beta += &step;
        if step.amax() < TOLERANCE {
            return Ok(beta.iter().copied().collect());
        }
    }

    Err(EstimatorError::NotConverged {
        model: "propensity model",
        iterations: MAX_ITERATIONS,
    })
}

/// Predicted probabilities for every row, clipped to `[clip, 1 - clip]`.
pub fn predict_probabilities(coefficients: &[f64], design: &[f64], clip: f64) -> Vec<f64> {
    let cols = coefficients.len();
    design
        .chunks_exact(cols)
        .map(|row| logistic(linear_predictor(coefficients, row)).clamp(clip, 1.0 - clip))
        .collect()
}
