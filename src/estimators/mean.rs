use crate::estimators::{EstimatorError, PointEstimate, PointEstimator};
use crate::utils::math;

/// Arithmetic mean of univariate data.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mean;

impl PointEstimator<Vec<f64>> for Mean {
    fn name(&self) -> &str {
        "mean"
    }

    fn estimate(&self, data: &Vec<f64>) -> Result<PointEstimate, EstimatorError> {
        if data.is_empty() {
            return Err(EstimatorError::TooFewObservations {
                required: 1,
                found: 0,
            });
        }
        let m = math::mean(data);
        if !m.is_finite() {
            return Err(EstimatorError::NonFinite);
        }
        Ok(PointEstimate::new(m))
    }
}
