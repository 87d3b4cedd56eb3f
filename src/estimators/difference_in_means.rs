use crate::core::Sample;
use crate::estimators::{EstimatorError, PointEstimate, PointEstimator};

/// Unadjusted contrast: mean treated outcome minus mean control outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct DifferenceInMeans;

impl PointEstimator<Sample> for DifferenceInMeans {
    fn name(&self) -> &str {
        "difference-in-means"
    }

    fn estimate(&self, sample: &Sample) -> Result<PointEstimate, EstimatorError> {
        let (mut sum_t, mut n_t, mut sum_c, mut n_c) = (0.0, 0usize, 0.0, 0usize);
        for r in sample.records() {
            if r.treatment {
                sum_t += r.outcome;
                n_t += 1;
            } else {
                sum_c += r.outcome;
                n_c += 1;
            }
        }
        if n_t == 0 {
            return Err(EstimatorError::EmptyArm { arm: "treated" });
        }
        if n_c == 0 {
            return Err(EstimatorError::EmptyArm { arm: "control" });
        }

        let effect = sum_t / n_t as f64 - sum_c / n_c as f64;
        Ok(PointEstimate::new(effect)
            .with_diagnostic("n_treated", n_t as f64)
            .with_diagnostic("n_control", n_c as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;

    #[test]
    fn contrast_of_arm_means() {
        let s = Sample::new(vec![
            Record::new(true, 5.0, vec![]),
            Record::new(true, 7.0, vec![]),
            Record::new(false, 1.0, vec![]),
            Record::new(false, 3.0, vec![]),
            Record::new(false, 2.0, vec![]),
        ])
        .unwrap();
        let est = DifferenceInMeans.estimate(&s).unwrap();
        assert!((est.effect - 4.0).abs() < 1e-12);
        assert_eq!(est.diagnostics["n_treated"], 2.0);
        assert_eq!(est.diagnostics["n_control"], 3.0);
    }

    #[test]
    fn empty_arm_is_an_error() {
        let s = Sample::new(vec![Record::new(true, 5.0, vec![])]).unwrap();
        assert_eq!(
            DifferenceInMeans.estimate(&s).unwrap_err(),
            EstimatorError::EmptyArm { arm: "control" }
        );
    }
}
