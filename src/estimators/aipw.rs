use crate::core::Sample;
use crate::estimators::models::{fit_logistic, fit_ols, linear_predictor, predict_probabilities};
use crate::estimators::{EstimatorError, PointEstimate, PointEstimator};

pub const DEFAULT_PROPENSITY_CLIP: f64 = 0.01;

/// Augmented inverse probability weighting (doubly robust) estimator of the
/// average treatment effect.
///
/// Nuisance models, refitted on every call:
/// - propensity `e(x)`: logistic regression of treatment on covariates,
///   clipped to `[clip, 1 - clip]`;
/// - outcomes `mu1(x)`, `mu0(x)`: least squares fitted separately on the
///   treated and control rows.
///
/// The estimate is the sample mean of the AIPW scores
/// `mu1 - mu0 + T (Y - mu1) / e - (1 - T) (Y - mu0) / (1 - e)`. It stays
/// consistent when either nuisance model is correctly specified.
#[derive(Debug, Clone, Copy)]
pub struct Aipw {
    clip: f64,
}

impl Aipw {
    pub fn new(clip: f64) -> Self {
        Self { clip }
    }

    pub fn clip(&self) -> f64 {
        self.clip
    }
}

impl Default for Aipw {
    fn default() -> Self {
        Self::new(DEFAULT_PROPENSITY_CLIP)
    }
}

impl PointEstimator<Sample> for Aipw {
    fn name(&self) -> &str {
        "aipw"
    }

    fn estimate(&self, sample: &Sample) -> Result<PointEstimate, EstimatorError> {
        let n_t = sample.treated_count();
        let n_c = sample.control_count();
        if n_t == 0 {
            return Err(EstimatorError::EmptyArm { arm: "treated" });
        }
        if n_c == 0 {
            return Err(EstimatorError::EmptyArm { arm: "control" });
        }

        let cols = sample.covariate_dim() + 1;
        let design = sample.design_with_intercept();
        let treatments = sample.treatments();
        let outcomes = sample.outcomes();

        let propensity_beta = fit_logistic(&design, cols, &treatments)?;
        let propensity = predict_probabilities(&propensity_beta, &design, self.clip);

        let mu1_beta = fit_arm(&design, cols, &treatments, &outcomes, true)?;
        let mu0_beta = fit_arm(&design, cols, &treatments, &outcomes, false)?;

        let mut regression_sum = 0.0;
        let mut score_sum = 0.0;
        for (i, row) in design.chunks_exact(cols).enumerate() {
            let mu1 = linear_predictor(&mu1_beta, row);
            let mu0 = linear_predictor(&mu0_beta, row);
            let (t, y, e) = (treatments[i], outcomes[i], propensity[i]);

            regression_sum += mu1 - mu0;
            score_sum += mu1 - mu0 + t * (y - mu1) / e - (1.0 - t) * (y - mu0) / (1.0 - e);
        }

        let n = sample.len() as f64;
        let ate = score_sum / n;
        if !ate.is_finite() {
            return Err(EstimatorError::NonFinite);
        }
        let regression = regression_sum / n;

        let (p_min, p_max) = propensity
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &p| {
                (lo.min(p), hi.max(p))
            });

        Ok(PointEstimate::new(ate)
            .with_diagnostic("n_treated", n_t as f64)
            .with_diagnostic("n_control", n_c as f64)
            .with_diagnostic("propensity_min", p_min)
            .with_diagnostic("propensity_max", p_max)
            .with_diagnostic("regression_component", regression)
            .with_diagnostic("ipw_component", ate - regression))
    }
}

fn fit_arm(
    design: &[f64],
    cols: usize,
    treatments: &[f64],
    outcomes: &[f64],
    treated: bool,
) -> Result<Vec<f64>, EstimatorError> {
    let wanted = if treated { 1.0 } else { 0.0 };
    let mut arm_design = Vec::new();
    let mut arm_y = Vec::new();
    for (i, row) in design.chunks_exact(cols).enumerate() {
        if treatments[i] == wanted {
            arm_design.extend_from_slice(row);
            arm_y.push(outcomes[i]);
        }
    }
    fit_ols(&arm_design, cols, &arm_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;
    use crate::testing::synthetic_sample;

    #[test]
    fn recovers_injected_effect_under_confounding() {
        let sample = synthetic_sample(2_000, 5.0, 1.0, 2, 11);
        let est = Aipw::default().estimate(&sample).unwrap();
        assert!((est.effect - 5.0).abs() < 0.2, "effect={}", est.effect);

        let d = &est.diagnostics;
        assert!(d["propensity_min"] >= 0.01 && d["propensity_max"] <= 0.99);
        assert_eq!(d["n_treated"] + d["n_control"], 2_000.0);
        assert!((d["regression_component"] + d["ipw_component"] - est.effect).abs() < 1e-9);
    }

    #[test]
    fn exact_outcome_model_gives_exact_effect() {
        // y = 1 + 2x + 3T without noise: the augmentation terms vanish.
        let xs = [-1.0, -0.5, 0.0, 0.5, 1.0, 1.5, -1.5, 0.25];
        let ts = [false, true, false, true, true, false, true, false];
        let records = xs
            .iter()
            .zip(ts)
            .map(|(&x, t)| Record::new(t, 1.0 + 2.0 * x + if t { 3.0 } else { 0.0 }, vec![x]))
            .collect();
        let sample = Sample::new(records).unwrap();
        let est = Aipw::default().estimate(&sample).unwrap();
        assert!((est.effect - 3.0).abs() < 1e-8, "effect={}", est.effect);
    }

    #[test]
    fn arm_smaller_than_outcome_model_fails() {
        let sample = Sample::new(vec![
            Record::new(true, 1.0, vec![0.3, 1.0]),
            Record::new(false, 0.0, vec![0.1, -1.0]),
            Record::new(false, 0.5, vec![0.2, 0.4]),
            Record::new(false, 0.2, vec![-0.7, 0.9]),
        ])
        .unwrap();
        let err = Aipw::default().estimate(&sample).unwrap_err();
        assert!(matches!(
            err,
            EstimatorError::TooFewObservations { .. }
                | EstimatorError::NotConverged { .. }
                | EstimatorError::SingularDesign(_)
        ));
    }

    #[test]
    fn missing_arm_fails() {
        let sample = Sample::new(vec![
            Record::new(false, 1.0, vec![]),
            Record::new(false, 2.0, vec![]),
        ])
        .unwrap();
        assert_eq!(
            Aipw::default().estimate(&sample).unwrap_err(),
            EstimatorError::EmptyArm { arm: "treated" }
        );
    }
}
