use crate::bootstrap::{BootstrapConfig, derive_seed};
use crate::inference::mean_ci::{MIN_BOOTSTRAP_OBSERVATIONS, bootstrap_mean_ci};
use crate::inference::{EffectMagnitude, InferenceError};
use crate::utils::math::{mean, sample_std_dev};
use log::warn;
use serde::Serialize;
use std::collections::BTreeMap;

/// One group's bootstrap mean against the pooled baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupComparison {
    pub group: String,
    pub mean: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub n: usize,
    pub deviation: f64,
    pub effect_size: f64,
    pub magnitude: EffectMagnitude,
    /// The interval excludes the baseline.
    pub significant: bool,
}

impl GroupComparison {
    pub fn ci_width(&self) -> f64 {
        self.ci_upper - self.ci_lower
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupComparisonReport {
    pub baseline_mean: f64,
    pub baseline_std: f64,
    pub total_observations: usize,
    /// Sorted by `|deviation|`, largest first.
    pub groups: Vec<GroupComparison>,
}

impl GroupComparisonReport {
    pub fn significant_count(&self) -> usize {
        self.groups.iter().filter(|g| g.significant).count()
    }
}

/// Compares every group's mean with the mean of all observations.
///
/// Groups below `min_n` observations (and never below five) are left out,
/// as are groups whose bootstrap fails. Group `k` in key order bootstraps
/// with base seed `derive_seed(config.seed, k)`.
pub fn compare_groups(
    groups: &BTreeMap<String, Vec<f64>>,
    min_n: usize,
    config: &BootstrapConfig,
) -> Result<GroupComparisonReport, InferenceError> {
    config.validate()?;

    let pooled: Vec<f64> = groups.values().flatten().copied().collect();
    if pooled.len() < 2 {
        return Err(InferenceError::InvalidInput(
            "need at least 2 observations across groups".into(),
        ));
    }
    let baseline_mean = mean(&pooled);
    let baseline_std = sample_std_dev(&pooled);

    let min_n = min_n.max(MIN_BOOTSTRAP_OBSERVATIONS);
    let mut out = Vec::new();
    for (k, (name, values)) in groups.iter().enumerate() {
        if values.len() < min_n {
            continue;
        }
        let group_config = config.clone().with_seed(derive_seed(config.seed, k as u64));
        let r = match bootstrap_mean_ci(values, &group_config) {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping group {name}: {e}");
                continue;
            }
        };

        let deviation = r.estimate - baseline_mean;
        let effect_size = if baseline_std > 0.0 {
            deviation / baseline_std
        } else {
            0.0
        };
        out.push(GroupComparison {
            group: name.clone(),
            mean: r.estimate,
            ci_lower: r.ci_lower,
            ci_upper: r.ci_upper,
            n: values.len(),
            deviation,
            effect_size,
            magnitude: EffectMagnitude::classify(effect_size),
            significant: r.ci_upper < baseline_mean || r.ci_lower > baseline_mean,
        });
    }

    out.sort_by(|a, b| b.deviation.abs().total_cmp(&a.deviation.abs()));

    Ok(GroupComparisonReport {
        baseline_mean,
        baseline_std,
        total_observations: pooled.len(),
        groups: out,
    })
}
