use crate::utils::math::{mean, sample_std_dev};
use serde::Serialize;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Conventional labels for a standardized effect size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EffectMagnitude {
    Tiny,
    Small,
    Medium,
    Large,
}

impl EffectMagnitude {
    /// Thresholds 0.2 / 0.5 / 0.8 on `|d|`, upper-exclusive.
    pub fn classify(effect_size: f64) -> Self {
        let d = effect_size.abs();
        if d > 0.8 {
            EffectMagnitude::Large
        } else if d > 0.5 {
            EffectMagnitude::Medium
        } else if d > 0.2 {
            EffectMagnitude::Small
        } else {
            EffectMagnitude::Tiny
        }
    }
}

/// Cohen's d with the pooled sample standard deviation.
///
/// Returns `0.0` when the pooled deviation is zero or undefined (fewer than
/// three observations overall).
pub fn cohens_d(a: &[f64], b: &[f64]) -> f64 {
    let (na, nb) = (a.len(), b.len());
    if na == 0 || nb == 0 || na + nb < 3 {
        return 0.0;
    }
    let var = |xs: &[f64]| {
        if xs.len() < 2 {
            0.0
        } else {
            sample_std_dev(xs).powi(2)
        }
    };
    let pooled = (((na - 1) as f64 * var(a) + (nb - 1) as f64 * var(b))
        / (na + nb - 2) as f64)
        .sqrt();
    if pooled > 0.0 {
        (mean(a) - mean(b)) / pooled
    } else {
        0.0
    }
}
