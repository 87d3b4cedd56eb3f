use crate::bootstrap::derive_seed;
use crate::inference::{EffectMagnitude, InferenceError, cohens_d};
use crate::utils::math::mean;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use serde::Serialize;

const TIE_TOLERANCE: f64 = 1e-12;

/// Outcome of a two-sided permutation test for a difference in means.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PermutationTestResult {
    pub observed_difference: f64,
    pub p_value: f64,
    pub significant: bool,
    pub effect_size: f64,
    pub magnitude: EffectMagnitude,
    pub group_a_mean: f64,
    pub group_b_mean: f64,
    pub group_a_n: usize,
    pub group_b_n: usize,
    pub permutations: usize,
}

/// Distribution-free test of `mean(a) == mean(b)`.
///
/// Each permutation shuffles the pooled observations with its own seed
/// `derive_seed(seed, i)` and splits them back into groups of the original
/// sizes. The p-value is the share of permutations whose absolute difference
/// reaches the observed one.
pub fn permutation_test(
    a: &[f64],
    b: &[f64],
    permutations: usize,
    seed: u64,
) -> Result<PermutationTestResult, InferenceError> {
    if a.is_empty() || b.is_empty() {
        return Err(InferenceError::InvalidInput(
            "both groups need at least one observation".into(),
        ));
    }
    if permutations == 0 {
        return Err(InferenceError::InvalidInput(
            "permutations must be > 0".into(),
        ));
    }
    if a.iter().chain(b).any(|v| !v.is_finite()) {
        return Err(InferenceError::InvalidInput(
            "observations must be finite".into(),
        ));
    }

    let observed = mean(a) - mean(b);
    let threshold = observed.abs() - TIE_TOLERANCE;
    let pooled: Vec<f64> = a.iter().chain(b).copied().collect();
    let n_a = a.len();

    let extreme = (0..permutations)
        .into_par_iter()
        .filter(|&i| {
            let mut rng = StdRng::seed_from_u64(derive_seed(seed, i as u64));
            let mut shuffled = pooled.clone();
            shuffled.shuffle(&mut rng);
            let (pa, pb) = shuffled.split_at(n_a);
            (mean(pa) - mean(pb)).abs() >= threshold
        })
        .count();

    let p_value = extreme as f64 / permutations as f64;
    let effect_size = cohens_d(a, b);

    Ok(PermutationTestResult {
        observed_difference: observed,
        p_value,
        significant: p_value < 0.05,
        effect_size,
        magnitude: EffectMagnitude::classify(effect_size),
        group_a_mean: mean(a),
        group_b_mean: mean(b),
        group_a_n: a.len(),
        group_b_n: b.len(),
        permutations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::normal_values;

    #[test]
    fn clearly_separated_groups_are_significant() {
        let a = normal_values(30, 5.0, 1.0, 1);
        let b = normal_values(30, 0.0, 1.0, 2);
        let r = permutation_test(&a, &b, 2_000, 7).unwrap();
        assert!(r.p_value < 0.01, "p={}", r.p_value);
        assert!(r.significant);
        assert_eq!(r.magnitude, EffectMagnitude::Large);
        assert!(r.observed_difference > 4.0);
        assert_eq!((r.group_a_n, r.group_b_n), (30, 30));
    }

    #[test]
    fn identical_groups_are_not_significant() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let r = permutation_test(&a, &a, 500, 3).unwrap();
        assert_eq!(r.observed_difference, 0.0);
        assert_eq!(r.p_value, 1.0);
        assert!(!r.significant);
        assert_eq!(r.magnitude, EffectMagnitude::Tiny);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let a = normal_values(12, 0.4, 1.0, 5);
        let b = normal_values(15, 0.0, 1.0, 6);
        let r1 = permutation_test(&a, &b, 1_000, 11).unwrap();
        let r2 = permutation_test(&a, &b, 1_000, 11).unwrap();
        assert_eq!(r1, r2);
    }

    #[test]
    fn invalid_inputs() {
        assert!(permutation_test(&[], &[1.0], 10, 0).is_err());
        assert!(permutation_test(&[1.0], &[2.0], 0, 0).is_err());
        assert!(permutation_test(&[f64::NAN], &[2.0], 10, 0).is_err());
    }
}
