use crate::core::Sample;
use crate::sources::SyntheticSampleSource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Confounded design with a known effect, see [`SyntheticSampleSource`].
pub fn synthetic_sample(
    size: usize,
    effect: f64,
    noise_std: f64,
    covariates: usize,
    seed: u64,
) -> Sample {
    SyntheticSampleSource::new(size, effect, noise_std, covariates, seed)
        .and_then(|s| s.generate())
        .expect("valid synthetic parameters")
}

pub fn normal_values(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(mean, std_dev).expect("valid normal parameters");
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}
