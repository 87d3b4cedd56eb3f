use crate::core::{Record, Sample};
use crate::sources::{SampleSource, SourceError};
use crate::utils::math::logistic;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

const BASELINE: f64 = 1.0;
const COVARIATE_WEIGHT: f64 = 0.5;
const CONFOUNDING: f64 = 0.5;

/// Seeded generator of an observational design with a known effect.
///
/// - covariates `x_j ~ N(0, 1)`;
/// - treatment `T ~ Bernoulli(logistic(0.5 * x_0))`, confounded through the
///   first covariate (fair coin without covariates);
/// - outcome `Y = 1 + effect * T + 0.5 * sum(x_j) + N(0, noise_std)`.
#[derive(Debug, Clone)]
pub struct SyntheticSampleSource {
    size: usize,
    effect: f64,
    noise_std: f64,
    covariates: usize,
    seed: u64,
}

impl SyntheticSampleSource {
    pub fn new(
        size: usize,
        effect: f64,
        noise_std: f64,
        covariates: usize,
        seed: u64,
    ) -> Result<Self, SourceError> {
        if !effect.is_finite() {
            return Err(SourceError::InvalidParameter(
                "effect must be finite".into(),
            ));
        }
        if !(noise_std.is_finite() && noise_std >= 0.0) {
            return Err(SourceError::InvalidParameter(
                "noise_std must be finite and >= 0".into(),
            ));
        }
        Ok(Self {
            size,
            effect,
            noise_std,
            covariates,
            seed,
        })
    }

    pub fn effect(&self) -> f64 {
        self.effect
    }

    pub fn generate(&self) -> Result<Sample, SourceError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let records = (0..self.size)
            .map(|_| {
                let x: Vec<f64> = (0..self.covariates)
                    .map(|_| StandardNormal.sample(&mut rng))
                    .collect();
                let p = x.first().map_or(0.5, |&x0| logistic(CONFOUNDING * x0));
                let treated = rng.random::<f64>() < p;
                let noise: f64 = StandardNormal.sample(&mut rng);
                let y = BASELINE
                    + if treated { self.effect } else { 0.0 }
                    + COVARIATE_WEIGHT * x.iter().sum::<f64>()
                    + self.noise_std * noise;
                Record::new(treated, y, x)
            })
            .collect();

        Ok(Sample::new(records)?)
    }
}

impl SampleSource for SyntheticSampleSource {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn load(&mut self) -> Result<Sample, SourceError> {
        self.generate()
    }
}
