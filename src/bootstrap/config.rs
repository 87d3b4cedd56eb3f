use crate::bootstrap::BootstrapError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_confidence_level() -> f64 {
    0.95
}
fn default_max_failure_fraction() -> f64 {
    0.10
}

/// Parameters of one bootstrap run.
///
/// `replicates` has no default: callers must choose B.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BootstrapConfig {
    #[schemars(
        title = "Replicates",
        description = "Number of bootstrap resamples (B), at least 2.",
        range(min = 2)
    )]
    pub replicates: usize,

    #[serde(default = "default_seed")]
    #[schemars(
        title = "Seed",
        description = "Base seed; replicate seeds are derived from it.",
        default = "default_seed"
    )]
    pub seed: u64,

    #[serde(default = "default_confidence_level")]
    #[schemars(
        title = "Confidence level",
        description = "Coverage of the percentile interval (0-1, exclusive).",
        range(min = 0.0, max = 1.0),
        default = "default_confidence_level"
    )]
    pub confidence_level: f64,

    #[serde(default = "default_max_failure_fraction")]
    #[schemars(
        title = "Maximum failure fraction",
        description = "Largest tolerated share of failed replicates (0-1).",
        range(min = 0.0, max = 1.0),
        default = "default_max_failure_fraction"
    )]
    pub max_failure_fraction: f64,

    #[serde(default)]
    #[schemars(
        title = "Workers",
        description = "Worker threads; empty = one per available CPU."
    )]
    pub workers: Option<usize>,

    #[serde(default)]
    #[schemars(
        title = "Deadline (ms)",
        description = "Wall-clock budget for the replicate fan-out; empty = none."
    )]
    pub deadline_ms: Option<u64>,
}

impl BootstrapConfig {
    pub fn new(replicates: usize) -> Self {
        Self {
            replicates,
            seed: default_seed(),
            confidence_level: default_confidence_level(),
            max_failure_fraction: default_max_failure_fraction(),
            workers: None,
            deadline_ms: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = level;
        self
    }

    pub fn with_max_failure_fraction(mut self, fraction: f64) -> Self {
        self.max_failure_fraction = fraction;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline_ms = Some(deadline.as_millis().min(u64::MAX as u128) as u64);
        self
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> Result<(), BootstrapError> {
        if self.replicates < 2 {
            return Err(BootstrapError::InvalidInput(format!(
                "replicates must be >= 2, got {}",
                self.replicates
            )));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(BootstrapError::InvalidInput(format!(
                "confidence_level must be in (0, 1), got {}",
                self.confidence_level
            )));
        }
        if !(0.0..=1.0).contains(&self.max_failure_fraction) {
            return Err(BootstrapError::InvalidInput(format!(
                "max_failure_fraction must be in [0, 1], got {}",
                self.max_failure_fraction
            )));
        }
        if self.workers == Some(0) {
            return Err(BootstrapError::InvalidInput(
                "workers must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
