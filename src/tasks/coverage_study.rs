use crate::bootstrap::{BootstrapAggregator, BootstrapConfig, BootstrapError, Progress, derive_seed};
use crate::config::SyntheticParameters;
use crate::core::Sample;
use crate::estimators::PointEstimator;
use crate::sources::{SourceError, SyntheticSampleSource};
use crate::tasks::{CoverageRow, ResultTable};
use crate::utils::math::{mean, sample_std_dev};
use log::{debug, warn};
use serde::Serialize;
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("repetitions must be > 0")]
    NoRepetitions,

    #[error("all {0} repetitions failed")]
    AllFailed(usize),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
}

/// Aggregate calibration numbers over the successful seed families.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub repetitions: usize,
    pub failed: usize,
    pub true_effect: f64,
    /// Share of intervals containing the injected effect.
    pub coverage: f64,
    pub mean_estimate: f64,
    pub mean_std_error: f64,
    /// Standard deviation of the standard errors across families.
    pub std_error_spread: f64,
    pub mean_ci_width: f64,
}

/// Repeats a bootstrap over `R` independent synthetic seed families.
///
/// Family `k` draws its data with `derive_seed(parameters.seed, k)` and its
/// replicates with `derive_seed(bootstrap.seed, k)`.
pub struct CoverageStudy {
    parameters: SyntheticParameters,
    estimator: Box<dyn PointEstimator<Sample>>,
    bootstrap: BootstrapConfig,
    repetitions: usize,

    table: ResultTable,
    failed: usize,

    progress_tx: Option<Sender<Progress>>,
}

impl CoverageStudy {
    pub fn new(
        parameters: SyntheticParameters,
        estimator: Box<dyn PointEstimator<Sample>>,
        bootstrap: BootstrapConfig,
        repetitions: usize,
    ) -> Result<Self, CoverageError> {
        if repetitions == 0 {
            return Err(CoverageError::NoRepetitions);
        }
        bootstrap.validate()?;
        Ok(Self {
            parameters,
            estimator,
            bootstrap,
            repetitions,
            table: ResultTable::default(),
            failed: 0,
            progress_tx: None,
        })
    }

    /// Reports one tick per finished seed family.
    pub fn with_progress(mut self, tx: Sender<Progress>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    pub fn run(&mut self) -> Result<CoverageReport, CoverageError> {
        self.table = ResultTable::default();
        self.failed = 0;
        let effect = self.parameters.effect;

        for k in 0..self.repetitions {
            let data_seed = derive_seed(self.parameters.seed, k as u64);
            let sample = SyntheticSampleSource::new(
                self.parameters.size,
                effect,
                self.parameters.noise_std,
                self.parameters.covariates,
                data_seed,
            )?
            .generate()?;

            let config = self
                .bootstrap
                .clone()
                .with_seed(derive_seed(self.bootstrap.seed, k as u64));
            let aggregator = BootstrapAggregator::new(config)?;

            match aggregator.run(&sample, self.estimator.as_ref()) {
                Ok(r) => self.table.push(CoverageRow {
                    repetition: k,
                    data_seed,
                    estimate: r.estimate,
                    std_error: r.std_error,
                    ci_lower: r.ci_lower,
                    ci_upper: r.ci_upper,
                    covered: r.ci_contains(effect),
                }),
                Err(e) => {
                    warn!("coverage repetition {k} failed: {e}");
                    self.failed += 1;
                }
            }

            if let Some(tx) = &self.progress_tx {
                let _ = tx.send(Progress {
                    completed: self.table.len(),
                    failed: self.failed,
                    total: self.repetitions,
                });
            }
        }

        if self.table.is_empty() {
            return Err(CoverageError::AllFailed(self.repetitions));
        }

        let rows = self.table.rows();
        let covered = rows.iter().filter(|r| r.covered).count();
        let estimates: Vec<f64> = rows.iter().map(|r| r.estimate).collect();
        let errors: Vec<f64> = rows.iter().map(|r| r.std_error).collect();
        let widths: Vec<f64> = rows.iter().map(|r| r.ci_upper - r.ci_lower).collect();

        let report = CoverageReport {
            repetitions: self.repetitions,
            failed: self.failed,
            true_effect: effect,
            coverage: covered as f64 / rows.len() as f64,
            mean_estimate: mean(&estimates),
            mean_std_error: mean(&errors),
            std_error_spread: if errors.len() > 1 {
                sample_std_dev(&errors)
            } else {
                0.0
            },
            mean_ci_width: mean(&widths),
        };
        debug!(
            "coverage study: {}/{} covered, mean se={:.4}",
            covered,
            rows.len(),
            report.mean_std_error
        );
        Ok(report)
    }
}
