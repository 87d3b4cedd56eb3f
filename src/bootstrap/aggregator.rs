use crate::bootstrap::seeding::{derive_seed, draw_indices};
use crate::bootstrap::{
    BootstrapConfig, BootstrapDistribution, BootstrapError, BootstrapResult, Progress,
    ReplicateOutcome,
};
use crate::core::Resample;
use crate::estimators::{EstimatorError, PointEstimator};
use crate::utils::math::two_sided_p_value;
use log::{debug, warn};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use std::time::Instant;

/// Nonparametric bootstrap around a [`PointEstimator`].
///
/// Replicate `i` resamples with the seed `derive_seed(config.seed, i)`, so
/// the set of replicate estimates depends only on the data, the estimator
/// and the configuration. Worker count and scheduling order never change it.
pub struct BootstrapAggregator {
    config: BootstrapConfig,
    progress_tx: Option<Sender<Progress>>,
}

impl BootstrapAggregator {
    pub fn new(config: BootstrapConfig) -> Result<Self, BootstrapError> {
        config.validate()?;
        Ok(Self {
            config,
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<Progress>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Estimates on the original data, then bootstraps the standard error,
    /// percentile interval and p-value.
    pub fn run<D, E>(&self, data: &D, estimator: &E) -> Result<BootstrapResult, BootstrapError>
    where
        D: Resample,
        E: PointEstimator<D> + ?Sized,
    {
        check_size(data)?;

        let point = estimator
            .estimate(data)
            .map_err(BootstrapError::EstimatorFailure)?;
        if !point.effect.is_finite() {
            return Err(BootstrapError::EstimatorFailure(EstimatorError::NonFinite));
        }

        let outcomes = self.fan_out(data, estimator)?;
        self.summarize(point.effect, point.diagnostics, &outcomes)
    }

    /// Raw replicate outcomes in replicate index order, without the point
    /// estimate or any summary.
    pub fn replicates<D, E>(
        &self,
        data: &D,
        estimator: &E,
    ) -> Result<Vec<ReplicateOutcome>, BootstrapError>
    where
        D: Resample,
        E: PointEstimator<D> + ?Sized,
    {
        check_size(data)?;
        self.fan_out(data, estimator)
    }

    fn fan_out<D, E>(
        &self,
        data: &D,
        estimator: &E,
    ) -> Result<Vec<ReplicateOutcome>, BootstrapError>
    where
        D: Resample,
        E: PointEstimator<D> + ?Sized,
    {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.workers.unwrap_or(0))
            .build()
            .map_err(|e| BootstrapError::ThreadPool(e.to_string()))?;

        let n = data.len();
        let total = self.config.replicates;
        let base_seed = self.config.seed;
        let deadline = self.config.deadline().map(|d| Instant::now() + d);
        let progress_tx = self.progress_tx.as_ref();
        let completed = AtomicUsize::new(0);
        let failed = AtomicUsize::new(0);

        debug!(
            "{}: dispatching {total} replicates of n={n} over {} workers",
            estimator.name(),
            pool.current_num_threads()
        );

        let outcomes = pool.install(|| {
            (0..total)
                .into_par_iter()
                .map(|i| {
                    if deadline.is_some_and(|d| Instant::now() >= d) {
                        return ReplicateOutcome::Cancelled;
                    }

                    let indices = draw_indices(n, derive_seed(base_seed, i as u64));
                    let resampled = data.resample(&indices);
                    let outcome = match estimator.estimate(&resampled) {
                        Ok(e) if e.effect.is_finite() => ReplicateOutcome::Completed(e.effect),
                        Ok(_) => ReplicateOutcome::Failed(EstimatorError::NonFinite.to_string()),
                        Err(err) => ReplicateOutcome::Failed(err.to_string()),
                    };

                    let (done, bad) = match outcome {
                        ReplicateOutcome::Completed(_) => (
                            completed.fetch_add(1, Ordering::Relaxed) + 1,
                            failed.load(Ordering::Relaxed),
                        ),
                        _ => (
                            completed.load(Ordering::Relaxed),
                            failed.fetch_add(1, Ordering::Relaxed) + 1,
                        ),
                    };
                    if let Some(tx) = progress_tx {
                        let _ = tx.send(Progress {
                            completed: done,
                            failed: bad,
                            total,
                        });
                    }

                    outcome
                })
                .collect::<Vec<_>>()
        });

        Ok(outcomes)
    }

    fn summarize(
        &self,
        estimate: f64,
        diagnostics: std::collections::BTreeMap<String, f64>,
        outcomes: &[ReplicateOutcome],
    ) -> Result<BootstrapResult, BootstrapError> {
        let requested = outcomes.len();
        let mut failed = 0usize;
        let mut cancelled = 0usize;
        for o in outcomes {
            match o {
                ReplicateOutcome::Failed(_) => failed += 1,
                ReplicateOutcome::Cancelled => cancelled += 1,
                ReplicateOutcome::Completed(_) => {}
            }
        }
        let attempted = requested - cancelled;
        let used = attempted - failed;
        let timed_out = cancelled > 0;
        let threshold = self.config.max_failure_fraction;

        let failure_fraction = if attempted == 0 {
            1.0
        } else {
            failed as f64 / attempted as f64
        };
        if failure_fraction > threshold || used < 2 {
            if timed_out {
                warn!("deadline hit with {used} of {requested} replicates usable");
                return Err(BootstrapError::Timeout {
                    completed: used,
                    requested,
                });
            }
            return Err(BootstrapError::TooManyFailedReplicates {
                failed,
                attempted,
                threshold,
            });
        }
        if failed > 0 {
            warn!("discarded {failed} failed replicates of {attempted}");
        }
        if timed_out {
            warn!("deadline hit, summarizing {used} of {requested} replicates");
        }

        let distribution = BootstrapDistribution::from_outcomes(outcomes);
        let std_error = distribution.std_dev();
        let (ci_lower, ci_upper) = distribution.percentile_interval(self.config.confidence_level);
        let p_value = two_sided_p_value(estimate, std_error);

        debug!(
            "bootstrap summary: estimate={estimate}, se={std_error}, ci=[{ci_lower}, {ci_upper}]"
        );

        Ok(BootstrapResult {
            estimate,
            std_error,
            ci_lower,
            ci_upper,
            confidence_level: self.config.confidence_level,
            p_value,
            replicates_requested: requested,
            replicates_used: used,
            replicates_failed: failed,
            replicates_cancelled: cancelled,
            timed_out,
            diagnostics,
        })
    }
}

fn check_size<D: Resample>(data: &D) -> Result<(), BootstrapError> {
    if data.len() < 2 {
        return Err(BootstrapError::InvalidInput(format!(
            "dataset must have at least 2 rows, got {}",
            data.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::{DifferenceInMeans, FnEstimator, Mean};
    use crate::testing::{
        CountingEstimator, FailEveryNth, SlowEstimator, normal_values, synthetic_sample,
    };
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn rejects_tiny_datasets_before_dispatch() {
        let counting = CountingEstimator::new(Mean);
        let agg = BootstrapAggregator::new(BootstrapConfig::new(100)).unwrap();

        let err = agg.run(&vec![1.0], &counting).unwrap_err();
        assert!(matches!(err, BootstrapError::InvalidInput(_)));
        assert_eq!(counting.calls(), 0);

        let err = agg.run(&Vec::<f64>::new(), &counting).unwrap_err();
        assert!(matches!(err, BootstrapError::InvalidInput(_)));
        assert_eq!(counting.calls(), 0);
    }

    #[test]
    fn single_replicate_is_invalid() {
        let err = BootstrapAggregator::new(BootstrapConfig::new(1))
            .err()
            .unwrap();
        assert!(matches!(err, BootstrapError::InvalidInput(_)));
    }

    #[test]
    fn estimator_failure_on_original_data_aborts() {
        let counting = CountingEstimator::new(FnEstimator::new("broken", |_: &Vec<f64>| {
            Err(EstimatorError::Custom("boom".into()))
        }));
        let agg = BootstrapAggregator::new(BootstrapConfig::new(50)).unwrap();
        let err = agg.run(&vec![1.0, 2.0, 3.0], &counting).unwrap_err();
        match err {
            BootstrapError::EstimatorFailure(inner) => {
                assert_eq!(inner, EstimatorError::Custom("boom".into()))
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(counting.calls(), 1);
    }

    #[test]
    fn standard_error_of_mean_matches_theory() {
        // sd(mean) = sigma / sqrt(n) = 2 / sqrt(400) = 0.1
        let data = normal_values(400, 10.0, 2.0, 3);
        let agg = BootstrapAggregator::new(BootstrapConfig::new(1000).with_seed(9)).unwrap();
        let r = agg.run(&data, &Mean).unwrap();

        assert!((r.std_error - 0.1).abs() < 0.02, "se={}", r.std_error);
        assert!(r.ci_lower <= r.estimate && r.estimate <= r.ci_upper);
        assert!(r.p_value < 1e-6);
        assert_eq!(r.replicates_used, 1000);
        assert_eq!(r.replicates_failed, 0);
        assert!(!r.timed_out);
    }

    #[test]
    fn same_inputs_give_identical_results() {
        let sample = synthetic_sample(80, 2.0, 1.0, 1, 21);
        let agg = BootstrapAggregator::new(BootstrapConfig::new(300).with_seed(5)).unwrap();
        let a = agg.run(&sample, &DifferenceInMeans).unwrap();
        let b = agg.run(&sample, &DifferenceInMeans).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn worker_count_does_not_change_replicates() {
        let sample = synthetic_sample(60, 1.5, 1.0, 1, 8);
        let one = BootstrapAggregator::new(BootstrapConfig::new(200).with_workers(1))
            .unwrap()
            .replicates(&sample, &DifferenceInMeans)
            .unwrap();
        let many = BootstrapAggregator::new(BootstrapConfig::new(200).with_workers(4))
            .unwrap()
            .replicates(&sample, &DifferenceInMeans)
            .unwrap();
        assert_eq!(one, many);
    }

    #[test]
    fn failures_under_threshold_are_discarded_and_reported() {
        // Every 20th replicate fails: 5% < 10%.
        let est = FailEveryNth::new(Mean, 20);
        let data = normal_values(50, 0.0, 1.0, 1);
        let agg = BootstrapAggregator::new(BootstrapConfig::new(200)).unwrap();
        let r = agg.run(&data, &est).unwrap();
        assert!(r.replicates_failed > 0);
        assert_eq!(r.replicates_used + r.replicates_failed, 200);
        assert!(r.to_string().contains("failed="));
    }

    #[test]
    fn failures_over_threshold_abort() {
        // Every 2nd replicate fails: ~50% > 10%.
        let est = FailEveryNth::new(Mean, 2);
        let data = normal_values(50, 0.0, 1.0, 1);
        let agg = BootstrapAggregator::new(BootstrapConfig::new(200)).unwrap();
        let err = agg.run(&data, &est).unwrap_err();
        match err {
            BootstrapError::TooManyFailedReplicates {
                failed, attempted, ..
            } => {
                assert_eq!(attempted, 200);
                assert!(failed > 20);
            }
            other => panic!("unexpected {other:?}"),
        }

        let lenient = BootstrapAggregator::new(
            BootstrapConfig::new(200).with_max_failure_fraction(0.9),
        )
        .unwrap();
        let r = lenient.run(&data, &est).unwrap();
        assert_eq!(r.replicates_used + r.replicates_failed, 200);
    }

    #[test]
    fn expired_deadline_cancels_and_times_out() {
        let est = SlowEstimator::new(Mean, Duration::from_millis(20));
        let data = normal_values(20, 0.0, 1.0, 2);
        let agg = BootstrapAggregator::new(
            BootstrapConfig::new(400)
                .with_workers(2)
                .with_deadline(Duration::from_millis(0)),
        )
        .unwrap();
        let err = agg.run(&data, &est).unwrap_err();
        match err {
            BootstrapError::Timeout {
                completed,
                requested,
            } => {
                assert_eq!(requested, 400);
                assert!(completed < 2);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn deadline_keeps_partial_results_when_enough_completed() {
        let est = SlowEstimator::new(Mean, Duration::from_millis(5));
        let data = normal_values(20, 0.0, 1.0, 2);
        let agg = BootstrapAggregator::new(
            BootstrapConfig::new(2_000)
                .with_workers(2)
                .with_deadline(Duration::from_millis(200)),
        )
        .unwrap();
        let r = agg.run(&data, &est).unwrap();
        assert!(r.timed_out);
        assert!(r.replicates_cancelled > 0);
        assert!(r.replicates_used >= 2);
        assert_eq!(
            r.replicates_used + r.replicates_failed + r.replicates_cancelled,
            2_000
        );
    }

    #[test]
    fn progress_reports_every_replicate() {
        let (tx, rx) = mpsc::channel();
        let data = normal_values(30, 0.0, 1.0, 4);
        let agg = BootstrapAggregator::new(BootstrapConfig::new(64))
            .unwrap()
            .with_progress(tx);
        agg.run(&data, &Mean).unwrap();
        drop(agg);

        let updates: Vec<Progress> = rx.iter().collect();
        assert_eq!(updates.len(), 64);
        assert!(updates.iter().all(|p| p.total == 64 && p.failed == 0));
        assert_eq!(updates.iter().map(|p| p.completed).max(), Some(64));
    }
}
