use crate::estimators::{EstimatorError, PointEstimate, PointEstimator};
use std::thread;
use std::time::Duration;

/// Sleeps before delegating; drives deadline tests.
pub struct SlowEstimator<E> {
    inner: E,
    delay: Duration,
}

impl<E> SlowEstimator<E> {
    pub fn new(inner: E, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

impl<D, E: PointEstimator<D>> PointEstimator<D> for SlowEstimator<E> {
    fn name(&self) -> &str {
        "slow"
    }

    fn estimate(&self, data: &D) -> Result<PointEstimate, EstimatorError> {
        thread::sleep(self.delay);
        self.inner.estimate(data)
    }
}
