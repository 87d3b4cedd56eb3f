use crate::estimators::{EstimatorError, PointEstimate, PointEstimator};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Forwards to the wrapped estimator and counts calls.
pub struct CountingEstimator<E> {
    inner: E,
    calls: AtomicUsize,
}

impl<E> CountingEstimator<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<D, E: PointEstimator<D>> PointEstimator<D> for CountingEstimator<E> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn estimate(&self, data: &D) -> Result<PointEstimate, EstimatorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.estimate(data)
    }
}
