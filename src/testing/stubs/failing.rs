use crate::estimators::{EstimatorError, PointEstimate, PointEstimator};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fails on every `n`-th call (the `n`-th, `2n`-th, ...). The first call,
/// on the original data, succeeds for any `n >= 2`.
pub struct FailEveryNth<E> {
    inner: E,
    n: usize,
    calls: AtomicUsize,
}

impl<E> FailEveryNth<E> {
    pub fn new(inner: E, n: usize) -> Self {
        assert!(n >= 2, "n must be >= 2");
        Self {
            inner,
            n,
            calls: AtomicUsize::new(0),
        }
    }
}

impl<D, E: PointEstimator<D>> PointEstimator<D> for FailEveryNth<E> {
    fn name(&self) -> &str {
        "fail-every-nth"
    }

    fn estimate(&self, data: &D) -> Result<PointEstimate, EstimatorError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call % self.n == 0 {
            return Err(EstimatorError::Custom(format!("injected failure #{call}")));
        }
        self.inner.estimate(data)
    }
}
