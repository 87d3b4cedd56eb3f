use crate::estimators::{EstimatorError, PointEstimate, PointEstimator};
use std::marker::PhantomData;

/// Adapts a closure returning a bare scalar into a [`PointEstimator`].
pub struct FnEstimator<D: ?Sized, F> {
    name: String,
    f: F,
    _data: PhantomData<fn(&D)>,
}

impl<D: ?Sized, F> FnEstimator<D, F>
where
    F: Fn(&D) -> Result<f64, EstimatorError> + Sync,
{
    pub fn new<N: Into<String>>(name: N, f: F) -> Self {
        Self {
            name: name.into(),
            f,
            _data: PhantomData,
        }
    }
}

impl<D: ?Sized, F> PointEstimator<D> for FnEstimator<D, F>
where
    F: Fn(&D) -> Result<f64, EstimatorError> + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn estimate(&self, data: &D) -> Result<PointEstimate, EstimatorError> {
        (self.f)(data).map(PointEstimate::new)
    }
}
