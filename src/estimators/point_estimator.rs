use crate::estimators::{EstimatorError, PointEstimate};

/// A pure statistic over a dataset of type `D`.
///
/// The bootstrap treats implementations as opaque and deterministic per
/// input: the same dataset must always produce the same estimate. The
/// estimator is shared by reference across worker threads, hence `Sync`.
pub trait PointEstimator<D: ?Sized>: Sync {
    fn name(&self) -> &str;

    fn estimate(&self, data: &D) -> Result<PointEstimate, EstimatorError>;
}
