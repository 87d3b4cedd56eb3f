use crate::estimators::EstimatorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("estimator failed on the original data: {0}")]
    EstimatorFailure(#[source] EstimatorError),

    #[error("{failed} of {attempted} replicates failed (allowed fraction {threshold})")]
    TooManyFailedReplicates {
        failed: usize,
        attempted: usize,
        threshold: f64,
    },

    #[error("deadline exceeded with {completed} of {requested} replicates completed")]
    Timeout { completed: usize, requested: usize },

    #[error("could not build worker pool: {0}")]
    ThreadPool(String),
}
