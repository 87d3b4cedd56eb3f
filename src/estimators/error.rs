use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EstimatorError {
    #[error("{arm} arm has no observations")]
    EmptyArm { arm: &'static str },

    #[error("need at least {required} observations, got {found}")]
    TooFewObservations { required: usize, found: usize },

    #[error("design matrix is singular ({0})")]
    SingularDesign(&'static str),

    #[error("{model} did not converge after {iterations} iterations")]
    NotConverged {
        model: &'static str,
        iterations: usize,
    },

    #[error("estimate is not finite")]
    NonFinite,

    #[error("{0}")]
    Custom(String),
}
