use crate::bootstrap::BootstrapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
}
