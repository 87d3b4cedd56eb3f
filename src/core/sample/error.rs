use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SampleError {
    #[error("record {index} has {found} covariates, expected {expected}")]
    CovariateDimension {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("record {index} has a non-finite {field}")]
    NonFinite { index: usize, field: &'static str },
}
