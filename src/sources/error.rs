use crate::core::SampleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("line {line}: cannot parse {column} value {value:?}")]
    Parse {
        line: usize,
        column: String,
        value: String,
    },

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("source has no header row")]
    Empty,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
