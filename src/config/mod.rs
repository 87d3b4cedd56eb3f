pub mod build;
pub mod choices;

pub use build::{BuildError, build_estimator, build_source};
pub use choices::{
    AipwParameters, CsvParameters, EstimatorChoice, EstimatorKind, NoParams, RunConfig,
    SourceChoice, SourceKind, SyntheticParameters,
};
