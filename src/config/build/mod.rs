mod error;
mod estimators;
mod sources;

pub use error::BuildError;

pub use estimators::build_estimator;
pub use sources::build_source;
