mod aipw;
mod difference_in_means;
mod error;
mod fn_estimator;
mod mean;
pub mod models;
mod point_estimate;
mod point_estimator;

pub use aipw::{Aipw, DEFAULT_PROPENSITY_CLIP};
pub use difference_in_means::DifferenceInMeans;
pub use error::EstimatorError;
pub use fn_estimator::FnEstimator;
pub use mean::Mean;
pub use point_estimate::PointEstimate;
pub use point_estimator::PointEstimator;
