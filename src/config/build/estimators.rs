use crate::config::build::BuildError;
use crate::config::choices::EstimatorChoice;
use crate::core::Sample;
use crate::estimators::{Aipw, DifferenceInMeans, PointEstimator};

pub fn build_estimator(
    choice: EstimatorChoice,
) -> Result<Box<dyn PointEstimator<Sample>>, BuildError> {
    match choice {
        EstimatorChoice::DifferenceInMeans(_) => Ok(Box::new(DifferenceInMeans)),
        EstimatorChoice::Aipw(p) => {
            if !(0.0..0.5).contains(&p.clip) {
                return Err(BuildError::InvalidParameter(
                    "clip must be in [0, 0.5)".into(),
                ));
            }
            Ok(Box::new(Aipw::new(p.clip)))
        }
    }
}
