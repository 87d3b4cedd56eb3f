use crate::bootstrap::{BootstrapAggregator, BootstrapConfig, BootstrapResult};
use crate::estimators::Mean;
use crate::inference::InferenceError;

/// Smallest group the percentile bootstrap is applied to.
pub const MIN_BOOTSTRAP_OBSERVATIONS: usize = 5;

/// Percentile bootstrap interval for the mean of `values`.
pub fn bootstrap_mean_ci(
    values: &[f64],
    config: &BootstrapConfig,
) -> Result<BootstrapResult, InferenceError> {
    if values.len() < MIN_BOOTSTRAP_OBSERVATIONS {
        return Err(InferenceError::InvalidInput(format!(
            "need at least {MIN_BOOTSTRAP_OBSERVATIONS} observations, got {}",
            values.len()
        )));
    }
    let aggregator = BootstrapAggregator::new(config.clone())?;
    Ok(aggregator.run(&values.to_vec(), &Mean)?)
}
