use crate::utils::math::{mean, quantile_linear_sorted, sample_std_dev};

/// Outcome of one resample-and-reestimate cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplicateOutcome {
    Completed(f64),
    Failed(String),
    /// Not started before the deadline.
    Cancelled,
}

impl ReplicateOutcome {
    pub fn value(&self) -> Option<f64> {
        match self {
            ReplicateOutcome::Completed(v) => Some(*v),
            _ => None,
        }
    }
}

/// Successful replicate estimates, in replicate index order.
///
/// Only summary statistics are read from it; it is dropped once the
/// [`BootstrapResult`](crate::bootstrap::BootstrapResult) is built.
#[derive(Debug, Clone)]
pub struct BootstrapDistribution {
    values: Vec<f64>,
    sorted: Vec<f64>,
}

impl BootstrapDistribution {
    pub fn new(values: Vec<f64>) -> Self {
        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        Self { values, sorted }
    }

    pub fn from_outcomes(outcomes: &[ReplicateOutcome]) -> Self {
        Self::new(outcomes.iter().filter_map(ReplicateOutcome::value).collect())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn mean(&self) -> f64 {
        mean(&self.values)
    }

    pub fn std_dev(&self) -> f64 {
        sample_std_dev(&self.values)
    }

    /// `q` in `[0, 1]`.
    pub fn percentile(&self, q: f64) -> f64 {
        quantile_linear_sorted(&self.sorted, q)
    }

    /// Equal-tailed percentile interval at `level`.
    pub fn percentile_interval(&self, level: f64) -> (f64, f64) {
        let alpha = (1.0 - level) / 2.0;
        let lo = self.percentile(alpha);
        let hi = self.percentile(1.0 - alpha);
        (lo.min(hi), lo.max(hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_completed_in_order() {
        let outcomes = vec![
            ReplicateOutcome::Completed(3.0),
            ReplicateOutcome::Failed("x".into()),
            ReplicateOutcome::Completed(1.0),
            ReplicateOutcome::Cancelled,
            ReplicateOutcome::Completed(2.0),
        ];
        let d = BootstrapDistribution::from_outcomes(&outcomes);
        assert_eq!(d.values(), &[3.0, 1.0, 2.0]);
        assert_eq!(d.len(), 3);
        assert!((d.mean() - 2.0).abs() < 1e-12);
        assert!((d.std_dev() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn percentile_interval_of_uniform_grid() {
        let d = BootstrapDistribution::new((0..=100).rev().map(f64::from).collect());
        let (lo, hi) = d.percentile_interval(0.95);
        assert!((lo - 2.5).abs() < 1e-9);
        assert!((hi - 97.5).abs() < 1e-9);
        assert!((d.percentile(0.5) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_distribution_has_zero_spread() {
        let d = BootstrapDistribution::new(vec![4.0; 10]);
        assert_eq!(d.std_dev(), 0.0);
        assert_eq!(d.percentile_interval(0.9), (4.0, 4.0));
    }
}
