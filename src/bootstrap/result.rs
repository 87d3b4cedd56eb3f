use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result};

/// Summary of one bootstrap run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootstrapResult {
    /// Estimate on the original, non-resampled data.
    pub estimate: f64,
    /// Sample standard deviation of the successful replicates.
    pub std_error: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub confidence_level: f64,
    /// Two-sided, normal approximation, against zero.
    pub p_value: f64,
    pub replicates_requested: usize,
    pub replicates_used: usize,
    pub replicates_failed: usize,
    pub replicates_cancelled: usize,
    pub timed_out: bool,
    /// Nuisance quantities of the point estimate.
    pub diagnostics: BTreeMap<String, f64>,
}

impl BootstrapResult {
    pub fn ci_contains(&self, value: f64) -> bool {
        self.ci_lower <= value && value <= self.ci_upper
    }

    pub fn ci_width(&self) -> f64 {
        self.ci_upper - self.ci_lower
    }

    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

impl Display for BootstrapResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "estimate={:.6}, se={:.6}, {:.0}% ci=[{:.6}, {:.6}], p={:.4}, used={}/{}",
            self.estimate,
            self.std_error,
            self.confidence_level * 100.0,
            self.ci_lower,
            self.ci_upper,
            self.p_value,
            self.replicates_used,
            self.replicates_requested
        )?;
        if self.replicates_failed > 0 {
            write!(f, ", failed={}", self.replicates_failed)?;
        }
        if self.timed_out {
            write!(f, ", timed out ({} cancelled)", self.replicates_cancelled)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> BootstrapResult {
        BootstrapResult {
            estimate: 5.0,
            std_error: 0.5,
            ci_lower: 4.0,
            ci_upper: 6.0,
            confidence_level: 0.95,
            p_value: 0.0001,
            replicates_requested: 200,
            replicates_used: 198,
            replicates_failed: 2,
            replicates_cancelled: 0,
            timed_out: false,
            diagnostics: BTreeMap::new(),
        }
    }

    #[test]
    fn display_mentions_failures_only_when_present() {
        let r = result();
        let s = r.to_string();
        assert!(s.starts_with("estimate=5.000000, se=0.500000, 95% ci=[4.000000, 6.000000]"));
        assert!(s.ends_with("used=198/200, failed=2"), "{s}");

        let mut clean = result();
        clean.replicates_failed = 0;
        assert!(!clean.to_string().contains("failed"));
    }

    #[test]
    fn interval_helpers() {
        let r = result();
        assert!(r.ci_contains(5.0));
        assert!(r.ci_contains(4.0));
        assert!(!r.ci_contains(6.5));
        assert_eq!(r.ci_width(), 2.0);
        assert!(r.is_significant(0.05));
    }

    #[test]
    fn serializes_to_json() {
        let v = serde_json::to_value(result()).unwrap();
        assert_eq!(v["estimate"], 5.0);
        assert_eq!(v["replicates_failed"], 2);
        assert_eq!(v["timed_out"], false);
    }
}
