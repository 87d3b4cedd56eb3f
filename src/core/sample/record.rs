use serde::{Deserialize, Serialize};

/// One observational unit: treatment indicator, outcome and covariates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub treatment: bool,
    pub outcome: f64,
    pub covariates: Vec<f64>,
}

impl Record {
    pub fn new(treatment: bool, outcome: f64, covariates: Vec<f64>) -> Record {
        Record {
            treatment,
            outcome,
            covariates,
        }
    }

    #[inline]
    pub fn treatment_value(&self) -> f64 {
        if self.treatment { 1.0 } else { 0.0 }
    }
}
