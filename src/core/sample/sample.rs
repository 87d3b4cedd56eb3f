use crate::core::sample::{Record, Resample, SampleError};

/// Ordered, immutable collection of [`Record`]s sharing one covariate
/// dimension.
///
/// A `Sample` is validated once at construction: every record carries the
/// same number of covariates and only finite values. Estimators can rely on
/// that and skip per-call checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    records: Vec<Record>,
    covariate_dim: usize,
}

impl Sample {
    pub fn new(records: Vec<Record>) -> Result<Sample, SampleError> {
        let covariate_dim = records.first().map_or(0, |r| r.covariates.len());

        for (index, record) in records.iter().enumerate() {
            if record.covariates.len() != covariate_dim {
                return Err(SampleError::CovariateDimension {
                    index,
                    expected: covariate_dim,
                    found: record.covariates.len(),
                });
            }
            if !record.outcome.is_finite() {
                return Err(SampleError::NonFinite {
                    index,
                    field: "outcome",
                });
            }
            if record.covariates.iter().any(|v| !v.is_finite()) {
                return Err(SampleError::NonFinite {
                    index,
                    field: "covariate",
                });
            }
        }

        Ok(Sample {
            records,
            covariate_dim,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn covariate_dim(&self) -> usize {
        self.covariate_dim
    }

    pub fn treated_count(&self) -> usize {
        self.records.iter().filter(|r| r.treatment).count()
    }

    pub fn control_count(&self) -> usize {
        self.len() - self.treated_count()
    }

    pub fn outcomes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.outcome).collect()
    }

    pub fn treatments(&self) -> Vec<f64> {
        self.records.iter().map(Record::treatment_value).collect()
    }

    /// Row-major covariate matrix with a leading intercept column.
    pub fn design_with_intercept(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.len() * (self.covariate_dim + 1));
        for r in &self.records {
            out.push(1.0);
            out.extend_from_slice(&r.covariates);
        }
        out
    }
}

impl Resample for Sample {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn resample(&self, indices: &[usize]) -> Sample {
        Sample {
            records: indices.iter().map(|&i| self.records[i].clone()).collect(),
            covariate_dim: self.covariate_dim,
        }
    }
}
