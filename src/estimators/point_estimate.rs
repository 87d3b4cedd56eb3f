use serde::Serialize;
use std::collections::BTreeMap;

/// Output of one estimator fit: the scalar effect plus named nuisance
/// quantities kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointEstimate {
    pub effect: f64,
    pub diagnostics: BTreeMap<String, f64>,
}

impl PointEstimate {
    pub fn new(effect: f64) -> Self {
        Self {
            effect,
            diagnostics: BTreeMap::new(),
        }
    }

    pub fn with_diagnostic<N: Into<String>>(mut self, name: N, value: f64) -> Self {
        self.diagnostics.insert(name.into(), value);
        self
    }
}
