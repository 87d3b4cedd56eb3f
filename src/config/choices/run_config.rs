use crate::bootstrap::BootstrapConfig;
use crate::config::BuildError;
use crate::config::choices::{EstimatorChoice, SourceChoice};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything one effect study needs: where the data comes from, which
/// estimator to bootstrap and how.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RunConfig {
    pub source: SourceChoice,

    #[serde(default)]
    pub estimator: EstimatorChoice,

    pub bootstrap: BootstrapConfig,
}

impl RunConfig {
    pub fn from_json_str(s: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, BuildError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, BuildError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn json_schema() -> Schema {
        schema_for!(RunConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::choices::{AipwParameters, SourceKind, SyntheticParameters};
    use strum::IntoEnumIterator;

    const CONFIG: &str = r#"{
        "source": { "type": "synthetic", "params": { "effect": 5.0, "seed": 7 } },
        "bootstrap": { "replicates": 2000 }
    }"#;

    #[test]
    fn parses_minimal_config_with_defaults() {
        let cfg = RunConfig::from_json_str(CONFIG).unwrap();
        match &cfg.source {
            SourceChoice::Synthetic(p) => {
                assert_eq!(p.effect, 5.0);
                assert_eq!(p.size, 52);
                assert_eq!(p.noise_std, 1.0);
                assert_eq!(p.seed, 7);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(cfg.estimator, EstimatorChoice::Aipw(AipwParameters { clip: 0.01 }));
        assert_eq!(cfg.bootstrap.replicates, 2000);
        assert_eq!(cfg.bootstrap.seed, 42);
    }

    #[test]
    fn missing_replicates_is_an_error() {
        let err = RunConfig::from_json_str(
            r#"{"source": {"type": "synthetic", "params": {"effect": 1.0}}, "bootstrap": {}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, BuildError::Json(_)));
    }

    #[test]
    fn pretty_json_round_trips() {
        let cfg = RunConfig {
            source: SourceChoice::Synthetic(SyntheticParameters::with_effect(2.0)),
            estimator: EstimatorChoice::default(),
            bootstrap: BootstrapConfig::new(300).with_workers(2),
        };
        let text = cfg.to_json_pretty().unwrap();
        assert!(text.contains("\"type\": \"synthetic\""));
        assert_eq!(RunConfig::from_json_str(&text).unwrap(), cfg);
    }

    #[test]
    fn schema_lists_every_source_kind() {
        let schema = serde_json::to_string(&RunConfig::json_schema()).unwrap();
        for kind in SourceKind::iter() {
            let key: &'static str = kind.into();
            assert!(schema.contains(key), "schema lacks {key}");
        }
        assert!(schema.contains("Replicates"));
    }
}
