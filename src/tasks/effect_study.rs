use crate::bootstrap::{BootstrapAggregator, BootstrapResult, Progress};
use crate::config::{RunConfig, build_estimator, build_source};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::mpsc::Sender;

#[derive(Debug, Clone, Serialize)]
pub struct StudyReport {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub estimator: String,
    pub sample_size: usize,
    pub treated: usize,
    pub control: usize,
    pub config: RunConfig,
    pub result: BootstrapResult,
}

impl StudyReport {
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut w = BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        );
        serde_json::to_writer_pretty(&mut w, self)?;
        writeln!(w)?;
        w.flush()?;
        Ok(())
    }
}

/// Loads one sample and bootstraps the configured estimator on it.
pub struct EffectStudy {
    config: RunConfig,
    progress_tx: Option<Sender<Progress>>,
}

impl EffectStudy {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            progress_tx: None,
        }
    }

    pub fn with_progress(mut self, tx: Sender<Progress>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn run(&self) -> Result<StudyReport> {
        let mut source =
            build_source(self.config.source.clone()).context("building sample source")?;
        let estimator =
            build_estimator(self.config.estimator.clone()).context("building estimator")?;

        let sample = source
            .load()
            .with_context(|| format!("loading sample from {}", source.name()))?;
        info!(
            "{}: n={} (treated={}, control={})",
            source.name(),
            sample.len(),
            sample.treated_count(),
            sample.control_count()
        );

        let mut aggregator = BootstrapAggregator::new(self.config.bootstrap.clone())?;
        if let Some(tx) = &self.progress_tx {
            aggregator = aggregator.with_progress(tx.clone());
        }
        let result = aggregator
            .run(&sample, estimator.as_ref())
            .with_context(|| format!("bootstrapping {}", estimator.name()))?;
        info!("{}: {}", estimator.name(), result);

        Ok(StudyReport {
            generated_at: Utc::now(),
            source: source.name().to_string(),
            estimator: estimator.name().to_string(),
            sample_size: sample.len(),
            treated: sample.treated_count(),
            control: sample.control_count(),
            config: self.config.clone(),
            result,
        })
    }
}

pub fn run_from_file<P: AsRef<Path>>(path: P) -> Result<StudyReport> {
    let path = path.as_ref();
    let config = RunConfig::from_json_file(path)
        .with_context(|| format!("reading run config {}", path.display()))?;
    EffectStudy::new(config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::BootstrapConfig;
    use crate::config::{CsvParameters, EstimatorChoice, NoParams, SourceChoice, SyntheticParameters};
    use std::fs;
    use std::io::Write;
    use std::sync::mpsc;
    use tempfile::NamedTempFile;

    fn synthetic_config(replicates: usize) -> RunConfig {
        RunConfig {
            source: SourceChoice::Synthetic(SyntheticParameters::with_effect(5.0)),
            estimator: EstimatorChoice::default(),
            bootstrap: BootstrapConfig::new(replicates),
        }
    }

    #[test]
    fn synthetic_aipw_recovers_effect() {
        let report = EffectStudy::new(synthetic_config(400)).run().unwrap();
        assert_eq!(report.source, "synthetic");
        assert_eq!(report.estimator, "aipw");
        assert_eq!(report.sample_size, 52);
        assert_eq!(report.treated + report.control, 52);
        assert!((report.result.estimate - 5.0).abs() < 1.0);
        assert!(report.result.ci_lower <= report.result.ci_upper);
        assert!(report.result.diagnostics.contains_key("propensity_min"));
    }

    #[test]
    fn progress_is_forwarded() {
        let (tx, rx) = mpsc::channel();
        let study = EffectStudy::new(synthetic_config(30)).with_progress(tx);
        study.run().unwrap();
        drop(study);
        assert_eq!(rx.iter().count(), 30);
    }

    #[test]
    fn csv_study_from_config_file() {
        let mut data = NamedTempFile::new().unwrap();
        writeln!(data, "t,y").unwrap();
        for i in 0..20 {
            let base = if i % 2 == 1 { 3.0 } else { 1.0 };
            writeln!(data, "{},{}", i % 2, base + (i as f64) * 0.01).unwrap();
        }
        data.flush().unwrap();

        let config = RunConfig {
            source: SourceChoice::CsvFile(CsvParameters {
                path: data.path().to_path_buf(),
                treatment_column: "t".into(),
                outcome_column: "y".into(),
                covariate_columns: vec![],
            }),
            estimator: EstimatorChoice::DifferenceInMeans(NoParams::default()),
            bootstrap: BootstrapConfig::new(200),
        };
        let mut cfg_file = NamedTempFile::new().unwrap();
        cfg_file
            .write_all(config.to_json_pretty().unwrap().as_bytes())
            .unwrap();
        cfg_file.flush().unwrap();

        let report = run_from_file(cfg_file.path()).unwrap();
        assert_eq!(report.source, "csv-file");
        assert_eq!(report.sample_size, 20);
        assert!((report.result.estimate - 2.01).abs() < 1e-9);

        let out = NamedTempFile::new().unwrap();
        report.write_json(out.path()).unwrap();
        let v: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.path()).unwrap()).unwrap();
        assert_eq!(v["estimator"], "difference-in-means");
        assert!(v["generated_at"].is_string());
    }

    #[test]
    fn missing_config_file_has_context() {
        let err = run_from_file("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("reading run config"));
    }
}
