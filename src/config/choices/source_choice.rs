use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_size() -> usize {
    52
}
fn default_noise_std() -> f64 {
    1.0
}
fn default_covariates() -> usize {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CsvParameters {
    #[schemars(
        with = "String",
        title = "CSV Path",
        description = "Path to a .csv file with a header row",
        extend("format" = "path", "x-extensions" = ["csv"])
    )]
    pub path: PathBuf,

    #[schemars(title = "Treatment column", description = "0/1 or true/false column")]
    pub treatment_column: String,

    #[schemars(title = "Outcome column", description = "Numeric outcome column")]
    pub outcome_column: String,

    #[serde(default)]
    #[schemars(
        title = "Covariate columns",
        description = "Numeric columns used by the nuisance models"
    )]
    pub covariate_columns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SyntheticParameters {
    #[serde(default = "default_size")]
    #[schemars(
        title = "Rows",
        description = "Number of generated records",
        range(min = 2),
        default = "default_size"
    )]
    pub size: usize,

    #[schemars(title = "Effect", description = "Injected average treatment effect")]
    pub effect: f64,

    #[serde(default = "default_noise_std")]
    #[schemars(
        title = "Noise",
        description = "Standard deviation of the outcome noise",
        range(min = 0.0),
        default = "default_noise_std"
    )]
    pub noise_std: f64,

    #[serde(default = "default_covariates")]
    #[schemars(
        title = "Covariates",
        description = "Number of standard normal covariates",
        default = "default_covariates"
    )]
    pub covariates: usize,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl SyntheticParameters {
    pub fn with_effect(effect: f64) -> Self {
        Self {
            size: default_size(),
            effect,
            noise_std: default_noise_std(),
            covariates: default_covariates(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SourceKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SourceChoice {
    #[strum_discriminants(strum(
        message = "CSV File",
        detailed_message = "Records read from a CSV file."
    ))]
    CsvFile(CsvParameters),

    #[strum_discriminants(strum(
        message = "Synthetic",
        detailed_message = "Seeded confounded design with a known effect."
    ))]
    Synthetic(SyntheticParameters),
}
