use crate::config::choices::NoParams;
use crate::estimators::DEFAULT_PROPENSITY_CLIP;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_clip() -> f64 {
    DEFAULT_PROPENSITY_CLIP
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AipwParameters {
    #[serde(default = "default_clip")]
    #[schemars(
        title = "Propensity clip",
        description = "Scores are clipped to [clip, 1 - clip] (0-0.5).",
        range(min = 0.0, max = 0.5),
        default = "default_clip"
    )]
    pub clip: f64,
}

impl Default for AipwParameters {
    fn default() -> Self {
        Self {
            clip: default_clip(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(EstimatorKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum EstimatorChoice {
    #[strum_discriminants(strum(
        message = "Difference in means",
        detailed_message = "Unadjusted treated minus control mean."
    ))]
    DifferenceInMeans(NoParams),

    #[strum_discriminants(strum(
        message = "AIPW",
        detailed_message = "Doubly robust augmented inverse probability weighting."
    ))]
    Aipw(AipwParameters),
}

impl Default for EstimatorChoice {
    fn default() -> Self {
        Self::Aipw(AipwParameters::default())
    }
}
