mod estimator_choice;
mod run_config;
mod source_choice;

pub use estimator_choice::*;
pub use run_config::RunConfig;
pub use source_choice::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoParams {}
