mod effect_size;
mod error;
mod group_comparison;
mod mean_ci;
mod permutation;

pub use effect_size::{EffectMagnitude, cohens_d};
pub use error::InferenceError;
pub use group_comparison::{GroupComparison, GroupComparisonReport, compare_groups};
pub use mean_ci::{MIN_BOOTSTRAP_OBSERVATIONS, bootstrap_mean_ci};
pub use permutation::{PermutationTestResult, permutation_test};
