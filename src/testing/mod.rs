pub mod fixtures;
pub mod stubs;

pub use fixtures::{normal_values, synthetic_sample};
pub use stubs::{CountingEstimator, FailEveryNth, SlowEstimator};
