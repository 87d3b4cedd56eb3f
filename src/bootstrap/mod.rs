mod aggregator;
mod config;
mod distribution;
mod error;
mod progress;
mod result;
pub mod seeding;

pub use aggregator::BootstrapAggregator;
pub use config::BootstrapConfig;
pub use distribution::{BootstrapDistribution, ReplicateOutcome};
pub use error::BootstrapError;
pub use progress::Progress;
pub use result::BootstrapResult;
pub use seeding::{derive_seed, draw_indices};
