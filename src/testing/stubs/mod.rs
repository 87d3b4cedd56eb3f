mod counting;
mod failing;
mod slow;

pub use counting::CountingEstimator;
pub use failing::FailEveryNth;
pub use slow::SlowEstimator;
