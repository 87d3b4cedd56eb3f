pub mod bootstrap;
pub mod config;
pub mod core;
pub mod estimators;
pub mod inference;
pub mod sources;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
