pub mod sample;

pub use sample::{Record, Resample, Sample, SampleError};
