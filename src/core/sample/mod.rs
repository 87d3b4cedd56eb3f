mod error;
mod record;
mod resample;
mod sample;

pub use error::SampleError;
pub use record::Record;
pub use resample::Resample;
pub use sample::Sample;
