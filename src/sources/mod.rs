mod csv_file;
mod error;
mod source;
mod synthetic;

pub use csv_file::CsvSampleSource;
pub use error::SourceError;
pub use source::SampleSource;
pub use synthetic::SyntheticSampleSource;
