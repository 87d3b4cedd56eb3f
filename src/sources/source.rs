use crate::core::Sample;
use crate::sources::SourceError;

/// Provider of a tabular [`Sample`].
///
/// Live and synthetic implementations are interchangeable behind this trait
/// and picked by configuration, see
/// [`SourceChoice`](crate::config::SourceChoice).
pub trait SampleSource {
    fn name(&self) -> &str;

    /// Produces the full sample. Deterministic sources return the same
    /// sample on every call.
    fn load(&mut self) -> Result<Sample, SourceError>;
}
