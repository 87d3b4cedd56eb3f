/// Data that can be rebuilt from a vector of row indices.
///
/// The bootstrap draws `len()` indices with replacement and calls
/// [`resample`](Resample::resample) to materialize one replicate. Implementors
/// must be `Sync`: the original dataset is shared by reference across all
/// worker threads and never written to.
pub trait Resample: Sync {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds a new dataset whose `k`-th row is row `indices[k]` of `self`.
    ///
    /// Indices are assumed to be in `0..self.len()`.
    fn resample(&self, indices: &[usize]) -> Self
    where
        Self: Sized;
}

impl Resample for Vec<f64> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn resample(&self, indices: &[usize]) -> Self {
        indices.iter().map(|&i| self[i]).collect()
    }
}
