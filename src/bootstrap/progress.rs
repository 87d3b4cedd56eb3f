use std::fmt::{Display, Formatter, Result};

/// Fan-out progress, emitted once per finished replicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub failed: usize,
    pub total: usize,
}

impl Display for Progress {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "replicates={}/{}, failed={}",
            self.completed + self.failed,
            self.total,
            self.failed
        )
    }
}
