//! Aggregate outcome of one batch run

use std::fmt;

/// Per-run counters, accumulated by the orchestrator as it visits each
/// document. Ephemeral: nothing is persisted between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents for which a record was written
    pub processed: usize,

    /// Documents skipped because their MIME type is unsupported
    pub skipped: usize,

    /// Documents whose extraction, generation, or write step failed
    pub failed: usize,
}

impl RunSummary {
    /// Whether the run produced no records at all
    pub fn is_empty(&self) -> bool {
        self.processed == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} processed, {} skipped, {} failed",
            self.processed, self.skipped, self.failed
        )
    }
}
