//! Attempt and summary output on stdout.
mod format;
mod jsonl;
mod stream;


pub use stream::StreamReporter;

use crate::error::AppResult;
use crate::probe::{LoginAttempt, RunSummary};

/// Receives each attempt as soon as it completes, then the run summary.
pub trait AttemptReporter {
    /// Writes one attempt record.
    ///
    /// # Errors
    ///
    /// Returns an error when the record cannot be written.
    fn attempt(&mut self, attempt: &LoginAttempt) -> AppResult<()>;

    /// Writes the end-of-run summary.
    ///
    /// # Errors
    ///
    /// Returns an error when the summary cannot be written.
    fn summary(&mut self, summary: &RunSummary) -> AppResult<()>;
}
