use std::collections::BTreeMap;

use serde::Serialize;

use super::RATE_LIMITED_STATUS;
use super::attempt::{AttemptOutcome, LoginAttempt};

/// Tally of a run, folded one attempt at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub attempts: u64,
    pub statuses: BTreeMap<u16, u64>,
    pub transport_failures: u64,
    pub first_rate_limited: Option<u64>,
}

impl RunSummary {
    /// Folds one attempt into the tally. Returns `true` when this attempt is
    /// the first rate-limited response of the run.
    pub fn record(&mut self, attempt: &LoginAttempt) -> bool {
        self.attempts = self.attempts.saturating_add(1);
        match &attempt.outcome {
            AttemptOutcome::Response { status, .. } => {
                let counter = self.statuses.entry(*status).or_default();
                *counter = counter.saturating_add(1);
                if *status == RATE_LIMITED_STATUS && self.first_rate_limited.is_none() {
                    self.first_rate_limited = Some(attempt.index);
                    return true;
                }
                false
            }
            AttemptOutcome::TransportFailure { .. } => {
                self.transport_failures = self.transport_failures.saturating_add(1);
                false
            }
        }
    }
}
