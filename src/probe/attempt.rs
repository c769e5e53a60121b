use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// One iteration of the probe: a login POST and what came back.
#[derive(Debug, Clone)]
pub struct LoginAttempt {
    pub index: u64,
    pub sent_at: DateTime<Utc>,
    pub elapsed: Duration,
    pub outcome: AttemptOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// The server answered, whatever the status.
    Response { status: u16, body: ResponseBody },
    /// No HTTP response was received.
    TransportFailure { kind: FailureKind, message: String },
}

impl AttemptOutcome {
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            AttemptOutcome::Response { status, .. } => Some(*status),
            AttemptOutcome::TransportFailure { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    /// Body that did not parse as JSON (including an empty body).
    Raw { text: String, parse_error: String },
}

impl ResponseBody {
    /// Parses a response body as JSON, keeping the raw text when it is not.
    #[must_use]
    pub fn parse(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(err) => ResponseBody::Raw {
                text,
                parse_error: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Connect,
    Timeout,
    Other,
}

impl FailureKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FailureKind::Connect => "connect",
            FailureKind::Timeout => "timeout",
            FailureKind::Other => "other",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
