use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult, ReportError};
use crate::probe::{AttemptOutcome, FailureKind, LoginAttempt, ResponseBody, RunSummary};

#[derive(Debug, Serialize)]
struct AttemptRecord<'a> {
    index: u64,
    sent_at: String,
    elapsed_ms: u64,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_body: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl<'a> AttemptRecord<'a> {
    fn new(attempt: &'a LoginAttempt) -> Self {
        let mut record = AttemptRecord {
            index: attempt.index,
            sent_at: attempt.sent_at.to_rfc3339(),
            elapsed_ms: u64::try_from(attempt.elapsed.as_millis()).unwrap_or(u64::MAX),
            outcome: "response",
            status: None,
            body: None,
            raw_body: None,
            parse_error: None,
            kind: None,
            message: None,
        };
        match &attempt.outcome {
            AttemptOutcome::Response { status, body } => {
                record.status = Some(*status);
                match body {
                    ResponseBody::Json(value) => record.body = Some(value),
                    ResponseBody::Raw { text, parse_error } => {
                        record.raw_body = Some(text.as_str());
                        record.parse_error = Some(parse_error.as_str());
                    }
                }
            }
            AttemptOutcome::TransportFailure { kind, message } => {
                record.outcome = "transport_failure";
                record.kind = Some(*kind);
                record.message = Some(message.as_str());
            }
        }
        record
    }
}

#[derive(Debug, Serialize)]
struct SummaryRecord<'a> {
    summary: &'a RunSummary,
}

pub(super) fn attempt_line(attempt: &LoginAttempt) -> AppResult<String> {
    serde_json::to_string(&AttemptRecord::new(attempt))
        .map_err(|err| AppError::report(ReportError::SerializeRecord { source: err }))
}

pub(super) fn summary_line(summary: &RunSummary) -> AppResult<String> {
    serde_json::to_string(&SummaryRecord { summary })
        .map_err(|err| AppError::report(ReportError::SerializeRecord { source: err }))
}
