use std::fmt::Write as _;

use crate::error::{AppError, AppResult, ReportError};
use crate::probe::{AttemptOutcome, LoginAttempt, ResponseBody, RunSummary};

pub(super) fn write_line(output: &mut String, line: &str) -> AppResult<()> {
    writeln!(output, "{}", line)
        .map_err(|err| AppError::report(ReportError::FormatLine { source: err }))
}

/// Renders an attempt the way the manual script printed it: status on one
/// line, body on the next.
pub(super) fn format_attempt_text(attempt: &LoginAttempt) -> AppResult<String> {
    let mut output = String::new();
    match &attempt.outcome {
        AttemptOutcome::Response { status, body } => {
            write_line(
                &mut output,
                &format!("{} : Response Status Code: {}", attempt.index, status),
            )?;
            match body {
                ResponseBody::Json(value) => {
                    write_line(&mut output, &format!("Response Content: {}", value))?;
                }
                ResponseBody::Raw { text, parse_error } => {
                    write_line(
                        &mut output,
                        &format!("Response Content (unparsed: {}): {:?}", parse_error, text),
                    )?;
                }
            }
        }
        AttemptOutcome::TransportFailure { kind, message } => {
            write_line(
                &mut output,
                &format!("{} : Request Failed: {}: {}", attempt.index, kind, message),
            )?;
        }
    }
    Ok(output)
}

pub(super) fn format_summary_text(summary: &RunSummary) -> AppResult<String> {
    let mut output = String::new();
    write_line(&mut output, &format!("Attempts: {}", summary.attempts))?;
    for (status, count) in &summary.statuses {
        write_line(&mut output, &format!("Status {}: {}", status, count))?;
    }
    write_line(
        &mut output,
        &format!("Transport Failures: {}", summary.transport_failures),
    )?;
    let first = summary
        .first_rate_limited
        .map_or_else(|| "none".to_owned(), |index| index.to_string());
    write_line(&mut output, &format!("First 429 at index: {}", first))?;
    Ok(output)
}
