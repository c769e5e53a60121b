use std::io::Write;

use crate::args::OutputFormat;
use crate::error::{AppError, AppResult, ReportError};
use crate::probe::{LoginAttempt, RunSummary};

use super::AttemptReporter;
use super::format::{format_attempt_text, format_summary_text};
use super::jsonl::{attempt_line, summary_line};

/// Writes records to any `Write` (stdout in the binary), flushing after each
/// one so output keeps pace with the requests.
#[derive(Debug)]
pub struct StreamReporter<W: Write> {
    writer: W,
    format: OutputFormat,
    summary: bool,
}

impl<W: Write> StreamReporter<W> {
    pub const fn new(writer: W, format: OutputFormat, summary: bool) -> Self {
        Self {
            writer,
            format,
            summary,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, text: &str) -> AppResult<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|err| AppError::report(ReportError::WriteOutput { source: err }))
    }
}

impl<W: Write> AttemptReporter for StreamReporter<W> {
    fn attempt(&mut self, attempt: &LoginAttempt) -> AppResult<()> {
        let text = match self.format {
            OutputFormat::Text => format_attempt_text(attempt)?,
            OutputFormat::Jsonl => {
                let mut line = attempt_line(attempt)?;
                line.push('\n');
                line
            }
        };
        self.emit(&text)
    }

    fn summary(&mut self, summary: &RunSummary) -> AppResult<()> {
        if !self.summary {
            return Ok(());
        }
        let text = match self.format {
            OutputFormat::Text => format_summary_text(summary)?,
            OutputFormat::Jsonl => {
                let mut line = summary_line(summary)?;
                line.push('\n');
                line
            }
        };
        self.emit(&text)
    }
}
