use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to format line: {source}")]
    FormatLine {
        #[source]
        source: std::fmt::Error,
    },
    #[error("Failed to write attempt output: {source}")]
    WriteOutput {
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize record: {source}")]
    SerializeRecord {
        #[source]
        source: serde_json::Error,
    },
}
