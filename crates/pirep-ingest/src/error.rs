use std::path::PathBuf;

/// Structural upload failures. These reject the whole batch; per-field
/// data-quality issues are findings, not errors, and never appear here.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("payload contains no records")]
    EmptyPayload,

    #[error("payload line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("failed to parse delimited payload: {message}")]
    Csv { message: String },

    #[error("failed to read payload file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
