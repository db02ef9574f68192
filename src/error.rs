use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Error type returned by ingestion functions.
///
/// The profiling engine itself never errors; malformed input degrades to
/// empty/sentinel output instead. Only the ingestion boundary is fallible.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input has two columns with the same header name.
    #[error("duplicate header '{name}'")]
    DuplicateHeader { name: String },

    /// The input has no header row at all.
    #[error("input is empty: no header row")]
    EmptyInput,
}
