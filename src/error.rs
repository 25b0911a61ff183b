use thiserror::Error;

use crate::schema::Role;

/// Convenience result type for per-attempt table reading and validation.
pub type ValidationResult<T> = Result<T, RejectionReason>;

/// Why an uploaded table was rejected.
///
/// Rejections are recoverable: the acquisition loop surfaces them to the user
/// and asks for a corrected file. Every variant carries enough context (the
/// columns actually seen, the accepted names) for a human to fix the source
/// file; the rendered message is part of the contract, not incidental logging.
#[derive(Debug, Error)]
pub enum RejectionReason {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be parsed as CSV.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// No column matched the channel's accepted names for a required role.
    #[error("missing {role} column. found columns: {found:?}; accepted names: {accepted:?}")]
    MissingColumn {
        role: Role,
        found: Vec<String>,
        accepted: &'static [&'static str],
    },

    /// An email table had neither a subject column nor a body column.
    #[error("no subject or body column found. found columns: {found:?}")]
    MissingTextSource { found: Vec<String> },

    /// A column expected to hold text held only numeric-looking values.
    #[error("column '{column}' contains numeric values where text was expected")]
    NotText { column: String },
}

/// Fatal corpus-level error.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Every channel was skipped or rejected; there is nothing to train on.
    #[error("no data accepted from any channel; cannot build a corpus")]
    NoData,
}

/// Errors from the model persistence collaborator.
#[derive(Debug, Error)]
pub enum ModelError {
    /// No saved model exists yet. Distinct from I/O failure so callers can
    /// tell the user to train first instead of reporting a broken disk.
    #[error("model not trained yet (no saved model found)")]
    NotTrained,

    /// Underlying I/O error while saving or loading.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
