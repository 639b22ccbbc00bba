use thiserror::Error;

use loam_types::{RecordId, ValidationIssue};

/// Errors from record persistence operations.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The submitted content failed the persistence layer's declared
    /// constraints. Recovered locally by the dashboard: mapped to per-field
    /// errors and re-rendered, never propagated as fatal.
    #[error("content failed validation ({} issue(s))", .0.len())]
    Validation(Vec<ValidationIssue>),

    /// The requested record was not found.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// Failure in the underlying storage backend.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result alias for record persistence operations.
pub type RecordResult<T> = Result<T, RecordError>;
