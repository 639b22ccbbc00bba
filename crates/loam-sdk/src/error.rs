use thiserror::Error;

/// Errors from SDK operations.
///
/// Persistence validation failures never appear here — they are recovered
/// into [`SaveOutcome::Invalid`](crate::SaveOutcome::Invalid) before an
/// error is ever surfaced.
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("content error: {0}")]
    Content(#[from] loam_content::ContentError),

    #[error("record store error: {0}")]
    Record(#[from] loam_records::RecordError),
}

/// Result alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;
