use thiserror::Error;

/// Errors from content transformation operations.
#[derive(Debug, Error)]
pub enum ContentError {
    /// File storage failed while overlaying an upload. Fatal for the
    /// current request: a half-stored submission must not be persisted as
    /// if complete.
    #[error("file store error: {0}")]
    Store(#[from] loam_store::StoreError),
}

/// Result alias for content operations.
pub type ContentResult<T> = Result<T, ContentError>;
