use thiserror::Error;

/// Errors from file store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend. Fatal for the
    /// current request; retry policy belongs to the caller.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for file store operations.
pub type StoreResult<T> = Result<T, StoreError>;
