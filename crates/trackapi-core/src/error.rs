use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// Errors surfaced by a [`TrackCatalog`](crate::TrackCatalog).
///
/// A missing track is not an error; lookups return `Option` and deletes
/// return `bool`.
#[derive(Debug, Clone, Error)]
pub enum TrackServiceError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
