use thiserror::Error;

/// Failure of the host key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded: {requested} bytes requested, {available} available")]
    QuotaExceeded { requested: u64, available: u64 },

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Failure of a host API call outside storage.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("import failed: {0}")]
    ImportFailed(String),

    #[error("host error: {0}")]
    Other(String),
}
