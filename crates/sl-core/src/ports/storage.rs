//! Client storage port
//!
//! The host's async key-value store, shared by every file that runs the
//! plugin. Values are strings and the total stored size is capped by
//! [`QUOTA_BYTES`](crate::library::QUOTA_BYTES).

use async_trait::async_trait;

use super::StorageError;

#[async_trait]
pub trait ClientStoragePort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value atomically. A write that would exceed the quota
    /// fails with [`StorageError::QuotaExceeded`] and leaves the old value.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    async fn keys(&self) -> Result<Vec<String>, StorageError>;
}
