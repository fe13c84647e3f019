use std::collections::BTreeMap;

use async_trait::async_trait;
use sl_core::library::QUOTA_BYTES;
use sl_core::ports::{ClientStoragePort, StorageError};
use tokio::sync::RwLock;

/// Client storage held in memory, with the host's quota enforced on write.
///
/// Usage is the total UTF-8 length of stored values. Keys are listed in
/// sorted order.
pub struct InMemoryClientStorage {
    values: RwLock<BTreeMap<String, String>>,
    quota: u64,
}

impl InMemoryClientStorage {
    pub fn new() -> Self {
        Self::with_quota(QUOTA_BYTES)
    }

    pub fn with_quota(quota: u64) -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            quota,
        }
    }

    pub async fn used_bytes(&self) -> u64 {
        self.values
            .read()
            .await
            .values()
            .map(|value| value.len() as u64)
            .sum()
    }
}

impl Default for InMemoryClientStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientStoragePort for InMemoryClientStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut values = self.values.write().await;
        let used: u64 = values
            .iter()
            .filter(|(stored_key, _)| stored_key.as_str() != key)
            .map(|(_, stored)| stored.len() as u64)
            .sum();
        let requested = value.len() as u64;
        let available = self.quota.saturating_sub(used);
        if requested > available {
            return Err(StorageError::QuotaExceeded {
                requested,
                available,
            });
        }
        values.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.values.write().await.remove(key);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.values.read().await.keys().cloned().collect())
    }
}
