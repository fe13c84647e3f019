use std::collections::HashMap;
use std::sync::RwLock;

use sl_core::ports::{FileMetadataPort, HostError};

/// Per-file plugin data held in memory.
#[derive(Default)]
pub struct InMemoryFileMetadata {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryFileMetadata {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileMetadataPort for InMemoryFileMetadata {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        self.values
            .write()
            .map_err(|_| HostError::Other("plugin data lock poisoned".to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
