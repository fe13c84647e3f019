use std::sync::Arc;

use sl_core::ports::{FileMetadataPort, HostError};
use sl_core::{ActiveLibrarySet, LibraryId};
use tracing::{debug, warn};

/// The open file's set of active library ids.
///
/// Every mutation reads the whole persisted set, changes it and writes the
/// whole set back.
#[derive(Clone)]
pub struct ActiveLibraries {
    metadata: Arc<dyn FileMetadataPort>,
    key: String,
}

impl ActiveLibraries {
    pub fn new(metadata: Arc<dyn FileMetadataPort>, key: impl Into<String>) -> Self {
        Self {
            metadata,
            key: key.into(),
        }
    }

    /// Reads the persisted set. Unreadable data counts as an empty set.
    pub fn get(&self) -> ActiveLibrarySet {
        let Some(raw) = self.metadata.get(&self.key) else {
            return ActiveLibrarySet::default();
        };
        ActiveLibrarySet::from_json(&raw).unwrap_or_else(|err| {
            warn!(key = %self.key, error = %err, "Active library data is unreadable, starting empty");
            ActiveLibrarySet::default()
        })
    }

    pub fn contains(&self, id: &LibraryId) -> bool {
        self.get().contains(id)
    }

    /// Flips membership and returns the new state.
    pub fn toggle(&self, id: &LibraryId) -> Result<bool, HostError> {
        self.update(|set| set.toggle(id.clone()))
    }

    pub fn add(&self, id: &LibraryId) -> Result<(), HostError> {
        self.update(|set| {
            set.insert(id.clone());
        })
    }

    pub fn remove(&self, id: &LibraryId) -> Result<(), HostError> {
        self.update(|set| {
            set.remove(id);
        })
    }

    fn update<R>(&self, change: impl FnOnce(&mut ActiveLibrarySet) -> R) -> Result<R, HostError> {
        let mut set = self.get();
        let result = change(&mut set);
        self.metadata.set(&self.key, &set.to_json())?;
        debug!(key = %self.key, count = set.len(), "Saved active libraries");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryMetadata {
        values: Mutex<HashMap<String, String>>,
    }

    impl FileMetadataPort for MemoryMetadata {
        fn get(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn service() -> (Arc<MemoryMetadata>, ActiveLibraries) {
        let metadata = Arc::new(MemoryMetadata::default());
        let active = ActiveLibraries::new(metadata.clone(), "activeLibraries");
        (metadata, active)
    }

    #[test]
    fn test_starts_empty() {
        let (_, active) = service();
        assert!(active.get().is_empty());
    }

    #[test]
    fn test_toggle_persists_json_array() {
        let (metadata, active) = service();
        let brand = LibraryId::new("Brand");

        assert!(active.toggle(&brand).unwrap());
        assert_eq!(metadata.get("activeLibraries").unwrap(), r#"["Brand"]"#);
        assert!(!active.toggle(&brand).unwrap());
        assert_eq!(metadata.get("activeLibraries").unwrap(), "[]");
    }

    #[test]
    fn test_mixed_mutations_never_duplicate() {
        let (metadata, active) = service();
        let a = LibraryId::new("a");
        let b = LibraryId::new("b");

        active.add(&a).unwrap();
        active.add(&a).unwrap();
        active.toggle(&b).unwrap();
        active.add(&b).unwrap();
        active.remove(&a).unwrap();
        active.toggle(&a).unwrap();

        let stored: Vec<String> =
            serde_json::from_str(&metadata.get("activeLibraries").unwrap()).unwrap();
        assert_eq!(stored, ["b", "a"]);
    }

    #[test]
    fn test_unreadable_data_is_replaced_on_write() {
        let (metadata, active) = service();
        metadata.set("activeLibraries", "not json").unwrap();
        assert!(active.get().is_empty());

        active.add(&LibraryId::new("a")).unwrap();
        assert_eq!(metadata.get("activeLibraries").unwrap(), r#"["a"]"#);
    }
}
