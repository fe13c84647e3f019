use anyhow::{Context, Result};
use sl_core::LibraryId;
use tracing::info;

use super::LibraryStore;
use crate::usecases::ActiveLibraries;

/// Use case for deleting a stored library.
///
/// The id is also dropped from the open file's active set. Other files keep
/// their now-orphaned reference until they next change their set.
pub struct RemoveLibrary {
    store: LibraryStore,
    active: ActiveLibraries,
}

impl RemoveLibrary {
    pub fn new(store: LibraryStore, active: ActiveLibraries) -> Self {
        Self { store, active }
    }

    #[tracing::instrument(name = "usecase.remove_library.execute", skip(self), fields(library = %library))]
    pub async fn execute(&self, library: &LibraryId) -> Result<()> {
        self.store
            .delete(library)
            .await
            .with_context(|| format!("Failed to delete library {library}"))?;
        self.active
            .remove(library)
            .context("Failed to update active libraries")?;

        info!(library = %library, "Removed library");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use sl_core::ports::ClientStoragePort;
    use sl_infra::metadata::InMemoryFileMetadata;
    use sl_infra::storage::InMemoryClientStorage;

    #[tokio::test]
    async fn test_remove_deletes_entry_and_deactivates() {
        let storage = Arc::new(InMemoryClientStorage::new());
        storage.set("Brand", "{}".to_string()).await.unwrap();
        storage.set("Other", "{}".to_string()).await.unwrap();
        let active = ActiveLibraries::new(Arc::new(InMemoryFileMetadata::new()), "activeLibraries");
        active.add(&LibraryId::new("Brand")).unwrap();
        active.add(&LibraryId::new("Other")).unwrap();

        let usecase = RemoveLibrary::new(LibraryStore::new(storage.clone()), active.clone());
        usecase.execute(&LibraryId::new("Brand")).await.unwrap();

        assert!(storage.get("Brand").await.unwrap().is_none());
        assert!(storage.get("Other").await.unwrap().is_some());
        assert!(!active.contains(&LibraryId::new("Brand")));
        assert!(active.contains(&LibraryId::new("Other")));
    }

    #[tokio::test]
    async fn test_remove_missing_library_is_noop() {
        let storage = Arc::new(InMemoryClientStorage::new());
        let active = ActiveLibraries::new(Arc::new(InMemoryFileMetadata::new()), "activeLibraries");
        let usecase = RemoveLibrary::new(LibraryStore::new(storage), active);
        usecase.execute(&LibraryId::new("Gone")).await.unwrap();
    }
}
