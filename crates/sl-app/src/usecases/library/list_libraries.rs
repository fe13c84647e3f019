use std::sync::Arc;

use sl_core::library::LibraryStats;
use sl_core::ports::{StorageError, StyleCatalogPort};
use sl_core::LibraryId;
use tracing::debug;

use super::LibraryStore;
use crate::usecases::ActiveLibraries;

/// Which command the list is offered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryListMode {
    /// Libraries the open file can switch on; its own publication is left out.
    Toggle,
    /// Every stored library, including the open file's own and entries that
    /// no longer parse.
    Remove,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryListing {
    pub id: LibraryId,
    pub stats: LibraryStats,
    /// Published by another file.
    pub is_remote: bool,
    pub active: bool,
}

/// Use case for listing stored libraries with their storage stats.
pub struct ListLibraries {
    catalog: Arc<dyn StyleCatalogPort>,
    store: LibraryStore,
    active: ActiveLibraries,
}

impl ListLibraries {
    pub fn new(catalog: Arc<dyn StyleCatalogPort>, store: LibraryStore, active: ActiveLibraries) -> Self {
        Self {
            catalog,
            store,
            active,
        }
    }

    #[tracing::instrument(name = "usecase.list_libraries.execute", skip(self))]
    pub async fn execute(&self, mode: LibraryListMode) -> Result<Vec<LibraryListing>, StorageError> {
        let own = LibraryId::new(self.catalog.file_name());
        let active = self.active.get();

        let mut listings = Vec::new();
        for id in self.store.ids().await? {
            let is_remote = id != own;
            if mode == LibraryListMode::Toggle && !is_remote {
                continue;
            }
            let Some(stored) = self.store.stats(&id).await? else {
                continue;
            };
            // Unreadable entries stay removable so their storage can be freed.
            if !stored.readable && mode == LibraryListMode::Toggle {
                debug!(library = %id, "Skipping unreadable library");
                continue;
            }
            listings.push(LibraryListing {
                active: active.contains(&id),
                id,
                stats: stored.stats,
                is_remote,
            });
        }
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_core::ports::ClientStoragePort;
    use sl_core::LibraryEntry;
    use sl_infra::catalog::{CatalogSnapshot, SnapshotCatalog};
    use sl_infra::metadata::InMemoryFileMetadata;
    use sl_infra::storage::InMemoryClientStorage;

    async fn fixture() -> (ListLibraries, ActiveLibraries) {
        fixture_with(Arc::new(InMemoryClientStorage::new())).await
    }

    async fn fixture_with(storage: Arc<InMemoryClientStorage>) -> (ListLibraries, ActiveLibraries) {
        let store = LibraryStore::new(storage);
        for name in ["Brand", "Icons", "This File"] {
            let sealed = LibraryEntry::new(0).seal().unwrap();
            store.save(&LibraryId::new(name), &sealed).await.unwrap();
        }
        let active = ActiveLibraries::new(Arc::new(InMemoryFileMetadata::new()), "activeLibraries");
        active.add(&LibraryId::new("Icons")).unwrap();
        let catalog = Arc::new(SnapshotCatalog::new(CatalogSnapshot {
            file_name: "This File".to_string(),
            ..CatalogSnapshot::default()
        }));
        (ListLibraries::new(catalog, store, active.clone()), active)
    }

    #[tokio::test]
    async fn test_toggle_list_excludes_own_library() {
        let (usecase, _) = fixture().await;
        let listings = usecase.execute(LibraryListMode::Toggle).await.unwrap();
        let ids: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert!(!ids.contains(&"This File"));
        assert!(listings.iter().all(|l| l.is_remote));
        let icons = listings.iter().find(|l| l.id.as_str() == "Icons").unwrap();
        assert!(icons.active);
    }

    #[tokio::test]
    async fn test_remove_list_includes_own_library() {
        let (usecase, _) = fixture().await;
        let listings = usecase.execute(LibraryListMode::Remove).await.unwrap();
        assert_eq!(listings.len(), 3);
        let own = listings.iter().find(|l| l.id.as_str() == "This File").unwrap();
        assert!(!own.is_remote);
        assert_eq!(own.stats.style_count, 0);
    }

    #[tokio::test]
    async fn test_unreadable_library_is_only_offered_for_removal() {
        let storage = Arc::new(InMemoryClientStorage::new());
        storage.set("Broken", "x".repeat(400_000)).await.unwrap();
        let (usecase, _) = fixture_with(storage).await;

        let removable = usecase.execute(LibraryListMode::Remove).await.unwrap();
        assert_eq!(removable.len(), 4);
        let broken = removable.iter().find(|l| l.id.as_str() == "Broken").unwrap();
        assert_eq!(broken.stats.style_count, 0);
        assert_eq!(broken.stats.bytes, 400_000);

        let toggleable = usecase.execute(LibraryListMode::Toggle).await.unwrap();
        assert!(toggleable.iter().all(|l| l.id.as_str() != "Broken"));
    }
}
