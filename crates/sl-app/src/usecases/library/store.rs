use std::sync::Arc;

use sl_core::library::{is_public_style_name, LibraryStats, SealedEntry};
use sl_core::ports::{ClientStoragePort, StorageError};
use sl_core::{LibraryEntry, LibraryId, StyleCategory, StyleRecord};
use tracing::{debug, warn};

/// Storage stats of one stored library.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredStats {
    pub stats: LibraryStats,
    /// False when the stored value no longer parses; the stats then hold only
    /// its raw size.
    pub readable: bool,
}

enum Stored {
    Entry(LibraryEntry),
    Unreadable { bytes: u64 },
}

/// Library entries in client storage, one key per library id.
#[derive(Clone)]
pub struct LibraryStore {
    storage: Arc<dyn ClientStoragePort>,
}

impl LibraryStore {
    pub fn new(storage: Arc<dyn ClientStoragePort>) -> Self {
        Self { storage }
    }

    async fn read(&self, id: &LibraryId) -> Result<Option<Stored>, StorageError> {
        let Some(raw) = self.storage.get(id.as_str()).await? else {
            debug!(library = %id, "Library entry not found");
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(entry) => Ok(Some(Stored::Entry(entry))),
            Err(err) => {
                warn!(library = %id, error = %err, "Unreadable library entry");
                Ok(Some(Stored::Unreadable {
                    bytes: raw.len() as u64,
                }))
            }
        }
    }

    /// Reads one entry. A missing key or an entry that no longer parses is
    /// `None`; stale references to it are expected.
    pub async fn load(&self, id: &LibraryId) -> Result<Option<LibraryEntry>, StorageError> {
        Ok(match self.read(id).await? {
            Some(Stored::Entry(entry)) => Some(entry),
            _ => None,
        })
    }

    pub async fn exists(&self, id: &LibraryId) -> Result<bool, StorageError> {
        Ok(self.storage.get(id.as_str()).await?.is_some())
    }

    /// Writes a sealed entry in one call, replacing any previous entry.
    pub async fn save(&self, id: &LibraryId, sealed: &SealedEntry) -> Result<(), StorageError> {
        self.storage.set(id.as_str(), sealed.json.clone()).await
    }

    pub async fn delete(&self, id: &LibraryId) -> Result<(), StorageError> {
        self.storage.delete(id.as_str()).await
    }

    /// Every stored library id, in storage order.
    pub async fn ids(&self) -> Result<Vec<LibraryId>, StorageError> {
        Ok(self
            .storage
            .keys()
            .await?
            .into_iter()
            .map(LibraryId::from)
            .collect())
    }

    pub async fn stats(&self, id: &LibraryId) -> Result<Option<StoredStats>, StorageError> {
        Ok(self.read(id).await?.map(|stored| match stored {
            Stored::Entry(entry) => StoredStats {
                stats: entry.stats(),
                readable: true,
            },
            Stored::Unreadable { bytes } => StoredStats {
                stats: LibraryStats::new(0, bytes),
                readable: false,
            },
        }))
    }

    /// Bytes held by every stored library except `excluding`: the recorded
    /// size of readable entries, the raw size of unreadable ones.
    pub async fn usage_excluding(&self, excluding: Option<&LibraryId>) -> Result<u64, StorageError> {
        let mut used = 0;
        for id in self.ids().await? {
            if Some(&id) == excluding {
                continue;
            }
            used += match self.read(&id).await? {
                Some(Stored::Entry(entry)) => entry.byte_size,
                Some(Stored::Unreadable { bytes }) => bytes,
                None => 0,
            };
        }
        Ok(used)
    }

    /// Public records of one category from a library, attributed to it.
    /// A missing library contributes nothing.
    pub async fn library_records(
        &self,
        id: &LibraryId,
        category: StyleCategory,
    ) -> Result<Vec<StyleRecord>, StorageError> {
        let Some(mut entry) = self.load(id).await? else {
            return Ok(Vec::new());
        };
        Ok(entry
            .take_records(category)
            .into_iter()
            .filter(|record| is_public_style_name(&record.name))
            .map(|record| record.stamped(id.clone()))
            .collect())
    }
}
