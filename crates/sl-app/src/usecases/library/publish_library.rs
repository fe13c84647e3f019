use std::sync::Arc;

use sl_core::library::{is_public_style_name, remaining_quota, LibraryStats};
use sl_core::ports::{ClockPort, StorageError, StyleCatalogPort};
use sl_core::style::EncodeStyle;
use sl_core::{LibraryEntry, LibraryId, StyleRecord};
use thiserror::Error;
use tracing::{info, warn};

use super::LibraryStore;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("library {library} needs {requested} bytes but only {available} are free")]
    QuotaExceeded {
        library: LibraryId,
        requested: u64,
        available: u64,
    },

    #[error("failed to serialize library entry: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(StorageError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishOutcome {
    pub library: LibraryId,
    pub stats: LibraryStats,
    /// A previous publication of the same library was replaced.
    pub updated: bool,
}

/// Use case for publishing the open file's public styles as a library.
pub struct PublishLibrary {
    catalog: Arc<dyn StyleCatalogPort>,
    store: LibraryStore,
    clock: Arc<dyn ClockPort>,
}

impl PublishLibrary {
    pub fn new(
        catalog: Arc<dyn StyleCatalogPort>,
        store: LibraryStore,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            catalog,
            store,
            clock,
        }
    }

    /// Encodes every public style, then stores the catalog under the file name
    /// in a single write.
    ///
    /// The write is skipped when the entry cannot fit next to the other stored
    /// libraries; the storage's own quota check still applies. Either way a
    /// failed publish leaves the previous entry untouched.
    #[tracing::instrument(name = "usecase.publish_library.execute", skip(self))]
    pub async fn execute(&self) -> Result<PublishOutcome, PublishError> {
        let library = LibraryId::new(self.catalog.file_name());
        let entry = self.build_entry();
        let sealed = entry.seal()?;
        let requested = sealed.entry.byte_size;

        let updated = self
            .store
            .exists(&library)
            .await
            .map_err(PublishError::Storage)?;
        let used = self
            .store
            .usage_excluding(Some(&library))
            .await
            .map_err(PublishError::Storage)?;
        let available = remaining_quota(used);
        if requested > available {
            warn!(library = %library, requested, available, "Library does not fit in storage");
            return Err(PublishError::QuotaExceeded {
                library,
                requested,
                available,
            });
        }

        self.store
            .save(&library, &sealed)
            .await
            .map_err(|err| match err {
                StorageError::QuotaExceeded {
                    requested,
                    available,
                } => PublishError::QuotaExceeded {
                    library: library.clone(),
                    requested,
                    available,
                },
                other => PublishError::Storage(other),
            })?;

        let stats = sealed.entry.stats();
        info!(
            library = %library,
            styles = stats.style_count,
            bytes = stats.bytes,
            updated,
            "Published library"
        );
        Ok(PublishOutcome {
            library,
            stats,
            updated,
        })
    }

    fn build_entry(&self) -> LibraryEntry {
        let mut entry = LibraryEntry::new(self.clock.now_ms());
        let (paint, text, effect, grid) = (
            self.catalog.paint_styles(),
            self.catalog.text_styles(),
            self.catalog.effect_styles(),
            self.catalog.grid_styles(),
        );
        let records = public_records(&paint)
            .chain(public_records(&text))
            .chain(public_records(&effect))
            .chain(public_records(&grid));
        for record in records {
            entry.push(record);
        }
        entry
    }
}

/// Encodes the styles whose live name is public; hidden ones are never encoded.
fn public_records<S: EncodeStyle>(styles: &[S]) -> impl Iterator<Item = StyleRecord> + '_ {
    styles
        .iter()
        .filter(|style| is_public_style_name(style.name()))
        .filter_map(EncodeStyle::encode)
}
