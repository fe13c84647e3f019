//! # Dependency Wiring
//!
//! Turns host ports plus configuration into [`AppDeps`], and builds a local
//! host from files on disk for runs outside the design tool.
//!
//! The only place that knows which adapter backs which port.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use sl_app::AppDeps;
use sl_core::ports::{
    ClientStoragePort, ClockPort, FileMetadataPort, NotifierPort, PluginLifecyclePort,
    SelectionPort, StyleCatalogPort, StyleResolverPort,
};
use sl_infra::catalog::SnapshotCatalog;
use sl_infra::metadata::InMemoryFileMetadata;
use sl_infra::selection::{InMemorySelection, SelectedNode};
use sl_infra::storage::FileClientStorage;
use sl_infra::time::SystemClock;
use sl_infra::ui::{CloseSignal, LogNotifier};

use super::config::PluginConfig;

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors while building the adapters.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Client storage initialization failed: {0}")]
    StorageInit(String),

    #[error("Style catalog load failed: {0}")]
    CatalogLoad(String),
}

/// Ports supplied by the host application.
///
/// The clock is not a host concern and is added during wiring.
pub struct HostPorts {
    pub storage: Arc<dyn ClientStoragePort>,
    pub metadata: Arc<dyn FileMetadataPort>,
    pub catalog: Arc<dyn StyleCatalogPort>,
    pub resolver: Arc<dyn StyleResolverPort>,
    pub selection: Arc<dyn SelectionPort>,
    pub notifier: Arc<dyn NotifierPort>,
    pub lifecycle: Arc<dyn PluginLifecyclePort>,
}

/// Combine host ports and configuration into the use case dependencies.
pub fn wire_dependencies(host: HostPorts, config: &PluginConfig) -> AppDeps {
    wire_dependencies_with_clock(host, config, Arc::new(SystemClock))
}

pub fn wire_dependencies_with_clock(
    host: HostPorts,
    config: &PluginConfig,
    clock: Arc<dyn ClockPort>,
) -> AppDeps {
    AppDeps {
        storage: host.storage,
        metadata: host.metadata,
        catalog: host.catalog,
        resolver: host.resolver,
        selection: host.selection,
        notifier: host.notifier,
        lifecycle: host.lifecycle,
        clock,
        settings: config.settings(),
    }
}

/// A host assembled from local files.
///
/// Client storage lives in a directory shared by every "file", the open
/// file's styles come from a catalog snapshot and its plugin data is held in
/// memory. The concrete handles stay available for inspection.
pub struct LocalHost {
    pub storage: Arc<FileClientStorage>,
    pub metadata: Arc<InMemoryFileMetadata>,
    pub catalog: Arc<SnapshotCatalog>,
    pub selection: Arc<InMemorySelection>,
    pub notifier: Arc<LogNotifier>,
    pub lifecycle: Arc<CloseSignal>,
}

impl LocalHost {
    pub fn ports(&self) -> HostPorts {
        HostPorts {
            storage: self.storage.clone(),
            metadata: self.metadata.clone(),
            catalog: self.catalog.clone(),
            resolver: self.catalog.clone(),
            selection: self.selection.clone(),
            notifier: self.notifier.clone(),
            lifecycle: self.lifecycle.clone(),
        }
    }
}

/// Build a [`LocalHost`] from a storage directory and a catalog snapshot.
///
/// # Errors
///
/// Returns `WiringError::StorageInit` if the storage directory cannot be
/// created and `WiringError::CatalogLoad` if the snapshot cannot be read or
/// parsed.
pub async fn local_host(
    storage_dir: &Path,
    catalog_path: &Path,
    selection: Vec<SelectedNode>,
) -> WiringResult<LocalHost> {
    let storage_dir: PathBuf = storage_dir.to_path_buf();
    tokio::fs::create_dir_all(&storage_dir).await.map_err(|e| {
        WiringError::StorageInit(format!(
            "Failed to create storage directory {}: {}",
            storage_dir.display(),
            e
        ))
    })?;

    let catalog = SnapshotCatalog::load(catalog_path)
        .await
        .map_err(|e| WiringError::CatalogLoad(format!("{e:#}")))?;

    tracing::info!(
        storage = %storage_dir.display(),
        file = %catalog.snapshot().file_name,
        "Local host ready"
    );

    Ok(LocalHost {
        storage: Arc::new(FileClientStorage::new(storage_dir)),
        metadata: Arc::new(InMemoryFileMetadata::new()),
        catalog: Arc::new(catalog),
        selection: Arc::new(InMemorySelection::new(selection)),
        notifier: Arc::new(LogNotifier::new()),
        lifecycle: Arc::new(CloseSignal::new()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_host_loads_catalog_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        std::fs::write(&catalog_path, r#"{"file_name":"Brand"}"#).unwrap();

        let host = local_host(&dir.path().join("storage"), &catalog_path, Vec::new())
            .await
            .unwrap();

        assert_eq!(host.catalog.snapshot().file_name, "Brand");
        assert!(dir.path().join("storage").is_dir());
    }

    #[tokio::test]
    async fn test_local_host_reports_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let result = local_host(dir.path(), &dir.path().join("missing.json"), Vec::new()).await;
        assert!(matches!(result, Err(WiringError::CatalogLoad(_))));
    }

    #[tokio::test]
    async fn test_wire_dependencies_applies_config() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        std::fs::write(&catalog_path, "{}").unwrap();
        let host = local_host(dir.path(), &catalog_path, Vec::new())
            .await
            .unwrap();

        let config = PluginConfig {
            notify_timeout_ms: 42,
            ..PluginConfig::default()
        };
        let deps = wire_dependencies(host.ports(), &config);
        assert_eq!(deps.settings.notify_timeout_ms, 42);
        assert_eq!(deps.settings.active_libraries_key, "activeLibraries");
    }
}
