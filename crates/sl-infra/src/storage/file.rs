//! File-backed client storage
//!
//! One file per key under a base directory. File names are the hex-encoded key
//! behind a fixed prefix so any library name, the empty one included, is a
//! valid file name.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use sl_core::library::QUOTA_BYTES;
use sl_core::ports::{ClientStoragePort, StorageError};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

const VALUE_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = ".json.tmp";
const FILE_PREFIX: &str = "k";

pub struct FileClientStorage {
    dir: PathBuf,
    quota: u64,
    // Serializes the quota check with the write that follows it.
    write_lock: Mutex<()>,
}

impl FileClientStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_quota(dir, QUOTA_BYTES)
    }

    pub fn with_quota(dir: impl Into<PathBuf>, quota: u64) -> Self {
        Self {
            dir: dir.into(),
            quota,
            write_lock: Mutex::new(()),
        }
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{FILE_PREFIX}{}", hex::encode(key.as_bytes())))
            .with_extension(VALUE_EXTENSION)
    }

    fn key_from_path(path: &Path) -> Option<String> {
        if path.extension()? != VALUE_EXTENSION {
            return None;
        }
        let stem = path.file_stem()?.to_str()?.strip_prefix(FILE_PREFIX)?;
        let bytes = hex::decode(stem).ok()?;
        String::from_utf8(bytes).ok()
    }

    async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create storage dir failed: {}", self.dir.display()))
    }

    /// Removes temp files left by writes that never reached their rename.
    /// Call with the write lock held.
    async fn sweep_temp_files(&self) -> Result<()> {
        if !fs::try_exists(&self.dir).await.unwrap_or(false) {
            return Ok(());
        }
        let mut dir = fs::read_dir(&self.dir)
            .await
            .with_context(|| format!("read storage dir failed: {}", self.dir.display()))?;
        while let Some(item) = dir.next_entry().await? {
            let path = item.path();
            let is_temp = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(TEMP_SUFFIX));
            if is_temp {
                fs::remove_file(&path)
                    .await
                    .with_context(|| format!("remove stale temp value failed: {}", path.display()))?;
                debug!(path = %path.display(), "Removed stale temp value");
            }
        }
        Ok(())
    }

    /// Stored keys with their value sizes.
    async fn entries(&self) -> Result<Vec<(String, u64)>> {
        if !fs::try_exists(&self.dir).await.unwrap_or(false) {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        let mut dir = fs::read_dir(&self.dir)
            .await
            .with_context(|| format!("read storage dir failed: {}", self.dir.display()))?;
        while let Some(item) = dir.next_entry().await? {
            let path = item.path();
            let Some(key) = Self::key_from_path(&path) else {
                continue;
            };
            let len = item.metadata().await?.len();
            entries.push((key, len));
        }
        entries.sort();
        Ok(entries)
    }

    async fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key);
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("read value failed: {}", path.display())),
        }
    }

    async fn atomic_write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir().await?;
        let path = self.value_path(key);
        let tmp_path = path.with_extension(&TEMP_SUFFIX[1..]);
        fs::write(&tmp_path, value)
            .await
            .with_context(|| format!("write temp value failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &path).await.with_context(|| {
            format!(
                "rename temp value to target failed: {} -> {}",
                tmp_path.display(),
                path.display()
            )
        })?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.value_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("remove value failed: {}", path.display())),
        }
    }
}

fn backend(err: anyhow::Error) -> StorageError {
    StorageError::Backend(format!("{err:#}"))
}

#[async_trait]
impl ClientStoragePort for FileClientStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.read(key).await.map_err(backend)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        self.sweep_temp_files().await.map_err(backend)?;

        let used: u64 = self
            .entries()
            .await
            .map_err(backend)?
            .into_iter()
            .filter(|(stored_key, _)| stored_key != key)
            .map(|(_, len)| len)
            .sum();
        let requested = value.len() as u64;
        let available = self.quota.saturating_sub(used);
        if requested > available {
            return Err(StorageError::QuotaExceeded {
                requested,
                available,
            });
        }

        self.atomic_write(key, &value).await.map_err(backend)?;
        debug!(key, bytes = requested, "Stored value");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        self.remove(key).await.map_err(backend)
    }

    async fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self
            .entries()
            .await
            .map_err(backend)?
            .into_iter()
            .map(|(key, _)| key)
            .collect())
    }
}
