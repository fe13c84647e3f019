//! Style catalog backed by a JSON snapshot of a file's styles.
//!
//! Used for local runs and tests in place of the live host catalog. The
//! snapshot can also list styles from team libraries that are importable by
//! key, so remote resolution behaves as it would in the host.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sl_core::ids::{LocalId, RemoteKey};
use sl_core::ports::{HostError, StyleCatalogPort, StyleResolverPort};
use sl_core::style::live::{
    ColorVariable, EffectStyle, GridStyle, PaintStyle, TextStyle, VariableType,
};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    pub file_name: String,
    pub paint_styles: Vec<PaintStyle>,
    pub text_styles: Vec<TextStyle>,
    pub effect_styles: Vec<EffectStyle>,
    pub grid_styles: Vec<GridStyle>,
    /// Every local variable, of any type.
    pub variables: Vec<ColorVariable>,
    /// Keys of styles and variables published elsewhere, with the id they
    /// get once imported into this file.
    pub importable: HashMap<RemoteKey, LocalId>,
}

pub struct SnapshotCatalog {
    snapshot: CatalogSnapshot,
}

impl SnapshotCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot = serde_json::from_str(json).context("parse catalog snapshot failed")?;
        Ok(Self::new(snapshot))
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("read catalog snapshot failed: {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    fn has_style(&self, id: &LocalId) -> bool {
        let snapshot = &self.snapshot;
        snapshot.paint_styles.iter().any(|style| &style.id == id)
            || snapshot.text_styles.iter().any(|style| &style.id == id)
            || snapshot.effect_styles.iter().any(|style| &style.id == id)
            || snapshot.grid_styles.iter().any(|style| &style.id == id)
    }

    fn local_style_by_key(&self, key: &RemoteKey) -> Option<LocalId> {
        let snapshot = &self.snapshot;
        snapshot
            .paint_styles
            .iter()
            .map(|style| (&style.key, &style.id))
            .chain(snapshot.text_styles.iter().map(|style| (&style.key, &style.id)))
            .chain(snapshot.effect_styles.iter().map(|style| (&style.key, &style.id)))
            .chain(snapshot.grid_styles.iter().map(|style| (&style.key, &style.id)))
            .find(|(style_key, _)| *style_key == key)
            .map(|(_, id)| id.clone())
    }

    fn import(&self, key: &RemoteKey) -> Result<LocalId, HostError> {
        self.snapshot
            .importable
            .get(key)
            .cloned()
            .ok_or_else(|| HostError::ImportFailed(format!("no published style with key {key}")))
    }
}

impl StyleCatalogPort for SnapshotCatalog {
    fn file_name(&self) -> String {
        self.snapshot.file_name.clone()
    }

    fn paint_styles(&self) -> Vec<PaintStyle> {
        self.snapshot.paint_styles.clone()
    }

    fn text_styles(&self) -> Vec<TextStyle> {
        self.snapshot.text_styles.clone()
    }

    fn effect_styles(&self) -> Vec<EffectStyle> {
        self.snapshot.effect_styles.clone()
    }

    fn grid_styles(&self) -> Vec<GridStyle> {
        self.snapshot.grid_styles.clone()
    }

    fn color_variables(&self) -> Vec<ColorVariable> {
        self.snapshot
            .variables
            .iter()
            .filter(|variable| variable.resolved_type == VariableType::Color)
            .cloned()
            .collect()
    }

    fn variable_by_id(&self, id: &LocalId) -> Option<ColorVariable> {
        self.snapshot
            .variables
            .iter()
            .find(|variable| &variable.id == id)
            .cloned()
    }
}

#[async_trait]
impl StyleResolverPort for SnapshotCatalog {
    async fn style_by_id(&self, id: &LocalId) -> Result<Option<LocalId>, HostError> {
        Ok(self.has_style(id).then(|| id.clone()))
    }

    async fn variable_by_id(&self, id: &LocalId) -> Result<Option<LocalId>, HostError> {
        Ok(StyleCatalogPort::variable_by_id(self, id).map(|variable| variable.id))
    }

    async fn import_style_by_key(&self, key: &RemoteKey) -> Result<LocalId, HostError> {
        // A key published from this same file resolves to the local style.
        if let Some(id) = self.local_style_by_key(key) {
            debug!(key = %key, id = %id, "Resolved key to local style");
            return Ok(id);
        }
        self.import(key)
    }

    async fn import_variable_by_key(&self, key: &RemoteKey) -> Result<LocalId, HostError> {
        if let Some(variable) = self.snapshot.variables.iter().find(|v| &v.key == key) {
            return Ok(variable.id.clone());
        }
        self.import(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "file_name": "Brand",
        "paint_styles": [
            {"id": "S:1", "key": "k1", "name": "Red",
             "paints": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0}}]}
        ],
        "text_styles": [
            {"id": "S:2", "key": "k2", "name": "Body", "font_size": 16,
             "line_height": {"unit": "AUTO"}}
        ],
        "variables": [
            {"id": "V:1", "key": "vk1", "name": "primary", "resolved_type": "COLOR",
             "values_by_mode": [{"type": "COLOR", "value": {"r": 0, "g": 0, "b": 1}}]},
            {"id": "V:2", "key": "vk2", "name": "spacing", "resolved_type": "FLOAT",
             "values_by_mode": [{"type": "OTHER"}]}
        ],
        "importable": {"remote-key": "S:99"}
    }"#;

    #[test]
    fn test_snapshot_parses_host_shapes() {
        let catalog = SnapshotCatalog::from_json(SNAPSHOT).unwrap();
        assert_eq!(catalog.file_name(), "Brand");
        assert_eq!(catalog.paint_styles().len(), 1);
        assert_eq!(catalog.text_styles().len(), 1);
        assert_eq!(catalog.color_variables().len(), 1);
        assert!(catalog.effect_styles().is_empty());
    }

    #[tokio::test]
    async fn test_resolves_local_and_imported_styles() {
        let catalog = SnapshotCatalog::from_json(SNAPSHOT).unwrap();
        assert_eq!(
            catalog.style_by_id(&LocalId::new("S:1")).await.unwrap(),
            Some(LocalId::new("S:1"))
        );
        assert_eq!(catalog.style_by_id(&LocalId::new("S:404")).await.unwrap(), None);
        assert_eq!(
            catalog.import_style_by_key(&RemoteKey::new("k2")).await.unwrap(),
            LocalId::new("S:2")
        );
        assert_eq!(
            catalog
                .import_style_by_key(&RemoteKey::new("remote-key"))
                .await
                .unwrap(),
            LocalId::new("S:99")
        );
        assert!(matches!(
            catalog.import_style_by_key(&RemoteKey::new("gone")).await,
            Err(HostError::ImportFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        tokio::fs::write(&path, SNAPSHOT).await.unwrap();
        let catalog = SnapshotCatalog::load(&path).await.unwrap();
        assert_eq!(catalog.snapshot().variables.len(), 2);
    }
}
