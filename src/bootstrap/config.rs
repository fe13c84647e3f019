//! # Configuration Loader
//!
//! Reads the plugin's TOML configuration into [`PluginConfig`].
//!
//! Pure data loading: every field has a default, unknown keys are ignored
//! and a missing file yields the defaults. The storage quota is fixed by the
//! host and cannot be configured here.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use sl_app::PluginSettings;

/// Plugin configuration as it appears on disk.
///
/// ```toml
/// active_libraries_key = "activeLibraries"
/// notify_timeout_ms = 5000
/// include_color_variables = true
/// log_filter = "sl_app=trace"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    pub active_libraries_key: String,
    pub notify_timeout_ms: u64,
    pub include_color_variables: bool,
    /// Overrides the default tracing directives when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        let settings = PluginSettings::default();
        Self {
            active_libraries_key: settings.active_libraries_key,
            notify_timeout_ms: settings.notify_timeout_ms,
            include_color_variables: settings.include_color_variables,
            log_filter: None,
        }
    }
}

impl PluginConfig {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Failed to parse config as TOML")
    }

    /// Settings handed to the use cases.
    pub fn settings(&self) -> PluginSettings {
        PluginSettings {
            active_libraries_key: self.active_libraries_key.clone(),
            notify_timeout_ms: self.notify_timeout_ms,
            include_color_variables: self.include_color_variables,
        }
    }
}

/// Load configuration from a TOML file.
///
/// A file that does not exist is not an error; the defaults are returned.
///
/// # Errors
///
/// Returns error if the file exists but cannot be read, or is not valid TOML
/// for [`PluginConfig`].
pub fn load_config(config_path: &Path) -> anyhow::Result<PluginConfig> {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config file, using defaults");
        return Ok(PluginConfig::default());
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    PluginConfig::from_toml_str(&content)
}
