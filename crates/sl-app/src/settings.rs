//! Runtime settings consumed by use cases.

/// Values the use cases read from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSettings {
    /// Per-file metadata key holding the active library ids.
    pub active_libraries_key: String,
    /// Display time for publish, toggle and error notices.
    pub notify_timeout_ms: u64,
    /// Offer local color variables alongside paint styles.
    pub include_color_variables: bool,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            active_libraries_key: "activeLibraries".to_string(),
            notify_timeout_ms: 5000,
            include_color_variables: true,
        }
    }
}
