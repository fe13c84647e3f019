//! # Application Dependencies
//!
//! Dependency grouping for [`App`](crate::App) construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - Just parameter grouping

use std::sync::Arc;

use sl_core::ports::*;

use crate::settings::PluginSettings;

/// Host ports and settings the use cases are built from.
///
/// All dependencies are required; no defaults, no optional fields.
pub struct AppDeps {
    // Storage
    pub storage: Arc<dyn ClientStoragePort>,
    pub metadata: Arc<dyn FileMetadataPort>,

    // Styles
    pub catalog: Arc<dyn StyleCatalogPort>,
    pub resolver: Arc<dyn StyleResolverPort>,
    pub selection: Arc<dyn SelectionPort>,

    // UI
    pub notifier: Arc<dyn NotifierPort>,
    pub lifecycle: Arc<dyn PluginLifecyclePort>,

    // System
    pub clock: Arc<dyn ClockPort>,

    pub settings: PluginSettings,
}
