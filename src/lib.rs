//! Library styles plugin.
//!
//! Apply, publish and share design styles across files. Styles published in
//! one file are stored in the plugin's client storage as a compact library
//! and can be switched on in any other file, where they are offered next to
//! the file's own styles.

pub mod bootstrap;
mod runtime;

pub use runtime::PluginRuntime;

use std::path::Path;

use bootstrap::{HostPorts, PluginConfig};

/// Initialize logging and build a runtime from host ports.
///
/// A logging subscriber installed earlier by the host is kept.
pub fn start(host: HostPorts, config_path: &Path) -> anyhow::Result<PluginRuntime> {
    let config = bootstrap::load_config(config_path)?;
    if let Err(err) = bootstrap::init_tracing_subscriber(config.log_filter.as_deref()) {
        tracing::debug!(error = %err, "Tracing subscriber already installed");
    }
    Ok(build_runtime(host, &config))
}

pub fn build_runtime(host: HostPorts, config: &PluginConfig) -> PluginRuntime {
    PluginRuntime::new(bootstrap::wire_dependencies(host, config))
}
