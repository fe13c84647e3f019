pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, PluginConfig};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{
    local_host, wire_dependencies, wire_dependencies_with_clock, HostPorts, LocalHost,
    WiringError, WiringResult,
};
