//! Tracing configuration for the library styles plugin.
//!
//! Installs a `tracing-subscriber` registry with an environment filter and a
//! single fmt layer. Output format:
//! `2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message`

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug level for everything
/// - **Production**: info level, adapters kept at info
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        if is_dev { "sl_app=debug" } else { "sl_app=info" }.to_string(),
        if is_dev {
            "sl_infra=debug"
        } else {
            "sl_infra=info"
        }
        .to_string(),
    ]
}

/// Pick the filter: `RUST_LOG` first, then the configured override, then the
/// build defaults.
fn build_env_filter(log_filter: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_directives(log_filter, is_development())))
}

fn fallback_directives(log_filter: Option<&str>, is_dev: bool) -> String {
    match log_filter.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => directives.to_string(),
        None => build_filter_directives(is_dev).join(","),
    }
}

/// Initialize the tracing subscriber.
///
/// Call once, before the runtime is wired.
///
/// ## Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(log_filter: Option<&str>) -> anyhow::Result<()> {
    let env_filter = build_env_filter(log_filter);

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)));

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert!(dev_directives.contains(&"debug".to_string()));
        assert!(dev_directives.contains(&"sl_app=debug".to_string()));
        assert!(dev_directives.contains(&"sl_infra=debug".to_string()));

        let prod_directives = build_filter_directives(false);
        assert!(prod_directives.contains(&"info".to_string()));
        assert!(prod_directives.contains(&"sl_app=info".to_string()));
        assert!(prod_directives.contains(&"sl_infra=info".to_string()));
    }

    #[test]
    fn test_configured_filter_overrides_defaults() {
        assert_eq!(fallback_directives(Some("warn,sl_app=trace"), true), "warn,sl_app=trace");
    }

    #[test]
    fn test_blank_filter_uses_build_defaults() {
        assert_eq!(fallback_directives(None, false), "info,sl_app=info,sl_infra=info");
        assert_eq!(fallback_directives(Some("  "), true), "debug,sl_app=debug,sl_infra=debug");
    }
}
