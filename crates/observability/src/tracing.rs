//! Tracing/logging initialization.
//!
//! JSON lines by default; pretty and compact output for local runs.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};
use crate::error::{ObservabilityError, ObservabilityResult};

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops). A malformed
/// variable falls back to its default; the others are kept. Each fallback is
/// logged as a warning once the subscriber is installed.
pub fn init() {
    let (config, problems) = ObservabilityConfig::from_env_lenient();
    if try_init(&config).is_err() {
        return;
    }

    for problem in &problems {
        tracing::warn!(error = %problem, "malformed logging environment; using default");
    }
}

/// Install the global subscriber described by `config`.
pub fn try_init(config: &ObservabilityConfig) -> ObservabilityResult<()> {
    let filter = build_filter(&config.filter)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    // Each format changes the builder's type, so each branch installs its own.
    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.map_err(|_| ObservabilityError::AlreadyInitialized)?;

    tracing::debug!(filter = %config.filter, format = ?config.format, "observability initialized");
    Ok(())
}

/// Parse filter directives, rejecting anything `EnvFilter` would silently drop.
pub fn build_filter(directives: &str) -> ObservabilityResult<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| ObservabilityError::invalid_filter(e.to_string()))
}
