//! Observability configuration, read from the environment.

use core::str::FromStr;

use crate::error::ObservabilityError;

/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "KVSTREAM_LOG_FORMAT";

/// Environment variable holding the filter directives (`tracing-subscriber` convention).
pub const FILTER_ENV: &str = "RUST_LOG";

pub const DEFAULT_FILTER: &str = "info";

/// Line format of emitted events.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line, human oriented.
    Pretty,
    /// Single line, human oriented.
    Compact,
}

impl FromStr for LogFormat {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(ObservabilityError::unknown_format(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info` or `kvstream_core=debug,warn`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `KVSTREAM_LOG_FORMAT`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ObservabilityError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ObservabilityError> {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }
        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = format.parse()?;
        }

        Ok(config)
    }

    /// Read the environment, resetting only the settings that fail to parse.
    ///
    /// Returns the problems found alongside the config, so they can be logged
    /// once a subscriber is running.
    pub fn from_env_lenient() -> (Self, Vec<ObservabilityError>) {
        Self::from_lookup_lenient(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env_lenient`](Self::from_env_lenient) over an arbitrary variable source.
    pub fn from_lookup_lenient(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, Vec<ObservabilityError>) {
        let mut config = Self::default();
        let mut problems = Vec::new();

        if let Some(filter) = lookup(FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            match crate::tracing::build_filter(&filter) {
                Ok(_) => config.filter = filter,
                Err(err) => problems.push(err),
            }
        }
        if let Some(format) = lookup(FORMAT_ENV) {
            match format.parse::<LogFormat>() {
                Ok(format) => config.format = format,
                Err(err) => problems.push(err),
            }
        }

        (config, problems)
    }
}
