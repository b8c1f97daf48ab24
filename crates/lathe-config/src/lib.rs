//! Shared configuration for the lathe daemon.
//!
//! Configuration covers the ambient concerns of the dispatch layer only:
//! log filtering and log output format. Values are resolved from process
//! environment variables over built-in defaults; transport and engine
//! configuration belong to those collaborators.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod defaults;
mod logging;

pub use defaults::{DEFAULT_LOG_FILTER, default_log_filter, default_log_format};
pub use logging::{LogFormat, LogFormatParseError};

/// Environment variable overriding the log filter expression.
pub const ENV_LOG_FILTER: &str = "LATHE_LOG";

/// Environment variable overriding the log output format.
pub const ENV_LOG_FORMAT: &str = "LATHE_LOG_FORMAT";

/// Resolved daemon configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tracing filter expression (`tracing_subscriber::EnvFilter` syntax).
    #[serde(default = "defaults::default_log_filter_string")]
    log_filter: String,
    /// Log output format.
    #[serde(default = "defaults::default_log_format")]
    log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: defaults::default_log_filter_string(),
            log_format: defaults::default_log_format(),
        }
    }
}

/// Errors surfaced while resolving configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The log format variable held an unrecognised value.
    #[error("invalid value for {variable}: {value}")]
    InvalidLogFormat { variable: &'static str, value: String },
}

impl Config {
    /// Resolves configuration from process environment variables, falling
    /// back to defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogFormat`] when `LATHE_LOG_FORMAT`
    /// holds a value that is not a known format name.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(filter) = env::var(ENV_LOG_FILTER) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }
        if let Ok(format) = env::var(ENV_LOG_FORMAT) {
            config.log_format =
                format
                    .parse()
                    .map_err(|_| ConfigError::InvalidLogFormat {
                        variable: ENV_LOG_FORMAT,
                        value: format,
                    })?;
        }
        Ok(config)
    }

    /// The tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// The log output format.
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Replaces the log filter expression.
    pub fn set_log_filter(&mut self, filter: impl Into<String>) {
        self.log_filter = filter.into();
    }

    /// Replaces the log output format.
    pub fn set_log_format(&mut self, format: LogFormat) {
        self.log_format = format;
    }
}
