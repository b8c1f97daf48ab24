//! Structured telemetry initialisation for the daemon.
//!
//! Telemetry is process-global: the first successful [`initialise`] call
//! installs the tracing subscriber described by the [`Config`], and every
//! later call observes that registration instead of replacing it. The
//! dispatch and engine instrumentation (the `lathed::dispatch` and
//! `lathed::engine` targets) emits through whatever subscriber is
//! installed here.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use lathe_config::{Config, LogFormat};

/// Records the format the installed subscriber was built with.
static TELEMETRY_GUARD: OnceCell<LogFormat> = OnceCell::new();

/// Handle returned when telemetry has been initialised.
///
/// The handle reports the log format that actually took effect, which on
/// repeated initialisation is the format of the first call rather than the
/// one just requested.
#[derive(Debug, Clone, Copy)]
pub struct TelemetryHandle {
    format: LogFormat,
}

impl TelemetryHandle {
    /// The log format of the installed subscriber.
    #[must_use]
    pub fn format(&self) -> LogFormat {
        self.format
    }
}

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to parse the configured log filter expression.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Failed to install the tracing subscriber.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Configures the global tracing subscriber when invoked for the first time.
///
/// Repeated calls are idempotent: only the first invocation installs the
/// subscriber, and subsequent invocations return a [`TelemetryHandle`]
/// describing the existing registration without touching global state.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when the configured filter expression
/// does not parse, and [`TelemetryError::Subscriber`] when another
/// subscriber was installed outside this guard.
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    let format = TELEMETRY_GUARD.get_or_try_init(|| {
        install_subscriber(config)?;
        Ok(config.log_format())
    })?;
    Ok(TelemetryHandle { format: *format })
}

/// Parses the configured filter expression.
fn build_filter(config: &Config) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(config.log_filter())
        .map_err(|error| TelemetryError::Filter(error.to_string()))
}

fn install_subscriber(config: &Config) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.log_format() {
        LogFormat::Json => Box::new(json_subscriber(filter)),
        LogFormat::Compact => Box::new(compact_subscriber(filter)),
    };

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
}

fn json_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync {
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(io::stderr)
        // Colour only when stderr is an interactive terminal.
        .with_ansi(io::stderr().is_terminal())
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .json()
        .flatten_event(true)
        .finish()
}

fn compact_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync {
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .compact()
        .finish()
}
