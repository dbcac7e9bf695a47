//! Structured logging bootstrap.
//!
//! The library itself only emits `tracing` events. Hosts that want them on
//! stdout call [`init_logging`] once at startup. `RUST_LOG` takes precedence
//! over the configured level so operators can raise verbosity without a
//! config change.

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt};

/// Formatting options for the global subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or
    /// `orgboard=debug`.
    pub level: String,
    /// Include the event target.
    pub with_target: bool,
    /// Include thread identifiers.
    pub with_thread_ids: bool,
    /// Include source file names.
    pub with_file: bool,
    /// Include source line numbers.
    pub with_line_number: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            with_target: true,
            with_thread_ids: false,
            with_file: false,
            with_line_number: false,
        }
    }
}

/// Errors raised while installing the subscriber.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidLevel {
        /// The rejected directive.
        directive: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A global subscriber could not be installed, usually because one
    /// already exists.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidLevel`] when `RUST_LOG` is unset and the
/// configured level cannot be parsed, or [`TelemetryError::Install`] when a
/// global subscriber is already in place.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| parse_filter(&config.level))?;

    fmt::Subscriber::builder()
        .with_target(config.with_target)
        .with_thread_ids(config.with_thread_ids)
        .with_file(config.with_file)
        .with_line_number(config.with_line_number)
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| TelemetryError::Install(err.to_string()))
}

fn parse_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|err| TelemetryError::InvalidLevel {
        directive: directive.to_owned(),
        reason: err.to_string(),
    })
}
