//! Console logging setup built on `tracing`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Verbosity levels accepted in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warning,
    Error,
    /// Highest severity; collapses onto `tracing`'s error level.
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized log level '{0}'")]
pub struct InvalidLogLevel(String);

impl FromStr for LogLevel {
    type Err = InvalidLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            other => Err(InvalidLogLevel(other.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

impl LogLevel {
    /// Map onto the `tracing` level hierarchy.
    pub fn as_tracing(self) -> Level {
        match self {
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warning => Level::WARN,
            Self::Error | Self::Critical => Level::ERROR,
        }
    }
}

/// Filter that applies `level` to a single named target and silences
/// everything else.
pub fn scoped_filter(target: &str, level: LogLevel) -> EnvFilter {
    EnvFilter::new(format!("{target}={}", level.as_tracing()))
}

/// Initialize console logging at the given level. `RUST_LOG` takes
/// precedence when set. Safe to call more than once; later calls are no-ops.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_tracing().to_string()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Initialize console logging scoped to a single target.
pub fn init_scoped(target: &str, level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(scoped_filter(target, level))
        .try_init();
}
