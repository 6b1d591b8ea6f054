//! Credential and configuration loading from the process environment.

use crate::logging::LogLevel;
use std::env;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const SERPER_API_KEY: &str = "SERPER_API_KEY";
pub const HUGGINGFACE_API_KEY: &str = "HUGGINGFACE_API_KEY";
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// Credentials and settings read from the environment. Loaded once at
/// process start; absent keys stay `None` and the log level falls back to
/// `warning`.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub openai_api_key: Option<String>,
    pub serper_api_key: Option<String>,
    pub huggingface_api_key: Option<String>,
    pub log_level: LogLevel,
}

impl EnvConfig {
    /// Load a `.env` file if one is present, then read from the process
    /// environment.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Read from the process environment only. An unset or unparseable
    /// `LOG_LEVEL` yields the default rather than an error.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env::var(OPENAI_API_KEY).ok(),
            serper_api_key: env::var(SERPER_API_KEY).ok(),
            huggingface_api_key: env::var(HUGGINGFACE_API_KEY).ok(),
            log_level: env::var(LOG_LEVEL)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }
}
