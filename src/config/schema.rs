//! Configuration schema types for `coven.toml`
//!
//! Defines the structure and validation rules for coven configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Prefix output lines with avatars
    #[serde(default = "default_true")]
    pub avatars: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { avatars: true }
    }
}

/// Settings for `coven cast`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastConfig {
    /// Treat skipped witches in the input as errors
    #[serde(default)]
    pub strict: bool,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

fn default_true() -> bool {
    true
}

pub(crate) fn default_log_filter() -> String {
    "coven=warn".to_string()
}

/// Complete coven.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CovenConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub cast: CastConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Error)]
#[error("coven.toml: '{field}' {message}")]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "log.filter")
    pub field: String,
    pub message: String,
}

impl CovenConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.log.filter.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "log.filter".to_string(),
                message: "must be a non-empty filter directive".to_string(),
            });
        } else if let Err(e) = EnvFilter::try_new(&self.log.filter) {
            errors.push(ConfigValidationError {
                field: "log.filter".to_string(),
                message: format!("is not a valid filter: {}", e),
            });
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
