//! Core error types for site state machines.
//!
//! The state machines themselves never fail; only configuration loading and
//! payload encoding can.
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Core error type for site operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    // Parsing errors
    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    // Validation errors
    #[error("invalid config value for '{key}': {reason}")]
    InvalidConfig { key: String, reason: String },

    #[error("threshold out of range: {value} (expected 0.0..=1.0)")]
    ThresholdOutOfRange { value: f64 },

    // Encoding errors
    #[error("JSON encode error: {reason}")]
    JsonEncodeFailed { reason: String },
}

impl Error {
    /// Create a TOML parse error.
    pub fn toml_parse_failed(reason: impl Into<String>) -> Self {
        Self::TomlParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a JSON encode error.
    pub fn json_encode_failed(reason: impl Into<String>) -> Self {
        Self::JsonEncodeFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
