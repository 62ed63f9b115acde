//! Core error types for dincharya-core.
//!
//! The domain itself has almost no failure modes: a missing birth date is
//! absence, not an error, and a blocked autoplay is recovered internally.
//! What remains is configuration handling, command-line validation and the
//! audio backend boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dincharya-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Audio backend errors
    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors for user-supplied values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name matches none of the six characters
    #[error("Unknown character: {0}")]
    UnknownCharacter(String),

    /// Birth date not in `YYYY-MM-DD` form
    #[error("Invalid birth date '{0}': expected YYYY-MM-DD")]
    InvalidBirthDate(String),

    /// Clock time not in `HH:MM` form
    #[error("Invalid clock time '{0}': expected HH:MM")]
    InvalidClockTime(String),

    /// Answer letter outside the current question's options
    #[error("Invalid option '{0}': expected one of A, B, C, D")]
    InvalidOption(String),
}

/// Errors reported by an audio backend when asked to play.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The host refused playback without a prior user gesture
    #[error("Autoplay blocked until the user interacts with the page")]
    AutoplayBlocked,

    /// Any other backend failure
    #[error("Audio backend failure: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_into_core_error() {
        let err: CoreError = ConfigError::UnknownKey("ui.colour".into()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Unknown configuration key: ui.colour"
        );
    }

    #[test]
    fn validation_messages_name_the_input() {
        let err = ValidationError::InvalidClockTime("25:99".into());
        assert!(err.to_string().contains("25:99"));
        let err = ValidationError::InvalidBirthDate("13/07/1990".into());
        assert!(err.to_string().contains("13/07/1990"));
    }
}
