//! Error types for probekit operations.
//!
//! This module defines [`ProbekitError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ProbekitError` for domain errors callers can act on
//! - Use `anyhow::Error` (via `ProbekitError::Other`) for unexpected errors
//! - Probe outcomes (401, 403, transport failures) are values, not errors;
//!   see [`crate::probe::ProbeOutcome`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for probekit operations.
#[derive(Debug, Error)]
pub enum ProbekitError {
    /// Requested card length leaves no room for the check digit.
    #[error("Invalid length {length}: must exceed prefix length {prefix_len}")]
    InvalidLength { prefix_len: usize, length: usize },

    /// Input contained something other than a decimal digit.
    #[error("Invalid digit '{character}' at position {position}")]
    InvalidDigit { character: char, position: usize },

    /// A checksum was requested over zero digits.
    #[error("Cannot compute a checksum over an empty digit sequence")]
    EmptySequence,

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A prompt needed an answer and none could be obtained.
    #[error("Cannot prompt for '{key}' in non-interactive mode ({hint})")]
    PromptUnavailable { key: String, hint: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for probekit operations.
pub type Result<T> = std::result::Result<T, ProbekitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_length_displays_both_lengths() {
        let err = ProbekitError::InvalidLength {
            prefix_len: 6,
            length: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains('6'));
        assert!(msg.contains('4'));
    }

    #[test]
    fn invalid_digit_displays_character_and_position() {
        let err = ProbekitError::InvalidDigit {
            character: 'x',
            position: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("'x'"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = ProbekitError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ProbekitError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = ProbekitError::ConfigValidationError {
            message: "generator.prefix '4a' must contain only digits".into(),
        };
        assert!(err.to_string().contains("only digits"));
    }

    #[test]
    fn prompt_unavailable_names_key_and_hint() {
        let err = ProbekitError::PromptUnavailable {
            key: "secret_key".into(),
            hint: "set PROBEKIT_PROMPT_SECRET_KEY".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'secret_key'"));
        assert!(msg.contains("PROBEKIT_PROMPT_SECRET_KEY"));
        assert!(!msg.contains("Invalid configuration"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ProbekitError = io_err.into();
        assert!(matches!(err, ProbekitError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: ProbekitError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, ProbekitError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
