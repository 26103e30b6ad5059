//! Configuration validation rules.
//!
//! - `api-base`: the probe API base must be an http(s) URL
//! - `generator-prefix`: the prefix must be digits only
//! - `generator-length`: the length must leave room for a check digit
//! - `audit-path`: an enabled audit log needs a path

use crate::config::schema::ProbekitConfig;
use crate::error::{ProbekitError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &ProbekitConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let api_base = &config.probe.api_base;
    if !(api_base.starts_with("https://") || api_base.starts_with("http://")) {
        errors.push(ValidationError::new(
            "api-base",
            format!("probe.api_base '{}' must be an http(s) URL", api_base),
        ));
    }

    let generator = &config.generator;
    if !generator.prefix.chars().all(|c| c.is_ascii_digit()) {
        errors.push(ValidationError::new(
            "generator-prefix",
            format!(
                "generator.prefix '{}' must contain only digits",
                generator.prefix
            ),
        ));
    }
    if generator.length <= generator.prefix.len() {
        errors.push(ValidationError::new(
            "generator-length",
            format!(
                "generator.length {} must exceed the prefix length {}",
                generator.length,
                generator.prefix.len()
            ),
        ));
    }

    if config.audit.enabled && config.audit.path.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "audit-path",
            "audit.path must be set when the audit log is enabled",
        ));
    }

    errors
}

/// Validate and fail on the first problem.
pub fn validate(config: &ProbekitConfig) -> Result<()> {
    match validate_config(config).into_iter().next() {
        Some(error) => Err(ProbekitError::ConfigValidationError {
            message: error.message,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn rules(config: &ProbekitConfig) -> Vec<String> {
        validate_config(config).into_iter().map(|e| e.rule).collect()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ProbekitConfig::default()).is_empty());
        assert!(validate(&ProbekitConfig::default()).is_ok());
    }

    #[test]
    fn rejects_non_http_api_base() {
        let mut config = ProbekitConfig::default();
        config.probe.api_base = "ftp://api.example.com".to_string();
        assert_eq!(rules(&config), ["api-base"]);
    }

    #[test]
    fn rejects_non_digit_prefix() {
        let mut config = ProbekitConfig::default();
        config.generator.prefix = "4x".to_string();
        assert_eq!(rules(&config), ["generator-prefix"]);
    }

    #[test]
    fn rejects_length_not_exceeding_prefix() {
        let mut config = ProbekitConfig::default();
        config.generator.prefix = "4111".to_string();
        config.generator.length = 4;
        assert_eq!(rules(&config), ["generator-length"]);
    }

    #[test]
    fn oversized_batch_is_left_to_the_generator() {
        let mut config = ProbekitConfig::default();
        config.generator.count = 75;
        assert!(rules(&config).is_empty());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn rejects_enabled_audit_without_path() {
        let mut config = ProbekitConfig::default();
        config.audit.path = PathBuf::new();
        assert_eq!(rules(&config), ["audit-path"]);

        config.audit.enabled = false;
        assert!(rules(&config).is_empty());
    }

    #[test]
    fn collects_every_error() {
        let mut config = ProbekitConfig::default();
        config.probe.api_base = "nope".to_string();
        config.generator.prefix = "4a".to_string();
        assert_eq!(validate_config(&config).len(), 2);
        assert!(matches!(
            validate(&config),
            Err(ProbekitError::ConfigValidationError { .. })
        ));
    }
}
