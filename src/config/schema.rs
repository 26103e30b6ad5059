//! Configuration schema definitions for probekit.
//!
//! These structs map to the YAML configuration file format. Every field is
//! optional; an empty file yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::luhn::DEFAULT_EXPIRY_START_YEAR;
use crate::probe::DEFAULT_API_BASE;

/// Root configuration structure for `.probekit/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbekitConfig {
    /// Capability probe settings
    pub probe: ProbeSettings,

    /// Audit log settings
    pub audit: AuditSettings,

    /// Card generator defaults
    pub generator: GeneratorSettings,
}

/// Capability probe settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// REST API base that endpoint paths are joined onto
    pub api_base: String,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// Audit log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditSettings {
    /// Write the audit log at all
    pub enabled: bool,

    /// Log file path (relative to the working directory)
    pub path: PathBuf,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from("probekit.log"),
        }
    }
}

/// Defaults for `probekit generate` and the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Leading digits of every generated number
    pub prefix: String,

    /// Total digits, including the check digit
    pub length: usize,

    /// Cards per batch
    pub count: usize,

    /// First year of the expiry window
    pub expiry_start_year: u16,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            prefix: "4".to_string(),
            length: 16,
            count: 1,
            expiry_start_year: DEFAULT_EXPIRY_START_YEAR,
        }
    }
}
