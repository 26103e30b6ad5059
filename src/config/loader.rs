//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! the working directory in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::ProbekitConfig;
use crate::error::{ProbekitError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding probekit configuration, relative to the project root.
pub const CONFIG_DIR: &str = ".probekit";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.probekit/config.yml`)
/// 2. Local overrides (`.probekit/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .probekit/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .probekit/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files under the given root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into `ProbekitConfig`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ProbekitConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into `ProbekitConfig`.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProbekitConfig> {
    if content.trim().is_empty() {
        return Ok(ProbekitConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ProbekitError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProbekitError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProbekitError::Io(e)
        }
    })
}

fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }
    serde_yaml::from_str(&content).map_err(|e| ProbekitError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge discovered config files.
///
/// Unlike an explicit `--config` path, a missing project config is not an
/// error: the defaults apply.
pub fn load_merged_config(project_root: &Path) -> Result<ProbekitConfig> {
    let paths = ConfigPaths::discover(project_root);
    let existing = paths.all_existing();

    if existing.is_empty() {
        tracing::debug!("No config found under {:?}, using defaults", project_root);
        return Ok(ProbekitConfig::default());
    }

    let configs = existing
        .into_iter()
        .map(|path| load_config_value(path))
        .collect::<Result<Vec<_>>>()?;

    serde_yaml::from_value(merge_configs(&configs)).map_err(|e| ProbekitError::ConfigParseError {
        path: project_root.join(CONFIG_DIR).join("config.yml"),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges config files under `project_root`.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ProbekitConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(project_root)
    }
}
