//! Configuration loading, parsing, and validation for probekit.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use probekit::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".probekit");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "generator:\n  length: 15").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.generator.length, 15);
//! ```
//!
//! # Configuration File Locations
//!
//! probekit discovers and merges configuration in this order:
//! 1. Project config (`.probekit/config.yml`)
//! 2. Local overrides (`.probekit/config.local.yml`)
//!
//! An explicit `--config` path replaces discovery entirely.

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config, load_config_file, load_merged_config, parse_config, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{AuditSettings, GeneratorSettings, ProbeSettings, ProbekitConfig};
pub use validator::{validate, validate_config, ValidationError};
