//! probekit - Secret key capability checks and checksum-valid test card data.
//!
//! probekit probes a payment API secret key against a fixed set of read
//! endpoints and reports which capabilities it grants. It also generates and
//! validates card numbers using the Luhn checksum, for test fixtures.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`luhn`] - Checksum validation and card generation
//! - [`probe`] - Capability probing and the audit log
//! - [`secrets`] - Key redaction and output masking
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use probekit::luhn::{is_valid, CardGenerator};
//!
//! let mut generator = CardGenerator::seeded(7);
//! let number = generator.generate("4", 16).unwrap();
//! assert!(is_valid(&number).unwrap());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod luhn;
pub mod probe;
pub mod secrets;
pub mod ui;

pub use error::{ProbekitError, Result};
