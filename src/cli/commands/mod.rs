//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`probekit probe`, `probekit generate`)
//! - Config loaded once and shared by every command
//! - Consistent global flag handling

pub mod completions;
pub mod dispatcher;
pub mod generate;
pub mod menu;
pub mod probe;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
