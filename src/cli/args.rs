//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// probekit - Secret key capability checks and checksum-valid test card data.
#[derive(Debug, Parser)]
#[command(name = "probekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .probekit/config.yml)
    #[arg(short, long, global = true, env = "PROBEKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check which API capabilities a secret key grants
    Probe(ProbeArgs),

    /// Generate checksum-valid card numbers with expiry dates
    Generate(GenerateArgs),

    /// Check card numbers against the Luhn checksum
    Validate(ValidateArgs),

    /// Interactive menu (default if no command specified)
    Menu,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `probe` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeArgs {
    /// Secret key to probe (prompted for when omitted)
    #[arg(env = "PROBEKIT_SECRET_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// API base URL (overrides probe.api_base from config)
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Do not write the audit log
    #[arg(long)]
    pub no_audit: bool,
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    /// Number of cards to generate (at most 50)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Leading digits of every number
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Total number of digits, check digit included
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ValidateArgs {
    /// Card numbers to check
    #[arg(required = true)]
    pub numbers: Vec<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
