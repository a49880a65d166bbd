//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Loopcheck - Environment status checks for Local Loop development.
#[derive(Debug, Parser)]
#[command(name = "loopcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

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
    /// Run environment checks (default if no command specified)
    Check(CheckArgs),

    /// List the registered checks
    List(ListArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Print the report as JSON instead of the console layout
    #[arg(long)]
    pub json: bool,

    /// Required files to check for (comma-separated, overrides defaults)
    #[arg(long, value_delimiter = ',', value_name = "FILE")]
    pub files: Vec<String>,

    /// Required environment variables to check (comma-separated, overrides defaults)
    #[arg(long, value_delimiter = ',', value_name = "VAR")]
    pub env_vars: Vec<String>,

    /// Candidate ports to report on (comma-separated, overrides defaults)
    #[arg(long, value_delimiter = ',', value_name = "PORT")]
    pub ports: Vec<u16>,

    /// Minimum Node.js version to require (e.g. v18.0.0)
    #[arg(long, value_name = "VERSION")]
    pub min_version: Option<String>,

    /// Timeout in seconds for the dependency-list subprocess
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {}
