// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `autolaunch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "autolaunch",
    version,
    about = "Run an automation script with its API credential injected into the child environment.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `$AUTOLAUNCH_CONFIG`, else `Autolaunch.toml` in the current
    /// working directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override `[launch].interpreter` from the config file.
    #[arg(long, value_name = "PATH")]
    pub interpreter: Option<PathBuf>,

    /// Override `[launch].script` from the config file.
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Exit right after the completion message instead of waiting for Enter.
    #[arg(long)]
    pub no_pause: bool,

    /// Load and validate the config, print the launch plan, run nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `AUTOLAUNCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
