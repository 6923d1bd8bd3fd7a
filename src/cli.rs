// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_definition_path;

/// Command-line arguments for `lightsail-props`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "lightsail-props",
    version,
    about = "Validate a Lightsail instance definition and render its CloudFormation properties.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the definition file (TOML).
    #[arg(long, value_name = "PATH", default_value_os_t = default_definition_path())]
    pub config: PathBuf,

    /// Write the rendered JSON here instead of stdout.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON.
    #[arg(long)]
    pub compact: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LIGHTSAIL_PROPS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate and print a summary, but don't render any JSON.
    #[arg(long)]
    pub dry_run: bool,
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
