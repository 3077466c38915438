// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `loadorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "loadorder",
    version,
    about = "Resolve object `inherits` declarations into ordered load batches.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `items.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "items.toml")]
    pub config: String,

    /// Name of the top-level table holding the object declarations.
    #[arg(long, value_name = "NAME", default_value = "objects")]
    pub table: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LOADORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Decode and print the declarations, but don't resolve anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the reduced reverse graph as Graphviz DOT instead of the report.
    #[arg(long)]
    pub dot: bool,

    /// Exit with an error when some objects could not be scheduled.
    #[arg(long)]
    pub strict: bool,
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
