//! CLI argument definitions for the unVersion rule inspector.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "unversion",
    version,
    about = "Inspect unVersion retention rule files",
    long_about = "Load an unVersion.config rule file and show the version and trash\n\
                  retention rules it defines, grouped the way the cleanup job sees them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the rules defined in a rule file.
    Show(ShowArgs),

    /// Load a rule file and report whether it parses.
    Check(RuleFileArgs),
}

/// Where to find the rule file.
#[derive(Args)]
pub struct RuleFileArgs {
    /// Path to an unVersion.config file.
    #[arg(value_name = "FILE", required_unless_present = "app_root")]
    pub file: Option<PathBuf>,

    /// Application root; the rule file is read from <DIR>/config/unVersion.config.
    #[arg(long = "app-root", value_name = "DIR", conflicts_with = "file")]
    pub app_root: Option<PathBuf>,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: RuleFileArgs,

    /// Print the rule set as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
