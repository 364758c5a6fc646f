//! CLI argument definitions for the registry cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rab",
    version,
    about = "Clean the Brazilian aircraft registry (RAB)",
    long_about = "Download and clean the Registro Aeronáutico Brasileiro published by ANAC.\n\n\
                  Normalizes the raw schema, validates CNPJ/CPF tax ids, coerces dates,\n\
                  weights and years, and flags agricultural aircraft."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Fetch the registry and write the cleaned table.
    Clean(CleanArgs),

    /// Write the cleaned table reshaped to one row per customer role.
    Melt(MeltArgs),

    /// List the canonical output fields.
    Fields,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Directory for raw and cleaned artifacts.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data/rab")]
    pub data_dir: PathBuf,

    /// Use a local raw CSV instead of downloading.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Re-download even when a cached raw file exists.
    #[arg(long = "update")]
    pub update: bool,

    /// Output path (default: <DATA_DIR>/clean.csv).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MeltArgs {
    /// Directory for raw and cleaned artifacts.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data/rab")]
    pub data_dir: PathBuf,

    /// Use a local raw CSV instead of downloading.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Re-download even when a cached raw file exists.
    #[arg(long = "update")]
    pub update: bool,

    /// Emit a single role (owner or operator) instead of both.
    #[arg(long = "role", value_name = "ROLE")]
    pub role: Option<String>,

    /// Output path (default: <DATA_DIR>/customers.csv).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
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
