//! CLI argument definitions for the country code converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use ccc_core::CodeField;

#[derive(Parser)]
#[command(
    name = "ccc",
    version,
    about = "Country code converter - translate ISO 3166-1, TLD and IOC codes",
    long_about = "Translate country codes between ISO 3166-1 alpha-2, alpha-3, numeric,\n\
                  country top-level domains and International Olympic Committee codes.\n\n\
                  Field names: cca2 (alpha2), cca3 (alpha3), ccn3 (numeric), tld, cioc (ioc).\n\
                  Matching is exact and case-sensitive."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Load countries from a CSV or world-countries JSON file instead of the bundled dataset.
    #[arg(long = "data", value_name = "PATH", env = "CCC_DATA", global = true)]
    pub data: Option<PathBuf>,

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
    /// Convert codes from one field to another, one result per line.
    Convert(ConvertArgs),

    /// Show the full record matching a code.
    Lookup(LookupArgs),

    /// List every country in table order.
    List(ListArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Field the input codes are in.
    #[arg(long = "from", value_name = "FIELD")]
    pub from: CodeField,

    /// Field to convert to.
    #[arg(long = "to", value_name = "FIELD")]
    pub to: CodeField,

    /// Print unknown codes unchanged instead of failing.
    #[arg(long = "ignore-error")]
    pub ignore_error: bool,

    /// Codes to convert.
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Field the code is in.
    #[arg(long = "from", value_name = "FIELD", default_value = "cca2")]
    pub from: CodeField,

    /// Code to look up.
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Print JSON instead of a table.
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
