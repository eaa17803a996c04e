//! CLI argument definitions for the OSM-to-relational transpiler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "osmrel",
    version,
    about = "OSM-to-relational transpiler - flatten OSM XML into CSV tables",
    long_about = "Flatten an OpenStreetMap XML extract into five relational CSV tables\n\
                  (nodes, node tags, ways, way nodes, way tags), normalizing namespaced\n\
                  tag keys and overabbreviated street suffixes along the way."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Transform an OSM XML document into the five CSV tables.
    Process(ProcessArgs),

    /// Survey anomalous street-suffix and state values without writing output.
    Audit(AuditArgs),

    /// List the output tables and their column order.
    Tables,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the OSM XML document.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory receiving the CSV files (default: output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Validate every shaped row against the declared schema before
    /// writing.
    ///
    /// Off by default: validation is substantially slower than shaping.
    /// When enabled, the first violating row aborts the run.
    #[arg(long = "validate")]
    pub validate: bool,

    /// JSON file of street-suffix corrections overriding the built-in
    /// table.
    #[arg(long = "corrections", value_name = "FILE")]
    pub corrections: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// Path to the OSM XML document.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// State name every addr:state value is expected to carry.
    #[arg(long = "expected-state", value_name = "NAME")]
    pub expected_state: Option<String>,
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
