//! CLI argument definitions for PIREP Studio.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pirep-studio",
    version,
    about = "PIREP Studio - Convert engine telemetry to Pilot Reports",
    long_about = "Convert raw engine/flight telemetry batches to standardized PIREP entries.\n\n\
                  Validates each record against the field catalog, maps raw parameters to\n\
                  PIREP fields with unit conversion, and summarizes the batch with\n\
                  data-quality findings."
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
    /// Process a telemetry batch file and generate PIREP outputs.
    Process(ProcessArgs),

    /// List the field catalog (mapping, ranges, conversions).
    Fields,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the telemetry batch file (delimited text or key=value rows).
    #[arg(value_name = "BATCH_FILE")]
    pub input: PathBuf,

    /// Output directory for generated files (default: <BATCH_FILE dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Batch label used in the report (default: input file stem).
    #[arg(long = "batch", value_name = "LABEL")]
    pub batch: Option<String>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,

    /// Validate and summarize without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// JSON batch report only.
    Json,
    /// Coded PIREP lines only.
    Lines,
    /// Both outputs.
    Both,
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
