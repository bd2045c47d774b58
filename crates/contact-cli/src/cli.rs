//! CLI argument definitions for the contact cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use contact_model::{DEFAULT_OUTPUT_DIR, Field};

#[derive(Parser)]
#[command(
    name = "contact-clean",
    version,
    about = "Contact list cleaner - Drop rows with invalid names or emails",
    long_about = "Validate the Nombre and Email columns of a contact table.\n\n\
                  Rows that pass every selected check go to the cleaned table;\n\
                  the rest go to a report with the reason in a Motivo column."
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

    /// Include names and emails in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a contact table and write the cleaned table and removal report.
    Clean(CleanArgs),

    /// List the email blocklists.
    Rules,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the contact table (CSV with a header row).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Field to validate. Repeat for several; none keeps every row.
    #[arg(long = "check", short = 'c', value_enum)]
    pub checks: Vec<CheckArg>,

    /// Output directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Partition and print counts without writing the tables.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write the run counts as JSON.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

/// Fields selectable with `--check`.
#[derive(Clone, Copy, ValueEnum)]
pub enum CheckArg {
    Nombre,
    Email,
}

impl From<CheckArg> for Field {
    fn from(arg: CheckArg) -> Self {
        match arg {
            CheckArg::Nombre => Field::Nombre,
            CheckArg::Email => Field::Email,
        }
    }
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
