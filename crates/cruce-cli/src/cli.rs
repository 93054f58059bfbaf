//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Border-crossing document validator.
#[derive(Debug, Parser)]
#[command(
    name = "cruce",
    version,
    about = "Border-crossing document validator - cross-checks extracted customs documents",
    long_about = "Validates one border crossing's documents against each other: the DODA, \
                  the e-manifest, the prefile and the plate photos. Runs the consistency \
                  rules R1 through R5 and reports per-rule outcomes, findings and \
                  extraction quality."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v for more detail, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Color output control.
    #[command(flatten)]
    pub color: Color,

    /// Set an explicit log level, overriding verbosity flags.
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Allow raw document values (names, plates) in log output.
    #[arg(long, global = true)]
    pub log_data: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate one crossing's documents from a request file.
    Validate(ValidateArgs),

    /// List the consistency rules.
    Rules,
}

#[derive(Debug, clap::Args)]
pub struct ValidateArgs {
    /// Path to the validation request JSON file.
    #[arg(value_name = "REQUEST_FILE")]
    pub request_file: PathBuf,

    /// Directory to write the validation report JSON into.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Maximum DODA age in days before rule R1 fails.
    #[arg(long, value_name = "DAYS")]
    pub max_age_days: Option<i64>,

    /// Similarity threshold for text comparisons (0.0 to 1.0).
    #[arg(long, value_name = "RATIO")]
    pub match_threshold: Option<f64>,

    /// Relaxed threshold for merchandise descriptions (0.0 to 1.0).
    #[arg(long, value_name = "RATIO")]
    pub relaxed_threshold: Option<f64>,

    /// Evaluation date for document age checks (YYYY-MM-DD, default: today).
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<String>,
}

/// Log level argument for CLI.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Log format argument for CLI.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
