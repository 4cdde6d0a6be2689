//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "customer-match",
    version,
    about = "Generate a Customer Match compliant CSV from a CSV file in another format",
    long_about = "Convert an arbitrary-format CSV of customer contact records into a\n\
                  Customer Match upload file (First Name, Last Name, Phone, Email,\n\
                  Country, Zip).\n\n\
                  Headers are translated against a built-in synonym table; a missing\n\
                  zip column can be backfilled from city and state columns via a\n\
                  built-in gazetteer. Cells can be SHA-256 hashed for\n\
                  privacy-preserving matching."
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
    /// Convert a CSV file to the Customer Match schema.
    Generate(GenerateArgs),

    /// List the canonical fields and their known header spellings.
    Fields,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "FILEPATH")]
    pub filepath: PathBuf,

    /// Path to the output file.
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = "result.csv")]
    pub output: PathBuf,

    /// SHA-256 hash the contents of each cell.
    #[arg(long = "hash", overrides_with = "no_hash")]
    pub hash: bool,

    /// Keep cell contents as plain text (default).
    #[arg(long = "no-hash")]
    pub no_hash: bool,

    /// Upload to the ad platform automatically (not implemented).
    #[arg(long = "upload", overrides_with = "no_upload")]
    pub upload: bool,

    /// Skip the upload step (default).
    #[arg(long = "no-upload")]
    pub no_upload: bool,

    /// Infer missing zip codes from city/state without prompting.
    #[arg(long = "infer-zip", overrides_with = "no_infer_zip")]
    pub infer_zip: bool,

    /// Never infer zip codes; abort when the zip column is missing.
    #[arg(long = "no-infer-zip")]
    pub no_infer_zip: bool,

    /// City/state/zip gazetteer CSV to use instead of the built-in one.
    #[arg(long = "zip-data", value_name = "PATH")]
    pub zip_data: Option<PathBuf>,

    /// Write a JSON run report alongside the output.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
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
