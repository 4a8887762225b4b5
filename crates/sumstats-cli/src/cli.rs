//! CLI argument definitions for the summary-statistics QC runner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use sumstats_model::{DEFAULT_MAX_CHROM, SummaryKind};

#[derive(Parser)]
#[command(
    name = "sumstats-qc",
    version,
    about = "Normalize and quality-filter GWAS/eQTL summary statistics",
    long_about = "Normalize and quality-filter GWAS/eQTL summary statistics.\n\n\
                  Standardizes chromosome labels, coerces numeric columns, checks\n\
                  p-value ranges and removes palindromic (A/T, C/G) variants."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Run QC on one or more summary-statistics files.
    Check(CheckArgs),

    /// Print the chromosome label table.
    Chromosomes(ChromosomesArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Files to process, in order. Directories expand to the .tsv/.txt/.csv files they contain.
    #[arg(value_name = "FILES", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// TOML configuration file; flags given here override its values.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exclusive upper bound for autosome numbering.
    #[arg(long = "max-chrom", value_name = "N")]
    pub max_chrom: Option<u32>,

    /// Kind of association results in the files.
    #[arg(long = "data-type", value_enum)]
    pub data_type: Option<DataTypeArg>,

    /// Column holding chromosome labels.
    #[arg(long = "chrom-column", value_name = "NAME")]
    pub chrom_column: Option<String>,

    /// Columns to coerce to numeric (comma-separated or repeated).
    #[arg(long = "numeric", value_name = "COLUMN", value_delimiter = ',')]
    pub numeric: Vec<String>,

    /// Columns to coerce and check against [0, 1] (comma-separated or repeated).
    #[arg(long = "probability", value_name = "COLUMN", value_delimiter = ',')]
    pub probability: Vec<String>,

    /// Keep palindromic variants.
    #[arg(long = "keep-palindromic")]
    pub keep_palindromic: bool,

    /// Output directory for normalized files (default: <FILE_DIR>/qc).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Run every check without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// How to print the run summary.
    #[arg(long = "summary-format", value_enum, default_value = "text")]
    pub summary_format: SummaryFormatArg,
}

#[derive(Parser)]
pub struct ChromosomesArgs {
    /// Exclusive upper bound for autosome numbering.
    #[arg(long = "max-chrom", value_name = "N", default_value_t = DEFAULT_MAX_CHROM)]
    pub max_chrom: u32,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DataTypeArg {
    Gwas,
    Eqtl,
}

impl From<DataTypeArg> for SummaryKind {
    fn from(value: DataTypeArg) -> Self {
        match value {
            DataTypeArg::Gwas => SummaryKind::Gwas,
            DataTypeArg::Eqtl => SummaryKind::Eqtl,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormatArg {
    Text,
    Json,
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
