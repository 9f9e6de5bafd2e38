//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lexbio",
    version,
    about = "Darwin Core coverage of the biodiversity lexicons",
    long_about = "Build the Darwin Core term catalog and report how the AT Protocol\n\
                  biodiversity lexicons align with it.\n\n\
                  Paths default to the site layout under --root (or LEXBIO_ROOT)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Site root directory (default: LEXBIO_ROOT, then the workspace root).
    #[arg(long = "root", value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

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
    /// Build the term catalog artifact from the vocabulary table.
    BuildTerms(BuildTermsArgs),

    /// Show global coverage and one card per lexicon.
    Overview(ReportArgs),

    /// Show the field and alignment tables of one lexicon.
    Lexicon(LexiconArgs),

    /// List the lexicons in the model registry.
    Models(ModelsArgs),
}

#[derive(Args)]
pub struct BuildTermsArgs {
    /// Vocabulary table (default: <ROOT>/schemas/dwc/term_versions.csv).
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Artifact to write (default: <ROOT>/site/src/data/dwc-terms.json).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Field delimiter of the vocabulary table.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Term catalog artifact (default: <ROOT>/site/src/data/dwc-terms.json).
    #[arg(long = "terms", value_name = "PATH")]
    pub terms: Option<PathBuf>,

    /// Lexicon directory (default: <ROOT>/lexicons/bio/lexicons/temp).
    #[arg(long = "lexicons", value_name = "DIR")]
    pub lexicons: Option<PathBuf>,

    /// Print the report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct LexiconArgs {
    /// Model slug, e.g. `occurrence`.
    #[arg(value_name = "SLUG")]
    pub slug: String,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args)]
pub struct ModelsArgs {
    /// Lexicon directory (default: <ROOT>/lexicons/bio/lexicons/temp).
    #[arg(long = "lexicons", value_name = "DIR")]
    pub lexicons: Option<PathBuf>,
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

/// Accept a single ASCII character; `\t` and `tab` name a tab.
pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "\\t" | "tab" => return Ok(b'\t'),
        _ => {}
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Ok(ch as u8),
        _ => Err(format!("delimiter must be a single ASCII character, got {value:?}")),
    }
}
