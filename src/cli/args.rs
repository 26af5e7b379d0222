//! Command line argument parsing for the popdict CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// popdict - dictionary and note-snippet tooltips from a note collection
#[derive(Parser, Debug, Clone)]
#[command(name = "popdict")]
#[command(about = "Compose dictionary and note-snippet tooltips from a note collection")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PopdictArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PopdictArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compose the tooltip for a term
    Lookup(LookupArgs),

    /// Show the queries a lookup would issue
    Query(QueryArgs),

    /// Strip cloze markers from text
    Cloze(ClozeArgs),

    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Options shared by commands that read a configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigSource {
    /// Configuration file (JSON); defaults are used when omitted
    #[arg(short, long, value_name = "CONFIG_FILE", env = "POPDICT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for composing a tooltip
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Term to look up
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Collection file (JSON)
    #[arg(long, value_name = "COLLECTION_FILE")]
    pub collection: PathBuf,

    #[command(flatten)]
    pub config: ConfigSource,

    /// Note the tooltip was invoked from; never shown
    #[arg(long, value_name = "NOTE_ID")]
    pub ignore_nid: Option<i64>,

    /// Note currently under review; never shown
    #[arg(long, value_name = "NOTE_ID")]
    pub reviewing: Option<i64>,

    /// Answer yes to the oversized-result confirmation
    #[arg(long, conflicts_with = "no")]
    pub yes: bool,

    /// Answer no to the oversized-result confirmation
    #[arg(long)]
    pub no: bool,
}

/// Arguments for showing queries
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// Term to look up
    #[arg(value_name = "TERM")]
    pub term: String,

    #[command(flatten)]
    pub config: ConfigSource,

    /// Note the tooltip was invoked from
    #[arg(long, value_name = "NOTE_ID")]
    pub ignore_nid: Option<i64>,

    /// Note currently under review
    #[arg(long, value_name = "NOTE_ID")]
    pub reviewing: Option<i64>,
}

/// Arguments for cloze stripping
#[derive(Parser, Debug, Clone)]
pub struct ClozeArgs {
    /// Text containing cloze markers
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for showing the configuration
#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub config: ConfigSource,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
