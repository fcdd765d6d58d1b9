//! Command line argument parsing for the Orthos CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Orthos - trie-based spelling correction with n-gram ranking
#[derive(Parser, Debug, Clone)]
#[command(name = "orthos")]
#[command(about = "Trie-based spelling correction with n-gram ranking")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OrthosArgs {
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

impl OrthosArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for a single word
    Suggest(SuggestArgs),

    /// Check every word of a text file
    Check(CheckArgs),

    /// Correct words interactively on stdin
    Interactive(InteractiveArgs),

    /// Show dictionary and model statistics
    Stats(StatsArgs),
}

/// Options shared by every command that builds a ranker.
#[derive(Parser, Debug, Clone)]
pub struct RankerOpts {
    /// Dictionary file, one word per line
    #[arg(short, long, value_name = "DICT_FILE")]
    pub dictionary: PathBuf,

    /// Training corpus for the n-gram model
    #[arg(short, long, value_name = "CORPUS_FILE")]
    pub corpus: Option<PathBuf>,

    /// N-gram order for the language model
    #[arg(short = 'n', long, default_value_t = 2)]
    pub ngram_size: usize,

    /// Ranking mode: suggest (s), model (n), or blended (b)
    #[arg(short, long, default_value = "blended")]
    pub mode: String,

    /// Maximum number of edits for fuzzy suggestions
    #[arg(short = 'e', long, default_value_t = 2)]
    pub max_edits: usize,
}

/// Arguments for the suggest command
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word to correct
    #[arg(value_name = "WORD")]
    pub word: String,

    #[command(flatten)]
    pub ranker: RankerOpts,

    /// Maximum number of candidates to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Text file to check
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub ranker: RankerOpts,

    /// Worker threads for the batch check (defaults to CPU count)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Write an auto-corrected copy of the input here
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the interactive command
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub ranker: RankerOpts,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub ranker: RankerOpts,
}
