//! Command line argument parsing for the WordNet CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// wordnet - semantic distance and outcast queries over WordNet
#[derive(Parser, Debug, Clone)]
#[command(name = "wordnet")]
#[command(about = "Shortest ancestral path queries over the WordNet noun hierarchy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordNetArgs {
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

    /// Synsets file
    #[arg(long, env = "WORDNET_SYNSETS", default_value = "synsets.txt")]
    pub synsets: PathBuf,

    /// Hypernyms file
    #[arg(long, env = "WORDNET_HYPERNYMS", default_value = "hypernyms.txt")]
    pub hypernyms: PathBuf,

    /// Loader configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Disable memoization of single-synset queries
    #[arg(long)]
    pub no_cache: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordNetArgs {
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

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Semantic distance between two nouns
    Distance(NounPairArgs),

    /// Shortest common ancestor synset of two nouns
    Sap(NounPairArgs),

    /// Check whether a word is a WordNet noun
    #[command(name = "is-noun")]
    IsNoun(IsNounArgs),

    /// List WordNet nouns
    Nouns(NounsArgs),

    /// Find the outcast in each noun list file
    Outcast(OutcastArgs),

    /// Show index statistics
    Stats,
}

/// Arguments for pairwise noun queries
#[derive(Parser, Debug, Clone)]
pub struct NounPairArgs {
    /// First noun
    #[arg(value_name = "NOUN_A")]
    pub noun_a: String,

    /// Second noun
    #[arg(value_name = "NOUN_B")]
    pub noun_b: String,
}

/// Arguments for noun membership
#[derive(Parser, Debug, Clone)]
pub struct IsNounArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for listing nouns
#[derive(Parser, Debug, Clone)]
pub struct NounsArgs {
    /// Maximum number of nouns to print
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Only nouns starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Arguments for outcast detection
#[derive(Parser, Debug, Clone)]
pub struct OutcastArgs {
    /// Files holding whitespace-separated noun lists
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Include every noun's distance sum in the output
    #[arg(long)]
    pub scores: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
