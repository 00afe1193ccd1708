//! Command line argument parsing for the Cassia CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Cassia - a noisy-channel spelling corrector for short phrases
#[derive(Parser, Debug, Clone)]
#[command(name = "cassia")]
#[command(about = "A noisy-channel spelling corrector for short phrases")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Cassia Contributors")]
#[command(long_about = None)]
pub struct CassiaArgs {
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

impl CassiaArgs {
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

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct a phrase
    Correct(CorrectArgs),

    /// Show correction candidates for a single word
    Suggest(SuggestArgs),

    /// Run the built-in evaluation sentences
    Eval(EvalArgs),

    /// Show statistics about the loaded corpus data
    Stats(StatsArgs),
}

/// Locations of the precomputed corpus data files
#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// N-gram count file (one `<count> <ngram>` entry per line)
    #[arg(long = "ngrams", value_name = "NGRAM_FILE", default_value = "samplecnt.txt")]
    pub ngram_file: PathBuf,

    /// Vocabulary file (one word per line)
    #[arg(
        long = "vocabulary",
        value_name = "VOCABULARY_FILE",
        default_value = "samplevoc.txt"
    )]
    pub vocabulary_file: PathBuf,

    /// Confusion matrix file (one `<pattern> <count>` entry per line)
    #[arg(
        long = "confusion",
        value_name = "CONFUSION_FILE",
        default_value = "confusion_matrix.txt"
    )]
    pub confusion_file: PathBuf,
}

/// Arguments for correcting a phrase
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Phrase to correct; read from standard input when absent
    #[arg(value_name = "PHRASE")]
    pub phrase: Option<String>,
}

/// Arguments for word suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of suggestions to show
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for the evaluation harness
#[derive(Parser, Debug, Clone)]
pub struct EvalArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let args = CassiaArgs::try_parse_from(["cassia", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = CassiaArgs::try_parse_from(["cassia", "-vv", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = CassiaArgs::try_parse_from(["cassia", "-q", "-v", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_correct_command_parsing() {
        let args = CassiaArgs::try_parse_from([
            "cassia",
            "correct",
            "--ngrams",
            "counts.txt",
            "teh cat",
        ])
        .unwrap();

        match args.command {
            Command::Correct(correct_args) => {
                assert_eq!(correct_args.phrase.as_deref(), Some("teh cat"));
                assert_eq!(
                    correct_args.corpus.ngram_file.to_string_lossy(),
                    "counts.txt"
                );
                assert_eq!(
                    correct_args.corpus.vocabulary_file.to_string_lossy(),
                    "samplevoc.txt"
                );
            }
            _ => panic!("expected correct command"),
        }
    }

    #[test]
    fn test_suggest_command_parsing() {
        let args =
            CassiaArgs::try_parse_from(["cassia", "suggest", "--limit", "5", "teh"]).unwrap();

        match args.command {
            Command::Suggest(suggest_args) => {
                assert_eq!(suggest_args.word, "teh");
                assert_eq!(suggest_args.limit, 5);
            }
            _ => panic!("expected suggest command"),
        }
    }
}
