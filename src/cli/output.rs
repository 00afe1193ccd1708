//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{CassiaArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::CorrectorStats;

/// Result structure for phrase correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionOutput {
    pub original: String,
    pub corrected: String,
}

/// A single ranked word suggestion.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestedWord {
    pub word: String,
    pub probability: f64,
}

/// Result structure for word suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestOutput {
    pub word: String,
    pub suggestions: Vec<SuggestedWord>,
}

/// One failed evaluation sentence.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvalFailure {
    pub input: String,
    pub expected: String,
    pub actual: String,
}

/// Result structure for the evaluation harness.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvalOutput {
    pub correct_phrases: usize,
    pub total_phrases: usize,
    pub failures: Vec<EvalFailure>,
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanDisplay>(result: &T, args: &CassiaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.display_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &CassiaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Human-readable rendering for a command result.
pub trait HumanDisplay {
    fn display_human(&self, args: &CassiaArgs);
}

impl HumanDisplay for CorrectionOutput {
    fn display_human(&self, _args: &CassiaArgs) {
        println!("Answer: {}", self.corrected);
    }
}

impl HumanDisplay for SuggestOutput {
    fn display_human(&self, args: &CassiaArgs) {
        if args.verbosity() > 0 {
            println!("Suggestions for '{}':", self.word);
        }
        for suggestion in &self.suggestions {
            println!("{} {:.6e}", suggestion.word, suggestion.probability);
        }
    }
}

impl HumanDisplay for EvalOutput {
    fn display_human(&self, args: &CassiaArgs) {
        if args.verbosity() > 1 {
            for failure in &self.failures {
                println!("Sentence: {}", failure.input);
                println!("Answer: {}", failure.actual);
                println!("Answer: {} (correct)", failure.expected);
                println!();
            }
        }
        println!("Score: {}/{}", self.correct_phrases, self.total_phrases);
    }
}

impl HumanDisplay for CorrectorStats {
    fn display_human(&self, _args: &CassiaArgs) {
        println!("Corpus Statistics:");
        println!("═════════════════");
        println!("Vocabulary words: {}", self.vocabulary_words);
        println!("N-gram entries: {}", self.ngram_entries);
        println!("Confusion patterns: {}", self.confusion_patterns);
        println!("Confusion events: {}", self.confusion_events);
    }
}
