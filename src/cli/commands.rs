//! Command implementations for the Cassia CLI.

use std::io::{self, BufRead};

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::confusion::ConfusionCounts;
use crate::corpus::ngram::NGramCounts;
use crate::corpus::vocabulary::Vocabulary;
use crate::error::{CassiaError, Result};
use crate::spelling::{ErrorModel, LanguageModel, PhraseCorrector};

/// Execute a CLI command.
pub fn execute_command(args: CassiaArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_phrase(correct_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest_word(suggest_args.clone(), &args),
        Command::Eval(eval_args) => run_eval(eval_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Load the three data files and build a corrector.
fn load_corrector(corpus: &CorpusArgs) -> Result<PhraseCorrector> {
    info!("loading n-gram counts from {}", corpus.ngram_file.display());
    let ngrams = NGramCounts::load_from_file(&corpus.ngram_file)?;

    info!(
        "loading vocabulary from {}",
        corpus.vocabulary_file.display()
    );
    let vocabulary = Vocabulary::load_from_file(&corpus.vocabulary_file)?;

    info!(
        "loading confusion matrix from {}",
        corpus.confusion_file.display()
    );
    let confusion = ConfusionCounts::load_from_file(&corpus.confusion_file)?;

    let language_model = LanguageModel::new(ngrams, vocabulary.len());
    let error_model = ErrorModel::new(confusion);

    Ok(PhraseCorrector::new(vocabulary, language_model, error_model))
}

/// Correct a single phrase from the command line or standard input.
fn correct_phrase(args: CorrectArgs, cli_args: &CassiaArgs) -> Result<()> {
    let corrector = load_corrector(&args.corpus)?;

    let phrase = match args.phrase {
        Some(phrase) => phrase,
        None => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };

    let corrected = corrector.correct(&phrase)?;

    output_result(
        &CorrectionOutput {
            original: phrase.trim().to_string(),
            corrected,
        },
        cli_args,
    )
}

/// Show candidate corrections for a single word, ranked by smoothed unigram
/// probability.
fn suggest_word(args: SuggestArgs, cli_args: &CassiaArgs) -> Result<()> {
    if args.word.trim().is_empty() {
        return Err(CassiaError::invalid_argument("word must be non-empty"));
    }

    let corrector = load_corrector(&args.corpus)?;
    let word = args.word.trim();

    let mut suggestions = Vec::new();
    for candidate in corrector.similar_words(word) {
        let probability = corrector.language_model().unigram_probability(&candidate)?;
        suggestions.push(SuggestedWord {
            word: candidate,
            probability,
        });
    }
    suggestions.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    suggestions.truncate(args.limit);

    output_result(
        &SuggestOutput {
            word: word.to_string(),
            suggestions,
        },
        cli_args,
    )
}

/// Fixed evaluation sentences with their expected corrections.
const EVAL_SENTENCES: &[(&str, &str)] = &[
    (
        "this assay allowed us to measure a wide variety of conditions",
        "this assay allowed us to measure a wide variety of conditions",
    ),
    (
        "this assay allowed us to measure a wide variety of conitions",
        "this assay allowed us to measure a wide variety of conditions",
    ),
    (
        "this assay allowed us to meassure a wide variety of conditions",
        "this assay allowed us to measure a wide variety of conditions",
    ),
    (
        "this assay allowed us to measure a wide vareity of conditions",
        "this assay allowed us to measure a wide variety of conditions",
    ),
    (
        "at the home locations there were traces of water",
        "at the home locations there were traces of water",
    ),
    (
        "at the hme locations there were traces of water",
        "at the home locations there were traces of water",
    ),
    (
        "at the hoome locations there were traces of water",
        "at the home locations there were traces of water",
    ),
    (
        "at the home locasions there were traces of water",
        "at the home locations there were traces of water",
    ),
    (
        "the development of diabetes is present in mice that carry a transgen",
        "the development of diabetes is present in mice that carry a transgene",
    ),
    (
        "the development of diabetes is present in moce that carry a transgen",
        "the development of diabetes is present in mice that carry a transgene",
    ),
    (
        "the development of idabetes is present in mice that carry a transgen",
        "the development of diabetes is present in mice that carry a transgene",
    ),
];

/// Run the built-in evaluation sentences and report the score.
fn run_eval(args: EvalArgs, cli_args: &CassiaArgs) -> Result<()> {
    let corrector = load_corrector(&args.corpus)?;

    let mut correct_phrases = 0;
    let mut failures = Vec::new();

    for (input, expected) in EVAL_SENTENCES {
        let actual = corrector.correct(input)?;
        if actual == *expected {
            correct_phrases += 1;
        } else {
            failures.push(EvalFailure {
                input: (*input).to_string(),
                expected: (*expected).to_string(),
                actual,
            });
        }
    }

    output_result(
        &EvalOutput {
            correct_phrases,
            total_phrases: EVAL_SENTENCES.len(),
            failures,
        },
        cli_args,
    )
}

/// Show statistics about the loaded corpus data.
fn show_stats(args: StatsArgs, cli_args: &CassiaArgs) -> Result<()> {
    let corrector = load_corrector(&args.corpus)?;
    output_result(&corrector.stats(), cli_args)
}
