//! Command implementations for the Orthos CLI.

use std::fs;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Instant;

use crate::analysis;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::parallel::{ParallelCheckConfig, ParallelChecker};
use crate::spelling::corrector::{CorrectionAcceptor, CorrectionSession, TopCandidateAcceptor};
use crate::spelling::dictionary::{load_corpus_tokens, load_dictionary_file};
use crate::spelling::ngram::NGramModel;
use crate::spelling::ranker::{Candidate, Mode, Ranker, RankerConfig};

const INTERACTIVE_OPTIONS: &str = "Options:
  s - raw trie suggestions only
  n - score the word with the n-gram model only
  b - rank trie suggestions with the n-gram model
  d - print words learned this session
  o - show this help
Press Enter on an empty line to exit.";

/// Execute a CLI command.
pub fn execute_command(args: OrthosArgs) -> Result<()> {
    match &args.command {
        Command::Suggest(suggest_args) => suggest_word(suggest_args.clone(), &args),
        Command::Check(check_args) => check_file(check_args.clone(), &args),
        Command::Interactive(interactive_args) => run_interactive(interactive_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Build a ranker from the shared command line options.
///
/// The mode string is parsed first so an unknown mode is rejected before any
/// file is read or search is run.
fn build_ranker(opts: &RankerOpts, cli_args: &OrthosArgs) -> Result<Ranker> {
    let mode: Mode = opts.mode.parse()?;

    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", opts.dictionary.display());
    }
    let dictionary = Arc::new(load_dictionary_file(&opts.dictionary)?);
    let mut ranker = Ranker::new(dictionary).with_config(RankerConfig {
        max_edits: opts.max_edits,
        mode,
    });

    if let Some(corpus) = &opts.corpus {
        if cli_args.verbosity() > 1 {
            println!("Training {}-gram model from: {}", opts.ngram_size, corpus.display());
        }
        let tokens = load_corpus_tokens(corpus)?;
        ranker = ranker.with_model(NGramModel::from_tokens(opts.ngram_size, &tokens)?);
    }

    Ok(ranker)
}

/// Suggest corrections for a single word.
fn suggest_word(args: SuggestArgs, cli_args: &OrthosArgs) -> Result<()> {
    let ranker = build_ranker(&args.ranker, cli_args)?;

    let known = ranker.is_known(&args.word);
    let mut candidates = ranker.rank(&args.word)?;
    if let Some(limit) = args.limit {
        candidates.truncate(limit);
    }

    output_result(
        &SuggestResult {
            word: args.word,
            known,
            mode: ranker.mode().to_string(),
            candidates,
        },
        cli_args,
    )
}

/// Check every word of a text file on the worker pool.
fn check_file(args: CheckArgs, cli_args: &OrthosArgs) -> Result<()> {
    let ranker = build_ranker(&args.ranker, cli_args)?;

    let text = fs::read_to_string(&args.input)?;
    let tokens = analysis::extract_words(&text);

    let start_time = Instant::now();
    let checker = ParallelChecker::new(ParallelCheckConfig {
        thread_pool_size: args.threads,
    })?;
    let reports = checker.check_tokens(&ranker, &tokens)?;

    let tokens_checked = reports.len();
    let misspelled: Vec<_> = reports.into_iter().filter(|r| !r.known).collect();

    // Optionally write an auto-corrected copy, taking the top candidate for
    // every misspelled word.
    let corrected_file = match &args.output {
        Some(path) => {
            let session = CorrectionSession::new(&ranker);
            let corrected = session.correct_text(&text, &mut TopCandidateAcceptor)?;
            fs::write(path, corrected.text)?;
            Some(path.to_string_lossy().to_string())
        }
        None => None,
    };

    output_result(
        &CheckReport {
            tokens_checked,
            misspelled,
            corrected_file,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Show dictionary and model statistics.
fn show_stats(args: StatsArgs, cli_args: &OrthosArgs) -> Result<()> {
    let ranker = build_ranker(&args.ranker, cli_args)?;

    output_result(
        &StatsResult::from_ranker_stats(ranker.stats(), args.ranker.ngram_size),
        cli_args,
    )
}

/// Acceptor that presents candidates on stdout and reads the choice from
/// stdin: a number picks a candidate, any other text becomes the replacement,
/// an empty line keeps the original.
struct StdinAcceptor;

impl CorrectionAcceptor for StdinAcceptor {
    fn choose(&mut self, original: &str, candidates: &[Candidate]) -> Option<String> {
        println!("Original: {original}");
        if candidates.is_empty() {
            println!("No suggestions available.");
        } else {
            println!("Suggestions:");
            for (i, candidate) in candidates.iter().enumerate() {
                match candidate.score {
                    Some(score) => println!("{}. {} ({score:.6})", i + 1, candidate.word),
                    None => println!("{}. {}", i + 1, candidate.word),
                }
            }
        }
        print!("Enter your choice (or press Enter to keep the original): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return None;
        }
        let choice = line.trim();
        if choice.is_empty() {
            return None;
        }
        if let Ok(index) = choice.parse::<usize>()
            && index >= 1
            && index <= candidates.len()
        {
            return Some(candidates[index - 1].word.clone());
        }
        Some(choice.to_string())
    }
}

/// Interactive correction loop over stdin, one word per line.
fn run_interactive(args: InteractiveArgs, cli_args: &OrthosArgs) -> Result<()> {
    let mut ranker = build_ranker(&args.ranker, cli_args)?;

    println!("{INTERACTIVE_OPTIONS}");
    let stdin = io::stdin();
    loop {
        print!(
            "Enter a word (Enter to exit, 'o' for options, s/n/b to switch modes): "
        );
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim().to_lowercase();
        if input.is_empty() {
            break;
        }

        match input.as_str() {
            "o" => {
                println!("{INTERACTIVE_OPTIONS}");
                println!("Current mode: {}", ranker.mode());
            }
            "d" => {
                let words = ranker.session_words();
                if words.is_empty() {
                    println!("No words learned this session.");
                } else {
                    for word in words {
                        println!("{word}");
                    }
                }
            }
            "s" | "n" | "b" => {
                let mode: Mode = input.parse()?;
                ranker.set_mode(mode);
                println!("Switched to {mode} mode.");
            }
            word => {
                if ranker.is_known(word) {
                    println!("Word is spelled correctly.");
                    continue;
                }
                let session = CorrectionSession::new(&ranker);
                let correction = session.correct_word(word, &mut StdinAcceptor)?;
                match correction.replacement {
                    Some(replacement) => println!("Corrected word: {replacement}"),
                    None => println!("Kept original: {word}"),
                }
            }
        }
    }

    Ok(())
}
