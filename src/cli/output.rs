//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::args::{OrthosArgs, OutputFormat};
use crate::error::Result;
use crate::parallel::TokenReport;
use crate::spelling::ranker::{Candidate, RankerStats};

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub word: String,
    pub known: bool,
    pub mode: String,
    pub candidates: Vec<Candidate>,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    pub tokens_checked: usize,
    pub misspelled: Vec<TokenReport>,
    pub corrected_file: Option<String>,
    pub duration_ms: u64,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub dictionary_words: usize,
    pub session_words: usize,
    pub model_ngrams: usize,
    pub model_total_count: u64,
    pub ngram_size: usize,
}

impl StatsResult {
    pub fn from_ranker_stats(stats: RankerStats, ngram_size: usize) -> Self {
        StatsResult {
            dictionary_words: stats.dictionary_words,
            session_words: stats.session_words,
            model_ngrams: stats.model_ngrams,
            model_total_count: stats.model_total_count,
            ngram_size,
        }
    }
}

/// Human rendering for a command result.
pub trait HumanOutput {
    fn write_human(&self, args: &OrthosArgs);
}

impl HumanOutput for SuggestResult {
    fn write_human(&self, _args: &OrthosArgs) {
        if self.known {
            println!("\"{}\" is spelled correctly.", self.word);
            return;
        }
        if self.candidates.is_empty() {
            println!("No suggestions for \"{}\".", self.word);
            return;
        }
        println!("Suggestions for \"{}\" ({} mode):", self.word, self.mode);
        for (i, candidate) in self.candidates.iter().enumerate() {
            match candidate.score {
                Some(score) => println!("{}. {} ({score:.6})", i + 1, candidate.word),
                None => println!("{}. {}", i + 1, candidate.word),
            }
        }
    }
}

impl HumanOutput for CheckReport {
    fn write_human(&self, args: &OrthosArgs) {
        println!("Checked {} words.", self.tokens_checked);
        if self.misspelled.is_empty() {
            println!("No misspellings found.");
        } else {
            println!("Misspelled words:");
            for report in &self.misspelled {
                let suggestions: Vec<&str> =
                    report.candidates.iter().map(|c| c.word.as_str()).collect();
                if suggestions.is_empty() {
                    println!("  {} (no suggestions)", report.word);
                } else {
                    println!("  {} -> {}", report.word, suggestions.join(", "));
                }
            }
        }
        if let Some(path) = &self.corrected_file {
            println!("Corrected text written to {path}");
        }
        if args.verbosity() > 1 {
            println!("Check took {}ms", self.duration_ms);
        }
    }
}

impl HumanOutput for StatsResult {
    fn write_human(&self, _args: &OrthosArgs) {
        println!("Dictionary words: {}", self.dictionary_words);
        println!("Session words: {}", self.session_words);
        if self.model_total_count > 0 {
            println!(
                "Model: {} distinct {}-grams, {} windows counted",
                self.model_ngrams, self.ngram_size, self.model_total_count
            );
        } else {
            println!("Model: untrained");
        }
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &OrthosArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.write_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_json<T: Serialize>(result: &T, args: &OrthosArgs) -> Result<()> {
    let value: Value = serde_json::to_value(result)?;
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{rendered}");
    Ok(())
}
