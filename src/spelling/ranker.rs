//! Candidate ranking across suggestion and language-model modes.
//!
//! [`Ranker`] orchestrates a correction request: membership check through the
//! injected oracle, fuzzy suggestions from the session trie first and the
//! base dictionary second, and optional n-gram ranking depending on the
//! active [`Mode`]. The ranker owns all of its collaborators — dictionary,
//! session trie, model, oracle — so there is no process-wide state.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{OrthosError, Result};
use crate::spelling::fuzzy::{DEFAULT_MAX_EDITS, FuzzyMatcher};
use crate::spelling::ngram::NGramModel;
use crate::spelling::oracle::{TrieOracle, WordOracle};
use crate::spelling::trie::Trie;

/// How [`Ranker::rank`] combines trie suggestions and the language model.
///
/// The mode persists across corrections until explicitly changed; there are
/// no automatic transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Raw fuzzy-matcher output, lexicographically ordered, unscored.
    SuggestOnly,
    /// Score the word itself against the model with empty context; a
    /// degenerate mode kept for compatibility with the original front end.
    ModelOnly,
    /// Fuzzy-matcher candidates ranked by the model with the misspelled word
    /// as one-token context.
    #[default]
    Blended,
}

impl Mode {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::SuggestOnly => "suggest",
            Mode::ModelOnly => "model",
            Mode::Blended => "blended",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = OrthosError;

    /// Parse a mode name. Accepts the full names and the single-letter
    /// shortcuts of the original front end (`s`, `n`, `b`); anything else is
    /// rejected with [`OrthosError::UnknownMode`].
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "suggest" | "s" => Ok(Mode::SuggestOnly),
            "model" | "n" => Ok(Mode::ModelOnly),
            "blended" | "b" => Ok(Mode::Blended),
            other => Err(OrthosError::unknown_mode(other.to_string())),
        }
    }
}

/// A candidate correction with an optional model score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The suggested word.
    pub word: String,
    /// Model probability, when a model participated in ranking.
    pub score: Option<f64>,
}

impl Candidate {
    /// Candidate without a model score.
    pub fn unscored<S: Into<String>>(word: S) -> Self {
        Candidate {
            word: word.into(),
            score: None,
        }
    }

    /// Candidate with a model score.
    pub fn scored<S: Into<String>>(word: S, score: f64) -> Self {
        Candidate {
            word: word.into(),
            score: Some(score),
        }
    }
}

/// Configuration for the ranker.
#[derive(Debug, Clone)]
pub struct RankerConfig {
    /// Edit budget handed to the fuzzy matcher.
    pub max_edits: usize,
    /// Initial ranking mode.
    pub mode: Mode,
}

impl Default for RankerConfig {
    fn default() -> Self {
        RankerConfig {
            max_edits: DEFAULT_MAX_EDITS,
            mode: Mode::default(),
        }
    }
}

/// Statistics about a ranker and its collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankerStats {
    /// Words in the base dictionary.
    pub dictionary_words: usize,
    /// Words accepted into the session trie so far.
    pub session_words: usize,
    /// Distinct n-grams in the model, 0 when no model is configured.
    pub model_ngrams: usize,
    /// Total counted n-gram windows, 0 when no model is configured.
    pub model_total_count: u64,
}

/// Orchestrates suggestion generation and ranking for one dictionary.
///
/// The base dictionary is shared and read-only after construction; the
/// session trie takes a lock around every access so concurrent correction
/// sessions keep a single-writer discipline.
pub struct Ranker {
    dictionary: Arc<Trie>,
    session: Mutex<Trie>,
    model: Option<NGramModel>,
    oracle: Box<dyn WordOracle>,
    config: RankerConfig,
}

impl Ranker {
    /// Create a ranker over a base dictionary, with the dictionary itself as
    /// the word-validity oracle and no language model.
    pub fn new(dictionary: Arc<Trie>) -> Self {
        let oracle = Box::new(TrieOracle::new(dictionary.clone()));
        Ranker {
            dictionary,
            session: Mutex::new(Trie::new()),
            model: None,
            oracle,
            config: RankerConfig::default(),
        }
    }

    /// Attach a trained language model.
    pub fn with_model(mut self, model: NGramModel) -> Self {
        self.model = Some(model);
        self
    }

    /// Seed the session trie, e.g. with corrections carried over from an
    /// earlier session.
    pub fn with_session_trie(mut self, session: Trie) -> Self {
        self.session = Mutex::new(session);
        self
    }

    /// Replace the word-validity oracle.
    pub fn with_oracle(mut self, oracle: Box<dyn WordOracle>) -> Self {
        self.oracle = oracle;
        self
    }

    /// Replace the configuration.
    ///
    /// The edit budget is validated when a search runs, so an out-of-range
    /// budget surfaces as [`OrthosError::InvalidEditBudget`] from
    /// [`Ranker::rank`].
    pub fn with_config(mut self, config: RankerConfig) -> Self {
        self.config = config;
        self
    }

    /// The active ranking mode.
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Switch the ranking mode. Persists until changed again.
    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
    }

    /// Ask the oracle whether a word is correctly spelled.
    pub fn is_known(&self, word: &str) -> bool {
        self.oracle.is_known(&word.trim().to_lowercase())
    }

    /// Rank correction candidates for a word under the active mode.
    ///
    /// An empty word yields an empty list; a word the oracle accepts yields a
    /// singleton exact candidate. Otherwise the mode decides: `SuggestOnly`
    /// returns unscored fuzzy suggestions, `ModelOnly` scores the word itself
    /// with empty context, and `Blended` ranks the fuzzy suggestions with the
    /// misspelled word as context.
    pub fn rank(&self, word: &str) -> Result<Vec<Candidate>> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Ok(Vec::new());
        }
        if self.oracle.is_known(&word) {
            return Ok(vec![Candidate::unscored(word)]);
        }

        debug!("ranking {word:?} in {} mode", self.config.mode);
        match self.config.mode {
            Mode::SuggestOnly => Ok(self
                .suggestions(&word)?
                .into_iter()
                .map(Candidate::unscored)
                .collect()),
            Mode::ModelOnly => match &self.model {
                Some(model) => Ok(model.score_and_rank(std::slice::from_ref(&word), &[])),
                None => Ok(Vec::new()),
            },
            Mode::Blended => {
                let suggestions = self.suggestions(&word)?;
                match &self.model {
                    Some(model) => {
                        Ok(model.score_and_rank(&suggestions, std::slice::from_ref(&word)))
                    }
                    None => Ok(suggestions.into_iter().map(Candidate::unscored).collect()),
                }
            }
        }
    }

    /// Record a correction the user explicitly accepted.
    ///
    /// The accepted word goes into the session trie only when it differs from
    /// the original and is absent from the base dictionary, so the base
    /// dictionary never accumulates redundant entries.
    pub fn accept(&self, original: &str, chosen: &str) {
        let chosen = chosen.trim().to_lowercase();
        if chosen.is_empty() || chosen == original.trim().to_lowercase() {
            return;
        }
        if !self.dictionary.contains(&chosen) {
            debug!("learning session word {chosen:?}");
            self.session.lock().insert(&chosen);
        }
    }

    /// Words accepted into the session trie so far, sorted.
    pub fn session_words(&self) -> Vec<String> {
        self.session.lock().words()
    }

    /// Statistics about the ranker and its collaborators.
    pub fn stats(&self) -> RankerStats {
        RankerStats {
            dictionary_words: self.dictionary.len(),
            session_words: self.session.lock().len(),
            model_ngrams: self.model.as_ref().map(|m| m.distinct_ngrams()).unwrap_or(0),
            model_total_count: self.model.as_ref().map(|m| m.total_count()).unwrap_or(0),
        }
    }

    /// Session trie first; the base dictionary only when the session has
    /// nothing, so recent corrections take priority.
    fn suggestions(&self, word: &str) -> Result<Vec<String>> {
        {
            let session = self.session.lock();
            if !session.is_empty() {
                let from_session =
                    FuzzyMatcher::new(&session, self.config.max_edits)?.search(word);
                if !from_session.is_empty() {
                    return Ok(from_session);
                }
            }
        }
        Ok(FuzzyMatcher::new(&self.dictionary, self.config.max_edits)?.search(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::dictionary::build_dictionary;

    fn ranker_of(words: &[&str]) -> Ranker {
        Ranker::new(Arc::new(build_dictionary(words)))
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("suggest".parse::<Mode>().unwrap(), Mode::SuggestOnly);
        assert_eq!("s".parse::<Mode>().unwrap(), Mode::SuggestOnly);
        assert_eq!("n".parse::<Mode>().unwrap(), Mode::ModelOnly);
        assert_eq!("Blended".parse::<Mode>().unwrap(), Mode::Blended);
        assert!(matches!(
            "xyz".parse::<Mode>(),
            Err(OrthosError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_default_mode_is_blended() {
        let ranker = ranker_of(&["cat"]);
        assert_eq!(ranker.mode(), Mode::Blended);
    }

    #[test]
    fn test_empty_word_yields_empty() {
        let ranker = ranker_of(&["cat"]);
        assert!(ranker.rank("").unwrap().is_empty());
        assert!(ranker.rank("   ").unwrap().is_empty());
    }

    #[test]
    fn test_known_word_returns_itself() {
        let ranker = ranker_of(&["cat", "dog"]);
        let candidates = ranker.rank("Cat").unwrap();
        assert_eq!(candidates, vec![Candidate::unscored("cat")]);
    }

    #[test]
    fn test_suggest_only_is_unscored_and_sorted() {
        let mut ranker = ranker_of(&["cat", "cot", "dog"]);
        ranker.set_mode(Mode::SuggestOnly);

        let candidates = ranker.rank("cbt").unwrap();
        let words: Vec<&str> = candidates.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "cot"]);
        assert!(candidates.iter().all(|c| c.score.is_none()));
    }

    #[test]
    fn test_model_only_scores_the_word_itself() {
        let model = NGramModel::from_tokens(1, &["cbt", "cbt", "cat"]).unwrap();
        let mut ranker = ranker_of(&["cat", "cot"]).with_model(model);
        ranker.set_mode(Mode::ModelOnly);

        let candidates = ranker.rank("cbt").unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].word, "cbt");
        assert_eq!(candidates[0].score, Some(2.0 / 3.0));
    }

    #[test]
    fn test_model_only_without_model_is_empty() {
        let mut ranker = ranker_of(&["cat"]);
        ranker.set_mode(Mode::ModelOnly);
        assert!(ranker.rank("cbt").unwrap().is_empty());
    }

    #[test]
    fn test_blended_ranks_with_word_as_context() {
        let corpus = ["cbt", "cot", "cbt", "cot", "cbt", "cat"];
        let model = NGramModel::from_tokens(2, &corpus).unwrap();
        let ranker = ranker_of(&["cat", "cot", "dog"]).with_model(model);

        let candidates = ranker.rank("cbt").unwrap();
        assert_eq!(candidates[0].word, "cot");
        assert!(candidates[0].score.unwrap() > candidates[1].score.unwrap());
    }

    #[test]
    fn test_blended_without_model_degrades_to_suggestions() {
        let ranker = ranker_of(&["cat", "cot"]);
        let candidates = ranker.rank("cbt").unwrap();
        let words: Vec<&str> = candidates.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "cot"]);
    }

    #[test]
    fn test_invalid_budget_rejected_at_rank() {
        let ranker = ranker_of(&["cat"]).with_config(RankerConfig {
            max_edits: 99,
            mode: Mode::SuggestOnly,
        });
        assert!(matches!(
            ranker.rank("cbt"),
            Err(OrthosError::InvalidEditBudget(_))
        ));
    }

    #[test]
    fn test_accept_learns_only_unknown_words() {
        let ranker = ranker_of(&["cat"]);

        ranker.accept("catt", "cat");
        assert!(ranker.session_words().is_empty());

        ranker.accept("kliban", "kliban");
        assert!(ranker.session_words().is_empty());

        ranker.accept("klibann", "kliban");
        assert_eq!(ranker.session_words(), vec!["kliban"]);
    }

    #[test]
    fn test_session_trie_takes_priority() {
        let mut ranker = ranker_of(&["cat", "cot"]);
        ranker.set_mode(Mode::SuggestOnly);

        ranker.accept("czt", "czq");
        let candidates = ranker.rank("czt").unwrap();
        let words: Vec<&str> = candidates.iter().map(|c| c.word.as_str()).collect();
        // The session suggestion shadows the base dictionary entirely.
        assert_eq!(words, vec!["czq"]);
    }

    #[test]
    fn test_seeded_session_trie() {
        let mut session = crate::spelling::trie::Trie::new();
        session.insert("kliban");

        let mut ranker = ranker_of(&["cat"]).with_session_trie(session);
        ranker.set_mode(Mode::SuggestOnly);

        let candidates = ranker.rank("klibann").unwrap();
        assert_eq!(candidates[0].word, "kliban");
    }

    #[test]
    fn test_custom_oracle() {
        use crate::spelling::oracle::WordSetOracle;

        let oracle = Box::new(WordSetOracle::new(["frobnicate"]));
        let ranker = ranker_of(&["cat"]).with_oracle(oracle);

        assert!(ranker.is_known("frobnicate"));
        assert_eq!(
            ranker.rank("frobnicate").unwrap(),
            vec![Candidate::unscored("frobnicate")]
        );
        // "cat" is in the suggestion dictionary but the oracle rejects it.
        assert!(!ranker.is_known("cat"));
    }

    #[test]
    fn test_stats() {
        let model = NGramModel::from_tokens(2, &["a", "b", "c"]).unwrap();
        let ranker = ranker_of(&["cat", "cot"]).with_model(model);
        ranker.accept("zzz", "zzy");

        let stats = ranker.stats();
        assert_eq!(stats.dictionary_words, 2);
        assert_eq!(stats.session_words, 1);
        assert_eq!(stats.model_ngrams, 2);
        assert_eq!(stats.model_total_count, 2);
    }
}
