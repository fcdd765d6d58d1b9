//! Fixed-order n-gram language model for candidate ranking.
//!
//! The model counts every window of `n` consecutive tokens in a training
//! corpus and scores an n-gram as `count / total_count`. There is no
//! smoothing: an n-gram never observed in training has probability exactly 0,
//! and an untrained model scores everything 0 rather than dividing by zero.

use std::cmp::Ordering;

use ahash::AHashMap;

use crate::error::{OrthosError, Result};
use crate::spelling::ranker::Candidate;

/// Frequency model over fixed-length token windows.
///
/// Built once from a token sequence in a single training pass; scoring is
/// read-only afterward.
#[derive(Debug, Clone)]
pub struct NGramModel {
    n: usize,
    counts: AHashMap<Vec<String>, u64>,
    total_count: u64,
}

impl NGramModel {
    /// Create an untrained model of order `n`.
    ///
    /// Returns [`OrthosError::Model`] when `n` is 0.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(OrthosError::model("n-gram order must be at least 1"));
        }
        Ok(NGramModel {
            n,
            counts: AHashMap::new(),
            total_count: 0,
        })
    }

    /// Create a model of order `n` trained on `tokens`.
    pub fn from_tokens<S: AsRef<str>>(n: usize, tokens: &[S]) -> Result<Self> {
        let mut model = Self::new(n)?;
        model.train(tokens);
        Ok(model)
    }

    /// Count every window of `n` consecutive tokens.
    ///
    /// A sequence shorter than `n` contributes nothing; training an already
    /// trained model accumulates further counts.
    pub fn train<S: AsRef<str>>(&mut self, tokens: &[S]) {
        if tokens.len() < self.n {
            return;
        }
        for window in tokens.windows(self.n) {
            let key: Vec<String> = window.iter().map(|t| t.as_ref().to_string()).collect();
            *self.counts.entry(key).or_insert(0) += 1;
            self.total_count += 1;
        }
    }

    /// The configured n-gram order.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Total number of counted windows across all training passes.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Number of distinct n-grams observed.
    pub fn distinct_ngrams(&self) -> usize {
        self.counts.len()
    }

    /// True once at least one window has been counted.
    pub fn is_trained(&self) -> bool {
        self.total_count > 0
    }

    /// Probability of an exact n-gram: `count / total_count`.
    ///
    /// Returns 0.0 for an untrained model, for any tuple never observed, and
    /// for a tuple whose length differs from the model order (such a tuple
    /// can never have been counted).
    pub fn probability<S: AsRef<str>>(&self, ngram: &[S]) -> f64 {
        if self.total_count == 0 || ngram.len() != self.n {
            return 0.0;
        }
        let key: Vec<String> = ngram.iter().map(|t| t.as_ref().to_string()).collect();
        self.counts.get(&key).copied().unwrap_or(0) as f64 / self.total_count as f64
    }

    /// Score each candidate as the probability of `context + [candidate]` and
    /// return candidates sorted by probability descending.
    ///
    /// Ties break lexicographically on the word so repeated calls with the
    /// same inputs produce identical output.
    pub fn score_and_rank(&self, candidates: &[String], context: &[String]) -> Vec<Candidate> {
        let mut scored: Vec<Candidate> = candidates
            .iter()
            .map(|word| {
                let mut ngram: Vec<String> = Vec::with_capacity(context.len() + 1);
                ngram.extend(context.iter().cloned());
                ngram.push(word.clone());
                Candidate::scored(word.clone(), self.probability(&ngram))
            })
            .collect();
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_validation() {
        assert!(NGramModel::new(0).is_err());
        assert!(NGramModel::new(1).is_ok());
        assert!(NGramModel::new(3).is_ok());
    }

    #[test]
    fn test_untrained_model_scores_zero() {
        let model = NGramModel::new(2).unwrap();
        assert!(!model.is_trained());
        assert_eq!(model.probability(&["the", "cat"]), 0.0);
    }

    #[test]
    fn test_bigram_training() {
        let model = NGramModel::from_tokens(2, &["the", "cat", "sat"]).unwrap();

        assert_eq!(model.total_count(), 2);
        assert_eq!(model.distinct_ngrams(), 2);
        assert_eq!(model.probability(&["the", "cat"]), 0.5);
        assert_eq!(model.probability(&["cat", "sat"]), 0.5);
        assert_eq!(model.probability(&["cat", "dog"]), 0.0);
    }

    #[test]
    fn test_short_corpus_is_noop() {
        let model = NGramModel::from_tokens(3, &["only", "two"]).unwrap();
        assert_eq!(model.total_count(), 0);
        assert_eq!(model.probability(&["only", "two", "words"]), 0.0);
    }

    #[test]
    fn test_arity_mismatch_scores_zero() {
        let model = NGramModel::from_tokens(3, &["a", "b", "c", "d"]).unwrap();
        assert!(model.is_trained());
        assert_eq!(model.probability(&["a", "b"]), 0.0);
        assert_eq!(model.probability(&["a", "b", "c", "d"]), 0.0);
    }

    #[test]
    fn test_repeated_windows_accumulate() {
        let model =
            NGramModel::from_tokens(2, &["to", "be", "or", "not", "to", "be"]).unwrap();

        // Windows: (to,be) (be,or) (or,not) (not,to) (to,be) -> 5 total.
        assert_eq!(model.total_count(), 5);
        assert_eq!(model.probability(&["to", "be"]), 2.0 / 5.0);
    }

    #[test]
    fn test_score_and_rank_orders_by_probability() {
        let model = NGramModel::from_tokens(
            2,
            &["helo", "hello", "helo", "hello", "helo", "help"],
        )
        .unwrap();

        let candidates = vec!["help".to_string(), "hello".to_string()];
        let context = vec!["helo".to_string()];
        let ranked = model.score_and_rank(&candidates, &context);

        assert_eq!(ranked[0].word, "hello");
        assert_eq!(ranked[1].word, "help");
        assert!(ranked[0].score.unwrap() > ranked[1].score.unwrap());
    }

    #[test]
    fn test_score_and_rank_ties_break_lexicographically() {
        let model = NGramModel::new(2).unwrap();

        let candidates = vec!["cot".to_string(), "cat".to_string(), "bat".to_string()];
        let ranked = model.score_and_rank(&candidates, &["cbt".to_string()]);

        let words: Vec<&str> = ranked.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["bat", "cat", "cot"]);
        assert!(ranked.iter().all(|c| c.score == Some(0.0)));
    }

    #[test]
    fn test_unigram_model_is_frequency_ranking() {
        let model =
            NGramModel::from_tokens(1, &["the", "the", "the", "cat", "sat"]).unwrap();

        assert_eq!(model.probability(&["the"]), 3.0 / 5.0);
        let ranked = model.score_and_rank(&["cat".to_string(), "the".to_string()], &[]);
        assert_eq!(ranked[0].word, "the");
    }
}
