//! Text-level correction sessions.
//!
//! A [`CorrectionSession`] walks the words of a text, keeps the ones the
//! ranker's oracle accepts, and delegates every unknown word to an injected
//! [`CorrectionAcceptor`] — the interactive front end, an auto-correct
//! policy, or a test double. The session itself never performs I/O; it
//! returns ranked candidates and takes a plain replacement string back.
//! Accepted replacements are learned into the ranker's session trie.

use serde::{Deserialize, Serialize};

use crate::analysis;
use crate::error::Result;
use crate::spelling::ranker::{Candidate, Ranker};

/// Decides what to do with a misspelled word, given ranked candidates.
pub trait CorrectionAcceptor {
    /// Return the replacement to use, or `None` to keep the original word.
    ///
    /// The candidate list may be empty; an acceptor may still supply a
    /// replacement of its own (the interactive front end lets the user type
    /// one).
    fn choose(&mut self, original: &str, candidates: &[Candidate]) -> Option<String>;
}

/// Accepts the top-ranked candidate unconditionally (auto-correct).
pub struct TopCandidateAcceptor;

impl CorrectionAcceptor for TopCandidateAcceptor {
    fn choose(&mut self, _original: &str, candidates: &[Candidate]) -> Option<String> {
        candidates.first().map(|c| c.word.clone())
    }
}

/// Outcome for one word of a correction pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCorrection {
    /// The word as it appeared in the input.
    pub original: String,
    /// The accepted replacement, or `None` when the original was kept.
    pub replacement: Option<String>,
    /// The candidates that were offered.
    pub candidates: Vec<Candidate>,
}

/// Outcome of correcting a whole text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectedText {
    /// The text with accepted replacements applied.
    pub text: String,
    /// Per-word outcomes for every unknown word encountered, in order.
    pub corrections: Vec<WordCorrection>,
}

/// Correction loop over a shared [`Ranker`].
pub struct CorrectionSession<'a> {
    ranker: &'a Ranker,
}

impl<'a> CorrectionSession<'a> {
    /// Create a session over the given ranker.
    pub fn new(ranker: &'a Ranker) -> Self {
        CorrectionSession { ranker }
    }

    /// Correct a single word.
    ///
    /// A word the oracle accepts is returned unchanged with no candidates.
    /// Otherwise candidates are ranked under the active mode and the acceptor
    /// picks a replacement; an accepted replacement is learned into the
    /// session trie.
    pub fn correct_word(
        &self,
        word: &str,
        acceptor: &mut dyn CorrectionAcceptor,
    ) -> Result<WordCorrection> {
        if self.ranker.is_known(word) {
            return Ok(WordCorrection {
                original: word.to_string(),
                replacement: None,
                candidates: Vec::new(),
            });
        }

        let candidates = self.ranker.rank(word)?;
        let replacement = acceptor.choose(word, &candidates);
        if let Some(chosen) = &replacement {
            self.ranker.accept(word, chosen);
        }

        Ok(WordCorrection {
            original: word.to_string(),
            replacement,
            candidates,
        })
    }

    /// Correct every word of a text.
    ///
    /// Tokens split on whitespace; surrounding punctuation is stripped for
    /// the dictionary check. Known words pass through verbatim, replacements
    /// substitute the whole token.
    pub fn correct_text(
        &self,
        text: &str,
        acceptor: &mut dyn CorrectionAcceptor,
    ) -> Result<CorrectedText> {
        let mut corrected_tokens: Vec<String> = Vec::new();
        let mut corrections = Vec::new();

        for token in text.split_whitespace() {
            let core = analysis::strip_punctuation(token);
            if core.is_empty() || self.ranker.is_known(core) {
                corrected_tokens.push(token.to_string());
                continue;
            }

            let correction = self.correct_word(core, acceptor)?;
            match &correction.replacement {
                Some(replacement) => corrected_tokens.push(replacement.clone()),
                None => corrected_tokens.push(token.to_string()),
            }
            corrections.push(correction);
        }

        Ok(CorrectedText {
            text: corrected_tokens.join(" "),
            corrections,
        })
    }
}
