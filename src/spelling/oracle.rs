//! Word-validity oracle capability.
//!
//! The ranker decides whether a word needs correction by asking an injected
//! [`WordOracle`] rather than consulting a fixed data source, so the check can
//! be backed by the dictionary trie itself, an in-memory lexicon loaded from
//! an external resource, or a fake in tests — all without network or file
//! access at lookup time.

use std::collections::HashSet;
use std::sync::Arc;

use crate::spelling::trie::Trie;

/// Capability for answering "is this a correctly spelled word?".
pub trait WordOracle: Send + Sync {
    /// True when the word is considered correctly spelled.
    fn is_known(&self, word: &str) -> bool;
}

/// Oracle backed by the dictionary trie itself — the default wiring.
pub struct TrieOracle {
    dictionary: Arc<Trie>,
}

impl TrieOracle {
    /// Create an oracle over the given dictionary.
    pub fn new(dictionary: Arc<Trie>) -> Self {
        TrieOracle { dictionary }
    }
}

impl WordOracle for TrieOracle {
    fn is_known(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }
}

/// Oracle backed by a fixed word set.
///
/// Useful when validity comes from a lexicon broader than the suggestion
/// dictionary (stopword unions, external word lists loaded at startup).
pub struct WordSetOracle {
    words: HashSet<String>,
}

impl WordSetOracle {
    /// Create an oracle from any word collection; words are lowercased.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        WordSetOracle {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl WordOracle for WordSetOracle {
    fn is_known(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}
