//! Character trie over dictionary words.
//!
//! Each edge is labeled by one character; a path from the root to a terminal
//! node spells a complete dictionary word. The trie is populated once during a
//! bulk-load phase and read-only afterward; session dictionaries (words the
//! user accepted during a correction session) are separate [`Trie`] instances
//! owned by the ranker.

use std::collections::HashMap;

use crate::error::Result;
use crate::spelling::fuzzy::FuzzyMatcher;

/// A single trie node: child edges keyed by character, plus a flag marking
/// that a complete dictionary word ends here.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    pub(crate) fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = (&char, &TrieNode)> {
        self.children.iter()
    }

    pub(crate) fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }
}

/// A prefix tree over dictionary words.
///
/// Supports insertion, exact membership lookup, bounded fuzzy suggestion via
/// [`FuzzyMatcher`], and iterative word enumeration.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    /// Create a new empty trie.
    pub fn new() -> Self {
        Trie::default()
    }

    /// Insert a word, creating child nodes as needed.
    ///
    /// Inserting the empty string or a word already present is a no-op;
    /// repeat insertion never changes lookup or suggestion results.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
        }
    }

    /// Check whether the exact word is in the trie.
    ///
    /// Returns true only when the full character sequence is consumed and the
    /// landing node is terminal; a word that is merely a prefix of an inserted
    /// word is not contained.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &self.root;
        for ch in word.chars() {
            match node.child(ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }

    /// Enumerate every dictionary word within `max_edits` of `word` under the
    /// restricted edit model (see [`FuzzyMatcher`]).
    ///
    /// The result is deduplicated and sorted lexicographically. Returns an
    /// error when `max_edits` exceeds [`crate::spelling::fuzzy::MAX_EDIT_BUDGET`].
    pub fn fuzzy_suggest(&self, word: &str, max_edits: usize) -> Result<Vec<String>> {
        Ok(FuzzyMatcher::new(self, max_edits)?.search(word))
    }

    /// Number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// True when no words have been inserted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Collect every word in the trie, sorted lexicographically.
    ///
    /// Traversal is iterative with an explicit stack, bounded by the longest
    /// inserted word rather than the call stack.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.word_count);
        let mut stack: Vec<(&TrieNode, String)> = vec![(&self.root, String::new())];
        while let Some((node, prefix)) = stack.pop() {
            if node.terminal {
                out.push(prefix.clone());
            }
            for (ch, child) in &node.children {
                let mut next = prefix.clone();
                next.push(*ch);
                stack.push((child, next));
            }
        }
        out.sort();
        out
    }

    pub(crate) fn root(&self) -> &TrieNode {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut trie = Trie::new();
        assert!(!trie.contains("cat"));

        trie.insert("cat");
        assert!(trie.contains("cat"));
        assert_eq!(trie.len(), 1);

        trie.insert("cot");
        assert!(trie.contains("cat"));
        assert!(trie.contains("cot"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_prefix_is_not_contained() {
        let mut trie = Trie::new();
        trie.insert("catalog");

        assert!(!trie.contains("cat"));
        assert!(!trie.contains("catalo"));
        assert!(trie.contains("catalog"));

        // Marking the prefix terminal afterward makes both words visible.
        trie.insert("cat");
        assert!(trie.contains("cat"));
        assert!(trie.contains("catalog"));
    }

    #[test]
    fn test_missing_edge_returns_false() {
        let mut trie = Trie::new();
        trie.insert("dog");
        assert!(!trie.contains("dot"));
        assert!(!trie.contains("dogs"));
    }

    #[test]
    fn test_repeat_insertion_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("hello");
        trie.insert("hello");

        assert_eq!(trie.len(), 1);
        assert!(trie.contains("hello"));
        assert_eq!(trie.words(), vec!["hello"]);
    }

    #[test]
    fn test_empty_word_is_noop() {
        let mut trie = Trie::new();
        trie.insert("");
        assert!(trie.is_empty());
        assert!(!trie.contains(""));
    }

    #[test]
    fn test_words_sorted() {
        let mut trie = Trie::new();
        for word in ["cot", "cat", "dog", "catalog"] {
            trie.insert(word);
        }
        assert_eq!(trie.words(), vec!["cat", "catalog", "cot", "dog"]);
    }

    #[test]
    fn test_unicode_words() {
        let mut trie = Trie::new();
        trie.insert("naïve");
        assert!(trie.contains("naïve"));
        assert!(!trie.contains("naive"));
    }
}
