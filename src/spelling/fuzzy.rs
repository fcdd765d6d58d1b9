//! Bounded fuzzy matching over the dictionary trie.
//!
//! [`FuzzyMatcher`] runs a breadth-first search over the trie with an edit
//! budget. The edit model is deliberately restricted: a trie edge that matches
//! the next query character is free; a mismatching edge costs one edit
//! (substitution); an edge matching the character *after* the next one costs
//! one edit and may consume either one or two query characters (a
//! transposition-like skip); and when the query is exhausted, one trailing
//! character that completes a dictionary word costs one edit. Insertions and
//! deletions are only approximated by the skip and trailing rules, so this is
//! **not** Levenshtein distance — an adjacent transposition, for example,
//! costs up to two edits when the skipped character must still be consumed.
//!
//! Zero-cost moves are always taken regardless of the remaining budget; only
//! costed edits require budget, so a zero-budget search degenerates to exact
//! lookup.

use std::collections::{HashSet, VecDeque};

use log::warn;

use crate::error::{OrthosError, Result};
use crate::spelling::trie::{Trie, TrieNode};

/// Default edit budget used when callers do not configure one.
pub const DEFAULT_MAX_EDITS: usize = 2;

/// Largest accepted edit budget. Budgets above this are rejected at the API
/// boundary rather than expanding an enormous frontier.
pub const MAX_EDIT_BUDGET: usize = 8;

/// Default cap on total frontier expansions per search.
pub const DEFAULT_MAX_EXPANSIONS: usize = 1 << 20;

/// One frontier entry: a trie node, how much of the query has been consumed,
/// the candidate prefix spelled so far, and the remaining edit budget.
struct SearchState<'a> {
    node: &'a TrieNode,
    pos: usize,
    candidate: String,
    edits: usize,
}

/// Breadth-first bounded edit-distance search over a [`Trie`].
pub struct FuzzyMatcher<'a> {
    trie: &'a Trie,
    max_edits: usize,
    max_expansions: usize,
}

impl<'a> FuzzyMatcher<'a> {
    /// Create a matcher with the given edit budget.
    ///
    /// Returns [`OrthosError::InvalidEditBudget`] when `max_edits` exceeds
    /// [`MAX_EDIT_BUDGET`].
    pub fn new(trie: &'a Trie, max_edits: usize) -> Result<Self> {
        if max_edits > MAX_EDIT_BUDGET {
            return Err(OrthosError::invalid_edit_budget(format!(
                "edit budget {max_edits} exceeds maximum {MAX_EDIT_BUDGET}"
            )));
        }
        Ok(FuzzyMatcher {
            trie,
            max_edits,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        })
    }

    /// Override the frontier expansion cap.
    ///
    /// The cap bounds worst-case work when the edit budget or the word length
    /// is not trusted; a search that hits it returns the suggestions found so
    /// far.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// The configured edit budget.
    pub fn max_edits(&self) -> usize {
        self.max_edits
    }

    /// Enumerate every dictionary word within the edit budget of `word`.
    ///
    /// The result is deduplicated and sorted lexicographically; an empty
    /// query yields an empty result.
    pub fn search(&self, word: &str) -> Vec<String> {
        if word.is_empty() {
            return Vec::new();
        }
        let query: Vec<char> = word.chars().collect();
        let mut found: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<SearchState<'a>> = VecDeque::new();
        queue.push_back(SearchState {
            node: self.trie.root(),
            pos: 0,
            candidate: String::new(),
            edits: self.max_edits,
        });

        let mut expansions = 0usize;
        while let Some(state) = queue.pop_front() {
            expansions += 1;
            if expansions > self.max_expansions {
                warn!(
                    "fuzzy search for {word:?} hit the expansion cap ({}); returning partial results",
                    self.max_expansions
                );
                break;
            }

            let remaining = &query[state.pos..];
            if remaining.is_empty() && state.node.is_terminal() {
                found.insert(state.candidate.clone());
            }

            if let Some(&next) = remaining.first() {
                for (&ch, child) in state.node.children() {
                    if ch == next {
                        // Exact match: consume one character for free.
                        queue.push_back(SearchState {
                            node: child,
                            pos: state.pos + 1,
                            candidate: extend(&state.candidate, ch),
                            edits: state.edits,
                        });
                    } else if state.edits > 0 {
                        // Substitution: consume one character, spend one edit.
                        queue.push_back(SearchState {
                            node: child,
                            pos: state.pos + 1,
                            candidate: extend(&state.candidate, ch),
                            edits: state.edits - 1,
                        });
                    }
                }
            } else if state.edits > 0 {
                // Query exhausted: one trailing character that completes a
                // dictionary word counts as a single insertion.
                for (&ch, child) in state.node.children() {
                    if child.is_terminal() {
                        found.insert(extend(&state.candidate, ch));
                    }
                }
            }

            // Skip rule: an edge matching the character after the next one
            // approximates a transposition (consume one) or a deletion
            // (consume two), each costing one edit.
            if state.edits > 0 && remaining.len() >= 2 {
                let second = remaining[1];
                for (&ch, child) in state.node.children() {
                    if ch == second {
                        queue.push_back(SearchState {
                            node: child,
                            pos: state.pos + 1,
                            candidate: extend(&state.candidate, ch),
                            edits: state.edits - 1,
                        });
                        queue.push_back(SearchState {
                            node: child,
                            pos: state.pos + 2,
                            candidate: extend(&state.candidate, ch),
                            edits: state.edits - 1,
                        });
                    }
                }
            }
        }

        let mut result: Vec<String> = found.into_iter().collect();
        result.sort();
        result
    }
}

fn extend(candidate: &str, ch: char) -> String {
    let mut next = String::with_capacity(candidate.len() + ch.len_utf8());
    next.push_str(candidate);
    next.push(ch);
    next
}
