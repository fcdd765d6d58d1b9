//! Dictionary and corpus builders.
//!
//! Everything here runs at build time, before any lookup is served: the
//! resulting [`Trie`] and token vectors are handed to the ranker and treated
//! as read-only afterward. The loaders do not care where the text comes
//! from — a file path is just the common case; [`build_dictionary`] and
//! [`dictionary_from_corpus`] accept in-memory input directly.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::analysis;
use crate::error::Result;
use crate::spelling::trie::Trie;

/// Build a dictionary trie from a word list.
///
/// Words are normalized (trimmed, lowercased); empty or non-alphabetic
/// entries are skipped.
pub fn build_dictionary<I, S>(words: I) -> Trie
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut trie = Trie::new();
    for word in words {
        if let Some(normalized) = analysis::normalize_word(word.as_ref()) {
            trie.insert(&normalized);
        }
    }
    trie
}

/// Load a dictionary from a text file with one word per line.
pub fn load_dictionary_file<P: AsRef<Path>>(path: P) -> Result<Trie> {
    let file = File::open(&path)?;
    let reader = BufReader::new(file);

    let mut trie = Trie::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(word) = analysis::normalize_word(&line) {
            trie.insert(&word);
        }
    }

    info!(
        "loaded dictionary with {} words from {}",
        trie.len(),
        path.as_ref().display()
    );
    Ok(trie)
}

/// Build a dictionary from the words of a free-text corpus.
pub fn dictionary_from_corpus(text: &str) -> Trie {
    let mut trie = Trie::new();
    for word in analysis::extract_words(text) {
        trie.insert(&word);
    }
    trie
}

/// Load the token sequence of a training corpus from a text file.
///
/// Tokens are lowercased alphabetic words in document order, ready for
/// [`crate::spelling::ngram::NGramModel::train`].
pub fn load_corpus_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let text = fs::read_to_string(&path)?;
    let tokens = analysis::extract_words(&text);

    info!(
        "loaded corpus with {} tokens from {}",
        tokens.len(),
        path.as_ref().display()
    );
    Ok(tokens)
}
