//! Text analysis helpers for dictionary and corpus construction.
//!
//! Word extraction uses Unicode word boundaries so that corpora with
//! punctuation, digits, or mixed scripts tokenize predictably. Everything in
//! this module is pure; file access lives in [`crate::spelling::dictionary`].

use unicode_segmentation::UnicodeSegmentation;

/// Normalize a single word for dictionary insertion or lookup.
///
/// Returns the lowercased word, or `None` when the input is empty or contains
/// non-alphabetic characters after trimming.
pub fn normalize_word(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_alphabetic()) {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Extract lowercased alphabetic word tokens from free text.
///
/// Tokens containing digits or other non-alphabetic characters are dropped,
/// matching the dictionary normalization rules.
pub fn extract_words(text: &str) -> Vec<String> {
    text.unicode_words()
        .filter_map(normalize_word)
        .collect()
}

/// Strip leading and trailing punctuation from a token, leaving the word core.
///
/// Used by text-level correction to check `"word,"` or `"(word)"` against the
/// dictionary without the surrounding punctuation.
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}
