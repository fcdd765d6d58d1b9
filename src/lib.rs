//! # Orthos
//!
//! A trie-based spelling correction library with n-gram ranking.
//!
//! ## Features
//!
//! - Dictionary trie with exact lookup and bounded fuzzy suggestion search
//! - N-gram language model for ranking candidate corrections
//! - Session dictionaries that learn user-accepted corrections
//! - Injected word-validity oracle for offline testing
//! - Parallel batch checking over a fixed-size worker pool
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use orthos::spelling::{build_dictionary, NGramModel, Ranker};
//!
//! let dictionary = Arc::new(build_dictionary(["hello", "help", "world"]));
//! let model = NGramModel::from_tokens(2, &["helo", "hello", "helo", "help"]).unwrap();
//! let ranker = Ranker::new(dictionary).with_model(model);
//!
//! let candidates = ranker.rank("helo").unwrap();
//! assert_eq!(candidates[0].word, "hello");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod parallel;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
