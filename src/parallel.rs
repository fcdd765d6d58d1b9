//! Parallel batch spell checking.
//!
//! Fuzzy searches are pure and independent per word, and the dictionary trie
//! is read-only once built, so checking the words of a text parallelizes
//! cleanly. [`ParallelChecker`] owns a fixed-size thread pool and fans the
//! tokens of a batch out across it; the only shared mutable state is the
//! ranker's session trie, which serializes its own access.

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{OrthosError, Result};
use crate::spelling::ranker::{Candidate, Ranker};

/// Configuration for the parallel checker.
#[derive(Debug, Clone, Default)]
pub struct ParallelCheckConfig {
    /// Thread pool size. `None` uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

/// Per-token outcome of a batch check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenReport {
    /// The token as supplied.
    pub word: String,
    /// Whether the oracle accepted the word.
    pub known: bool,
    /// Ranked candidates for unknown words; empty for known words.
    pub candidates: Vec<Candidate>,
}

/// Checks batches of tokens against a shared ranker on a worker pool.
pub struct ParallelChecker {
    thread_pool: ThreadPool,
}

impl ParallelChecker {
    /// Create a checker with the given configuration.
    pub fn new(config: ParallelCheckConfig) -> Result<Self> {
        let pool_size = config.thread_pool_size.unwrap_or_else(num_cpus::get);
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(pool_size)
            .thread_name(|i| format!("spell-check-{i}"))
            .build()
            .map_err(|e| OrthosError::internal(format!("failed to create thread pool: {e}")))?;

        debug!("parallel checker using {pool_size} threads");
        Ok(ParallelChecker { thread_pool })
    }

    /// Rank every token concurrently; results come back in input order.
    pub fn check_tokens(&self, ranker: &Ranker, tokens: &[String]) -> Result<Vec<TokenReport>> {
        self.thread_pool.install(|| {
            tokens
                .par_iter()
                .map(|token| {
                    let known = ranker.is_known(token);
                    let candidates = if known { Vec::new() } else { ranker.rank(token)? };
                    Ok(TokenReport {
                        word: token.clone(),
                        known,
                        candidates,
                    })
                })
                .collect()
        })
    }
}
