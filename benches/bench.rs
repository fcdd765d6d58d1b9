//! Criterion benchmarks for the Orthos spelling engine: dictionary build,
//! fuzzy suggestion search, and blended ranking.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use orthos::spelling::{NGramModel, Ranker, build_dictionary};

/// Generate a synthetic word list for benchmarking.
fn generate_words(count: usize) -> Vec<String> {
    let stems = [
        "search", "engine", "spell", "correct", "suggest", "dictionary", "language", "model",
        "candidate", "probability", "context", "token", "corpus", "window", "budget", "frontier",
    ];
    let suffixes = ["", "s", "er", "ers", "ing", "ed", "ion", "ions"];

    let mut words = Vec::with_capacity(count);
    'outer: for stem in stems.iter().cycle() {
        for suffix in &suffixes {
            words.push(format!("{stem}{suffix}"));
            if words.len() >= count {
                break 'outer;
            }
        }
    }
    words
}

/// Benchmark dictionary construction.
fn bench_dictionary_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary_build");
    let words = generate_words(1000);

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("build_1000_words", |b| {
        b.iter(|| {
            let trie = build_dictionary(black_box(&words));
            black_box(trie)
        })
    });

    group.finish();
}

/// Benchmark fuzzy suggestion search.
fn bench_fuzzy_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzy_suggest");

    let dictionary = build_dictionary(generate_words(1000));
    let misspellings = ["serach", "spel", "corect", "sugest", "dictionry"];

    group.bench_function("suggest_single_word", |b| {
        b.iter(|| {
            let suggestions = dictionary.fuzzy_suggest(black_box("serach"), 2).unwrap();
            black_box(suggestions)
        })
    });

    group.throughput(Throughput::Elements(misspellings.len() as u64));
    group.bench_function("suggest_batch_words", |b| {
        b.iter(|| {
            for word in &misspellings {
                let suggestions = dictionary.fuzzy_suggest(black_box(word), 2).unwrap();
                black_box(suggestions);
            }
        })
    });

    group.finish();
}

/// Benchmark blended ranking with a trained bigram model.
fn bench_blended_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("blended_ranking");
    group.sample_size(20);

    let words = generate_words(1000);
    let dictionary = Arc::new(build_dictionary(&words));
    let model = NGramModel::from_tokens(2, &words).unwrap();
    let ranker = Ranker::new(dictionary).with_model(model);

    group.bench_function("rank_single_word", |b| {
        b.iter(|| {
            let candidates = ranker.rank(black_box("serach")).unwrap();
            black_box(candidates)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_dictionary_build,
    bench_fuzzy_suggest,
    bench_blended_ranking
);

criterion_main!(benches);
