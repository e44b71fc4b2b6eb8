// Criterion benchmarks for fuzzdict-engine.
//
// Uses a synthetic dictionary so no word-list file is needed. Set
// FUZZDICT_DICT_PATH to a `word,frequency` file to benchmark against real
// data instead.
//
// Run:
//   cargo bench -p fuzzdict-engine
//   FUZZDICT_DICT_PATH=/path/to/english_words_freqs.txt cargo bench -p fuzzdict-engine

use std::hint::black_box;
use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};
use fuzzdict_engine::distance::{KeyboardCost, KeyboardLayout, uniform_distance};
use fuzzdict_engine::{Dictionary, EngineOptions, FuzzdictHandle, PatternTables};

// ---------------------------------------------------------------------------
// Dictionary setup
// ---------------------------------------------------------------------------

const QUERIES: &[&str] = &["helo", "wrold", "recieve", "teh", "dont", "definately", "xqzv"];

/// Deterministic pseudo-words over a small alphabet, lengths 3 to 9.
fn synthetic_dictionary(size: usize) -> Dictionary {
    const LETTERS: &[u8] = b"etaoinshrdlucmfw";
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut dictionary: Dictionary = (0..size)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = 3 + (state % 7) as usize;
            let word: String = (0..len)
                .map(|k| LETTERS[((state >> (k * 4)) & 0xf) as usize] as char)
                .collect();
            (word, (size - i) as u64)
        })
        .collect();
    dictionary.extend([("hello", 90_000), ("world", 80_000), ("receive", 50_000)]);
    dictionary
}

fn build_handle() -> FuzzdictHandle {
    if let Some(path) = std::env::var_os("FUZZDICT_DICT_PATH").map(PathBuf::from) {
        match FuzzdictHandle::from_path(&path, PatternTables::english()) {
            Ok(handle) => return handle,
            Err(e) => eprintln!("[fuzzdict_bench] {e}; using synthetic dictionary"),
        }
    }
    FuzzdictHandle::new(
        synthetic_dictionary(50_000),
        PatternTables::english(),
        EngineOptions::default(),
    )
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_distance(c: &mut Criterion) {
    let layout = KeyboardLayout::qwerty();
    let keyboard = KeyboardCost::new(&layout);

    c.bench_function("uniform_distance_exact", |b| {
        b.iter(|| uniform_distance(black_box("intention"), black_box("execution"), None))
    });
    c.bench_function("uniform_distance_threshold_2", |b| {
        b.iter(|| uniform_distance(black_box("intention"), black_box("execution"), Some(2)))
    });
    c.bench_function("keyboard_distance", |b| {
        b.iter(|| keyboard.distance(black_box("intention"), black_box("execution"), None))
    });
}

fn bench_correct(c: &mut Criterion) {
    let handle = build_handle();
    c.bench_function("correct_many_queries", |b| {
        b.iter(|| {
            for q in QUERIES {
                black_box(handle.correct_many(black_box(q), 5, None));
            }
        })
    });
}

fn bench_suggest(c: &mut Criterion) {
    let handle = build_handle();
    c.bench_function("suggest_prefixes", |b| {
        b.iter(|| {
            for prefix in ["h", "he", "e", "ta", "wor"] {
                black_box(handle.suggest(black_box(prefix), 5));
            }
        })
    });
}

fn bench_is_word(c: &mut Criterion) {
    let handle = build_handle();
    c.bench_function("is_word_queries", |b| {
        b.iter(|| {
            for q in QUERIES {
                black_box(handle.is_word(black_box(q)));
            }
        })
    });
}

criterion_group!(benches, bench_distance, bench_correct, bench_suggest, bench_is_word);
criterion_main!(benches);
