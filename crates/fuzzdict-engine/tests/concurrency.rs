//! Shared read-only access from many threads.
//!
//! Run: cargo test -p fuzzdict-engine --test concurrency

use std::thread;

use fuzzdict_engine::{Dictionary, EngineOptions, FuzzdictHandle, PatternTables};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn engine_types_are_send_and_sync() {
    assert_send_sync::<Dictionary>();
    assert_send_sync::<PatternTables>();
    assert_send_sync::<FuzzdictHandle>();
}

#[test]
fn concurrent_queries_match_sequential_results() {
    let dictionary: Dictionary = (0..2_000u64)
        .map(|i| (format!("w{}x{}", i % 97, i), i + 1))
        .chain([("hello", 5_000), ("help", 2_500), ("world", 4_000)].map(|(w, f)| (w.to_string(), f)))
        .collect();
    let handle = FuzzdictHandle::new(dictionary, PatternTables::english(), EngineOptions::default());

    let queries = ["helo", "wrld", "w1x1", "dont", "hello's", "w5x"];
    let expected: Vec<_> = queries
        .iter()
        .map(|q| (handle.correct_many(q, 5, None), handle.suggest(q, 5)))
        .collect();

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for (q, want) in queries.iter().zip(&expected) {
                    assert_eq!(handle.correct_many(q, 5, None), want.0);
                    assert_eq!(handle.suggest(q, 5), want.1);
                }
            });
        }
    });
}
