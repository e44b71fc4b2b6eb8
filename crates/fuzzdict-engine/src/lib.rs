//! Fuzzy dictionary lookup: membership, ranked corrections and completion.
//!
//! The dictionary is built once from a weighted word list and is read-only
//! afterwards; all queries borrow it immutably and may run concurrently.
//!
//! # Architecture
//!
//! - [`distance`] -- Bounded edit distance under uniform and keyboard cost models
//! - [`dictionary`] -- Arena-backed character trie with frequency weights
//! - [`tables`] -- Contraction and misspelling overlay data
//! - [`lexicon`] -- Membership test with overlays applied
//! - [`ranking`] -- Candidate search, confidence scoring and ordering
//! - [`suggestion`] -- Prefix completion by frequency
//! - [`loader`] -- `word,frequency` word-list parsing
//! - [`handle`] -- [`FuzzdictHandle`], the top-level query surface

pub mod dictionary;
pub mod distance;
pub mod handle;
pub mod lexicon;
pub mod loader;
pub mod ranking;
pub mod suggestion;
pub mod tables;

pub use dictionary::Dictionary;
pub use handle::{EngineOptions, FuzzdictError, FuzzdictHandle};
pub use loader::LoadError;
pub use tables::PatternTables;
