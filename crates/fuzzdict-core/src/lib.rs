//! Shared types and character utilities for fuzzdict.
//!
//! - [`character`] -- apostrophe normalisation, simple case mapping, character classes
//! - [`case`] -- case pattern detection and leading-case carry-over
//! - [`types`] -- query result values (`Candidate`, `Correction`, `Suggestion`)

pub mod case;
pub mod character;
pub mod types;

pub use types::{Candidate, Correction, Suggestion};
