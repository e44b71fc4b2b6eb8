// Query result values shared by the engine and its front ends

use serde::Serialize;

/// A dictionary word found within the edit-distance bound of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// The dictionary word (normalised form).
    pub word: String,
    /// Uniform edit distance from the query.
    pub distance: usize,
    /// Frequency weight stored in the dictionary.
    pub frequency: u64,
}

/// A ranked spelling correction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Correction {
    /// The corrected word, with the query's leading case carried over for
    /// overlay results.
    pub word: String,
    /// Uniform edit distance from the query (0 for overlay results).
    pub distance: usize,
    /// Frequency weight of the corrected word.
    pub frequency: u64,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

impl Correction {
    /// Build a correction from a scored candidate.
    pub fn from_candidate(candidate: Candidate, confidence: f64) -> Self {
        Self {
            word: candidate.word,
            distance: candidate.distance,
            frequency: candidate.frequency,
            confidence,
        }
    }
}

/// A prefix completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// The completed word.
    pub word: String,
    /// Frequency weight stored in the dictionary.
    pub frequency: u64,
}
