// Correction ranking: pattern overlays, fuzzy candidate search, scoring
//
// Architecture:
//   - `Corrector`: borrows the dictionary, pattern tables and keyboard
//     layout for the duration of one query
//   - `score`: confidence blend, composite score and the final sort
//
// Overlay order for a query:
//   1. contraction key        -> single canonical form, short-circuits
//   2. misspelling key        -> remembered as the boosted target
//   3. possessive of a word   -> single possessive form, short-circuits
//   4. full dictionary scan   -> thresholded uniform distance per word

pub mod score;

use fuzzdict_core::case::carry_leading_case;
use fuzzdict_core::character::normalize_word;
use fuzzdict_core::{Candidate, Correction};

use crate::dictionary::Dictionary;
use crate::distance::{self, KeyboardLayout, UniformCost};
use crate::lexicon::{Lexicon, OverlayLexicon, POSSESSIVE_SUFFIX, possessive_base};
use crate::tables::PatternTables;

pub use score::{HIGH_CONFIDENCE_TIER, SCORE_EPSILON};

/// Frequency reported for a contraction correction.
pub const CONTRACTION_FREQUENCY: u64 = 1_000_000;

/// Confidence of a contraction correction.
pub const CONTRACTION_CONFIDENCE: f64 = 1.0;

/// Confidence assigned to the target of a known misspelling.
pub const PATTERN_CONFIDENCE: f64 = 0.98;

/// Confidence of a possessive correction.
pub const POSSESSIVE_CONFIDENCE: f64 = 0.95;

/// Default edit-distance bound for corrections.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Produces ranked corrections for single words.
pub struct Corrector<'a> {
    dictionary: &'a Dictionary,
    tables: &'a PatternTables,
    layout: &'a KeyboardLayout,
}

impl<'a> Corrector<'a> {
    pub fn new(
        dictionary: &'a Dictionary,
        tables: &'a PatternTables,
        layout: &'a KeyboardLayout,
    ) -> Self {
        Self {
            dictionary,
            tables,
            layout,
        }
    }

    fn lexicon(&self) -> OverlayLexicon<'a> {
        OverlayLexicon::new(self.dictionary, self.tables)
    }

    /// Ranked corrections for `word`, at most `max_suggestions` of them.
    ///
    /// Returns an empty list when nothing lies within `max_distance` or the
    /// word is empty. The word itself is never returned.
    pub fn correct(
        &self,
        word: &str,
        max_suggestions: usize,
        max_distance: usize,
    ) -> Vec<Correction> {
        let original = word.trim();
        let query = normalize_word(original);
        let lexicon = self.lexicon();

        if let Some(canonical) = self.tables.contraction(&query) {
            tracing::trace!(query = %query, canonical, "contraction overlay");
            let mut corrections = vec![Correction {
                word: carry_leading_case(original, canonical),
                distance: 0,
                frequency: CONTRACTION_FREQUENCY,
                confidence: CONTRACTION_CONFIDENCE,
            }];
            corrections.truncate(max_suggestions);
            return corrections;
        }

        let boosted = self
            .tables
            .misspelling(&query)
            .filter(|target| lexicon.contains_normalized(target));
        if let Some(target) = boosted {
            tracing::trace!(query = %query, target, "misspelling overlay");
        }

        if let Some(base) = possessive_base(&query) {
            if lexicon.contains_normalized(base) {
                tracing::trace!(query = %query, base, "possessive overlay");
                let mut corrections = vec![Correction {
                    word: carry_leading_case(original, &format!("{base}{POSSESSIVE_SUFFIX}")),
                    distance: 0,
                    frequency: self.dictionary.frequency(base),
                    confidence: POSSESSIVE_CONFIDENCE,
                }];
                corrections.truncate(max_suggestions);
                return corrections;
            }
        }

        let mut corrections: Vec<Correction> = self
            .find_candidates(&query, max_distance)
            .into_iter()
            .map(|candidate| {
                let confidence = if boosted == Some(candidate.word.as_str()) {
                    PATTERN_CONFIDENCE
                } else {
                    score::confidence(candidate.distance, max_distance, candidate.frequency)
                };
                Correction::from_candidate(candidate, confidence)
            })
            .collect();

        score::rank(&query, &mut corrections, self.layout);
        corrections.truncate(max_suggestions);
        corrections
    }

    /// The best correction for `word`, if any.
    pub fn correct_one(&self, word: &str, max_distance: usize) -> Option<Correction> {
        self.correct(word, 1, max_distance).into_iter().next()
    }

    /// Every dictionary word within `max_distance` of the normalised
    /// `query`, excluding the query itself. Order is unspecified.
    pub fn find_candidates(&self, query: &str, max_distance: usize) -> Vec<Candidate> {
        if query.is_empty() {
            return Vec::new();
        }

        let query_chars: Vec<char> = query.chars().collect();
        let mut word_chars: Vec<char> = Vec::new();
        let mut scanned = 0usize;
        let candidates: Vec<Candidate> = self
            .dictionary
            .words()
            .filter(|(word, _)| word != query)
            .filter_map(|(word, frequency)| {
                word_chars.clear();
                word_chars.extend(word.chars());
                if word_chars.len().abs_diff(query_chars.len()) > max_distance {
                    return None;
                }
                scanned += 1;
                let d = distance::distance(
                    &UniformCost,
                    &query_chars,
                    &word_chars,
                    Some(max_distance),
                );
                (d <= max_distance).then_some(Candidate {
                    word,
                    distance: d,
                    frequency,
                })
            })
            .collect();

        tracing::trace!(
            query,
            scanned,
            found = candidates.len(),
            "candidate search"
        );
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        [
            ("hello", 100),
            ("help", 50),
            ("world", 80),
            ("receive", 500),
            ("dog", 40),
            ("don't", 900),
        ]
        .into_iter()
        .collect()
    }

    fn tables() -> PatternTables {
        PatternTables::new(
            [("dont", "don't"), ("im", "I'm")],
            [("recieve", "receive"), ("wrold", "wordl")],
        )
    }

    fn with_corrector<T>(f: impl FnOnce(&Corrector<'_>) -> T) -> T {
        let dict = dictionary();
        let tables = tables();
        let layout = KeyboardLayout::qwerty();
        f(&Corrector::new(&dict, &tables, &layout))
    }

    #[test]
    fn contraction_short_circuits() {
        with_corrector(|c| {
            let result = c.correct("dont", 5, 2);
            assert_eq!(result.len(), 1);
            assert_eq!(result[0].word, "don't");
            assert_eq!(result[0].distance, 0);
            assert_eq!(result[0].frequency, CONTRACTION_FREQUENCY);
            assert_eq!(result[0].confidence, 1.0);
        });
    }

    #[test]
    fn contraction_carries_leading_case() {
        with_corrector(|c| {
            assert_eq!(c.correct_one("Dont", 2).unwrap().word, "Don't");
            assert_eq!(c.correct_one("im", 2).unwrap().word, "I'm");
        });
    }

    #[test]
    fn misspelling_target_is_boosted() {
        with_corrector(|c| {
            let best = c.correct_one("recieve", 2).unwrap();
            assert_eq!(best.word, "receive");
            assert_eq!(best.confidence, PATTERN_CONFIDENCE);
        });
    }

    #[test]
    fn misspelling_with_unknown_target_is_not_boosted() {
        with_corrector(|c| {
            let result = c.correct("wrold", 5, 2);
            assert!(result.iter().all(|r| r.confidence < HIGH_CONFIDENCE_TIER));
            assert_eq!(result[0].word, "world");
        });
    }

    #[test]
    fn possessive_short_circuits() {
        with_corrector(|c| {
            let result = c.correct("Dog's", 5, 2);
            assert_eq!(result.len(), 1);
            assert_eq!(result[0].word, "Dog's");
            assert_eq!(result[0].frequency, 40);
            assert_eq!(result[0].confidence, POSSESSIVE_CONFIDENCE);
        });
    }

    #[test]
    fn possessive_of_unknown_base_falls_through() {
        with_corrector(|c| {
            let result = c.correct("cat's", 5, 2);
            assert!(result.iter().all(|r| r.confidence != POSSESSIVE_CONFIDENCE));
        });
    }

    #[test]
    fn fuzzy_search_orders_by_score() {
        with_corrector(|c| {
            let result = c.correct("helo", 5, 2);
            assert_eq!(result[0].word, "hello");
            assert_eq!(result[0].distance, 1);
            assert_eq!(result[1].word, "help");
        });
    }

    #[test]
    fn query_itself_is_excluded() {
        with_corrector(|c| {
            let result = c.correct("hello", 5, 2);
            assert!(result.iter().all(|r| r.word != "hello"));
            assert!(result.iter().any(|r| r.word == "help"));
        });
    }

    #[test]
    fn results_are_truncated() {
        with_corrector(|c| {
            assert_eq!(c.correct("helo", 1, 2).len(), 1);
            assert!(c.correct("dont", 0, 2).is_empty());
        });
    }

    #[test]
    fn empty_query_has_no_candidates() {
        with_corrector(|c| {
            assert!(c.correct("", 5, 2).is_empty());
            assert!(c.correct("   ", 5, 2).is_empty());
        });
    }

    #[test]
    fn nothing_within_distance_is_empty() {
        with_corrector(|c| {
            assert!(c.correct("zzzzzzzz", 5, 2).is_empty());
            assert_eq!(c.correct_one("zzzzzzzz", 2), None);
        });
    }

    #[test]
    fn zero_distance_finds_nothing_but_overlays() {
        with_corrector(|c| {
            assert!(c.correct("helo", 5, 0).is_empty());
            assert_eq!(c.correct_one("dont", 0).unwrap().word, "don't");
        });
    }

    #[test]
    fn find_candidates_respects_bound() {
        with_corrector(|c| {
            let mut found: Vec<(String, usize)> = c
                .find_candidates("helo", 1)
                .into_iter()
                .map(|cand| (cand.word, cand.distance))
                .collect();
            found.sort();
            assert_eq!(
                found,
                vec![("hello".to_string(), 1), ("help".to_string(), 1)]
            );
        });
    }

    #[test]
    fn confidences_are_in_unit_interval() {
        with_corrector(|c| {
            for word in ["helo", "wrld", "recieve", "dogs", "hep"] {
                for r in c.correct(word, 10, 2) {
                    assert!((0.0..=1.0).contains(&r.confidence), "{word}: {r:?}");
                }
            }
        });
    }

    #[test]
    fn frequent_candidates_get_full_frequency_score() {
        // the normaliser is per candidate, so a very frequent unrelated
        // word does not dilute the confidence of "hello"
        let dict: Dictionary = [("hello", 2_000_000), ("the", 23_135_851_162)]
            .into_iter()
            .collect();
        let tables = PatternTables::empty();
        let layout = KeyboardLayout::qwerty();
        let corrector = Corrector::new(&dict, &tables, &layout);

        let best = corrector.correct_one("helo", 2).unwrap();
        assert_eq!(best.word, "hello");
        let expected = 0.7 * (1.0 - 1.0 / 3.0) + 0.3;
        assert!((best.confidence - expected).abs() < 1e-9, "{best:?}");
    }

    #[test]
    fn wide_search_promotes_close_word_to_high_tier() {
        let dict: Dictionary = [("hello", 1_500_000), ("halt", 900_000_000)]
            .into_iter()
            .collect();
        let tables = PatternTables::empty();
        let layout = KeyboardLayout::qwerty();
        let corrector = Corrector::new(&dict, &tables, &layout);

        let result = corrector.correct("helo", 5, 40);
        let words: Vec<&str> = result.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, ["hello", "halt"]);
        // hello: 0.7 * (1 - 1/41) + 0.3, halt: 0.7 * (1 - 2/41) + 0.3
        assert!(result[0].confidence >= HIGH_CONFIDENCE_TIER);
        assert!(result[1].confidence < HIGH_CONFIDENCE_TIER);
    }
}
