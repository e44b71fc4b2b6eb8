// Confidence scoring and the composite ranking order

use fuzzdict_core::Correction;

use crate::distance::{KeyboardCost, KeyboardLayout};

/// Weight of the normalised distance in the confidence blend.
pub const DISTANCE_WEIGHT: f64 = 0.7;

/// Weight of the normalised frequency in the confidence blend.
pub const FREQUENCY_WEIGHT: f64 = 0.3;

/// Lower bound of the per-candidate frequency normaliser.
pub const FREQUENCY_FLOOR: u64 = 1_000_000;

/// Multiplier of `log10(frequency)` in the composite score.
pub const LOG_FREQUENCY_SCALE: f64 = 0.6;

/// Composite scores closer than this are treated as tied.
pub const SCORE_EPSILON: f64 = 0.001;

/// Corrections at or above this confidence rank ahead of all others.
pub const HIGH_CONFIDENCE_TIER: f64 = 0.98;

/// Confidence of a fuzzy-search candidate.
///
/// The frequency part is `frequency / max(frequency, FREQUENCY_FLOOR)`, so
/// any word at or above the floor scores 1.0 there. The result is clamped
/// to 1.0.
pub fn confidence(distance: usize, max_distance: usize, frequency: u64) -> f64 {
    let distance_score = 1.0 - distance as f64 / (max_distance as f64 + 1.0);
    let frequency_score = frequency as f64 / frequency.max(FREQUENCY_FLOOR) as f64;
    (DISTANCE_WEIGHT * distance_score + FREQUENCY_WEIGHT * frequency_score).min(1.0)
}

/// Composite score: lower is better.
///
/// `distance - 0.6 * log10(frequency)`, the log term only when the
/// frequency is positive.
pub fn composite_score(distance: usize, frequency: u64) -> f64 {
    let mut score = distance as f64;
    if frequency > 0 {
        score -= (frequency as f64).log10() * LOG_FREQUENCY_SCALE;
    }
    score
}

/// Whether a correction belongs to the high-confidence tier.
pub fn is_high_confidence(correction: &Correction) -> bool {
    correction.confidence >= HIGH_CONFIDENCE_TIER
}

fn score_of(correction: &Correction) -> f64 {
    composite_score(correction.distance, correction.frequency)
}

/// Sort corrections for `query` into their final order.
///
/// 1. High-confidence tier first.
/// 2. Ascending composite score within a tier.
/// 3. Runs whose scores lie within [`SCORE_EPSILON`] of the run's first
///    element are tied, and reordered by keyboard distance to the query,
///    then by word.
///
/// Tie runs are anchored at their first element so the comparison stays a
/// total order.
pub fn rank(query: &str, corrections: &mut [Correction], layout: &KeyboardLayout) {
    corrections.sort_by(|a, b| {
        is_high_confidence(b)
            .cmp(&is_high_confidence(a))
            .then_with(|| score_of(a).total_cmp(&score_of(b)))
    });

    let keyboard = KeyboardCost::new(layout);
    let mut start = 0;
    while start < corrections.len() {
        let tier = is_high_confidence(&corrections[start]);
        let anchor = score_of(&corrections[start]);
        let end = corrections[start + 1..]
            .iter()
            .position(|c| is_high_confidence(c) != tier || score_of(c) - anchor > SCORE_EPSILON)
            .map_or(corrections.len(), |offset| start + 1 + offset);

        if end - start > 1 {
            corrections[start..end]
                .sort_by_cached_key(|c| (keyboard.distance(query, &c.word, None), c.word.clone()));
        }
        start = end;
    }
}
