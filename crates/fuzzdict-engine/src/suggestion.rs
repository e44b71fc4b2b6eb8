// Prefix completion ordered by frequency

use fuzzdict_core::Suggestion;

use crate::dictionary::Dictionary;

/// A completion is only offered inline when it has been seen more than once.
pub const INLINE_MIN_FREQUENCY: u64 = 2;

/// Completions of `prefix`, most frequent first, at most `limit` of them.
///
/// Equal frequencies are ordered by word so results are reproducible. The
/// prefix itself is never returned.
pub fn suggest(dictionary: &Dictionary, prefix: &str, limit: usize) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = dictionary
        .words_with_prefix(prefix)
        .map(|(word, frequency)| Suggestion { word, frequency })
        .collect();
    sort_suggestions(&mut suggestions);
    suggestions.truncate(limit);
    tracing::trace!(prefix, found = suggestions.len(), "prefix suggestions");
    suggestions
}

/// The single best completion of `prefix`, if frequent enough.
pub fn suggest_one(dictionary: &Dictionary, prefix: &str) -> Option<Suggestion> {
    suggest(dictionary, prefix, 1)
        .into_iter()
        .next()
        .filter(|s| s.frequency >= INLINE_MIN_FREQUENCY)
}

/// Sort by frequency descending, then word ascending.
pub fn sort_suggestions(suggestions: &mut [Suggestion]) {
    suggestions.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.word.cmp(&b.word))
    });
}
