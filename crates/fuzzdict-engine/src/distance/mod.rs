// Bounded edit distance (two-row Wagner-Fischer) under pluggable cost models
//
// Architecture:
//   - `CostModel`: per-operation costs; `UniformCost` charges 1 for every edit
//   - `keyboard`: `KeyboardLayout` adjacency and the x10 `KeyboardCost` model
//   - `distance`: the dynamic-programming kernel with optional early abort

pub mod keyboard;

pub use keyboard::{KeyboardCost, KeyboardLayout};

/// Per-operation costs for the edit-distance kernel.
///
/// Implementations must be symmetric (`substitution(a, b) ==
/// substitution(b, a)`): the kernel is free to swap its inputs so the
/// shorter sequence runs along the rolling row.
pub trait CostModel {
    /// Cost of inserting or deleting one character.
    fn indel(&self) -> usize;

    /// Cost of replacing `a` with `b`. Must be zero when `a == b`.
    fn substitution(&self, a: char, b: char) -> usize;
}

/// Classic Levenshtein costs: every insertion, deletion and substitution
/// costs 1, a match costs 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformCost;

impl CostModel for UniformCost {
    fn indel(&self) -> usize {
        1
    }

    fn substitution(&self, a: char, b: char) -> usize {
        usize::from(a != b)
    }
}

/// Compute the minimum edit cost transforming `a` into `b`.
///
/// Uses two rolling rows sized by the shorter input, so extra space is
/// O(min(|a|, |b|)).
///
/// When `threshold` is `Some(t)`, the row minimum is checked after each
/// completed row; once it exceeds `t` no later cell can come back under it,
/// so the computation stops and returns the sentinel `t + 1`. The final
/// value is clamped the same way, which makes the result exact whenever the
/// true distance is `<= t` and exactly `t + 1` otherwise.
pub fn distance<M: CostModel + ?Sized>(
    model: &M,
    a: &[char],
    b: &[char],
    threshold: Option<usize>,
) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let indel = model.indel();

    if short.is_empty() {
        return clamp_to_threshold(long.len() * indel, threshold);
    }

    let mut prev: Vec<usize> = (0..=short.len()).map(|j| j * indel).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr[0] = (i + 1) * indel;
        let mut row_min = curr[0];
        for (j, &sc) in short.iter().enumerate() {
            let deletion = prev[j + 1] + indel;
            let insertion = curr[j] + indel;
            let substitution = prev[j] + model.substitution(lc, sc);
            let cell = deletion.min(insertion).min(substitution);
            curr[j + 1] = cell;
            row_min = row_min.min(cell);
        }
        if let Some(t) = threshold {
            if row_min > t {
                return t + 1;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    clamp_to_threshold(prev[short.len()], threshold)
}

/// Uniform edit distance between two strings, compared character by character.
pub fn uniform_distance(a: &str, b: &str, threshold: Option<usize>) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance(&UniformCost, &a, &b, threshold)
}

fn clamp_to_threshold(value: usize, threshold: Option<usize>) -> usize {
    match threshold {
        Some(t) if value > t => t + 1,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn exact(a: &str, b: &str) -> usize {
        uniform_distance(a, b, None)
    }

    #[test]
    fn identical_strings_have_zero_distance() {
        for word in ["", "a", "hello", "don't", "caf\u{00E9}"] {
            assert_eq!(exact(word, word), 0, "{word}");
        }
    }

    #[test]
    fn empty_string_distance_is_other_length() {
        assert_eq!(exact("", "abc"), 3);
        assert_eq!(exact("abcd", ""), 4);
    }

    #[test]
    fn classic_examples() {
        assert_eq!(exact("kitten", "sitting"), 3);
        assert_eq!(exact("flaw", "lawn"), 2);
        assert_eq!(exact("helo", "hello"), 1);
        assert_eq!(exact("helo", "help"), 1);
        assert_eq!(exact("recieve", "receive"), 2);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            ("kitten", "sitting"),
            ("a", "abc"),
            ("hello", "world"),
            ("", "xyz"),
            ("intention", "execution"),
        ];
        for (a, b) in pairs {
            assert_eq!(exact(a, b), exact(b, a), "{a} / {b}");
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        // U+00E9 is two bytes in UTF-8 but one edit.
        assert_eq!(exact("cafe", "caf\u{00E9}"), 1);
    }

    #[test]
    fn threshold_returns_exact_value_when_within_bound() {
        let pairs = [("kitten", "sitting"), ("helo", "hello"), ("abc", "abc")];
        for (a, b) in pairs {
            let d = exact(a, b);
            for t in d..d + 3 {
                assert_eq!(uniform_distance(a, b, Some(t)), d, "{a} / {b} t={t}");
            }
        }
    }

    #[test]
    fn threshold_returns_sentinel_when_exceeded() {
        // true distance 3
        assert_eq!(uniform_distance("kitten", "sitting", Some(0)), 1);
        assert_eq!(uniform_distance("kitten", "sitting", Some(1)), 2);
        assert_eq!(uniform_distance("kitten", "sitting", Some(2)), 3);
    }

    #[test]
    fn threshold_sentinel_when_only_last_cell_exceeds() {
        // Row minima stay at or below 1 but the final distance is 2.
        assert_eq!(exact("ab", "ba"), 2);
        assert_eq!(uniform_distance("ab", "ba", Some(1)), 2);
    }

    #[test]
    fn threshold_on_empty_input() {
        assert_eq!(uniform_distance("", "abcdef", Some(2)), 3);
        assert_eq!(uniform_distance("", "ab", Some(2)), 2);
    }

    #[test]
    fn early_abort_on_very_different_strings() {
        let a = chars("aaaaaaaaaaaaaaaaaaaa");
        let b = chars("bbbbbbbbbbbbbbbbbbbb");
        assert_eq!(distance(&UniformCost, &a, &b, Some(2)), 3);
        assert_eq!(distance(&UniformCost, &a, &b, None), 20);
    }

    #[test]
    fn uniform_cost_model() {
        assert_eq!(UniformCost.indel(), 1);
        assert_eq!(UniformCost.substitution('a', 'a'), 0);
        assert_eq!(UniformCost.substitution('a', 'b'), 1);
    }
}
