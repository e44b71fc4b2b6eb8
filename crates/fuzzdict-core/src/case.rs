// Case type detection and leading-case carry-over

use crate::character::{is_lower, is_upper, simple_upper};

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "receive".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Receive".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "reCeive".
    Complex,
    /// All letters are uppercase: "RECEIVE".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Non-letter characters (digits, apostrophes, punctuation) are ignored when
/// determining the case pattern.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if is_upper(first) {
        first_uc = true;
        no_letters = false;
    }
    if is_lower(first) {
        all_uc = false;
        no_letters = false;
    }

    for c in chars {
        if is_upper(c) {
            no_letters = false;
            rest_lc = false;
        }
        if is_lower(c) {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Carry the leading-character case of `original` over to `corrected`.
///
/// If the first character of `original` is uppercase, the first character of
/// `corrected` is uppercased. Otherwise `corrected` is returned unchanged, so
/// canonical forms that are capitalised on their own ("I'm") keep their case.
pub fn carry_leading_case(original: &str, corrected: &str) -> String {
    let starts_upper = original.chars().next().is_some_and(is_upper);
    if !starts_upper {
        return corrected.to_string();
    }
    let mut chars = corrected.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(corrected.len());
            out.push(simple_upper(first));
            out.extend(chars);
            out
        }
        None => String::new(),
    }
}
