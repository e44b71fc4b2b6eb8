// Character classification and normalisation utilities

// ---------------------------------------------------------------------------
// Apostrophes
// ---------------------------------------------------------------------------

/// The canonical apostrophe stored in the dictionary.
pub const APOSTROPHE: char = '\'';

/// Check whether a character is one of the apostrophe variants users type
/// in place of a straight apostrophe.
///
/// Recognised variants: U+2018 (left single quotation mark), U+2019 (right
/// single quotation mark) and the backtick.
pub fn is_apostrophe_variant(c: char) -> bool {
    matches!(c, '\u{2018}' | '\u{2019}' | '`')
}

/// Map an apostrophe variant to the straight apostrophe; other characters
/// are returned unchanged.
pub fn normalize_apostrophe(c: char) -> char {
    if is_apostrophe_variant(c) { APOSTROPHE } else { c }
}

/// Normalise a word for dictionary lookup: every character is lowercased and
/// apostrophe variants become a straight apostrophe.
///
/// This is the single normal form used for insertion, membership tests and
/// pattern-table keys, so `"CAN'T"`, `"can\u{2019}t"` and `"can`t"` all map
/// to `"can't"`.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .map(|c| normalize_apostrophe(simple_lower(c)))
        .collect()
}

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if c.is_ascii_digit() {
        return CharType::Digit;
    }
    if is_apostrophe_variant(c) || c.is_ascii_punctuation() || is_unicode_punctuation(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

/// Punctuation outside the ASCII range that commonly appears in English text.
fn is_unicode_punctuation(c: char) -> bool {
    matches!(
        c,
        '\u{00AB}' // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{00BB}' // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2013}' // EN DASH
            | '\u{2014}' // EM DASH
            | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
            | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
            | '\u{2026}' // HORIZONTAL ELLIPSIS
    )
}

/// Check whether a character may appear inside a dictionary word: a letter
/// or any apostrophe variant.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == APOSTROPHE || is_apostrophe_variant(c)
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase yield iterators because
// some characters expand to several characters. Dictionary keys need a
// one-to-one mapping, so only the first character is taken.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- apostrophes --

    #[test]
    fn apostrophe_variants_are_recognised() {
        assert!(is_apostrophe_variant('\u{2018}'));
        assert!(is_apostrophe_variant('\u{2019}'));
        assert!(is_apostrophe_variant('`'));
        assert!(!is_apostrophe_variant('\''));
        assert!(!is_apostrophe_variant('"'));
    }

    #[test]
    fn normalize_word_unifies_apostrophes_and_case() {
        assert_eq!(normalize_word("CAN'T"), "can't");
        assert_eq!(normalize_word("can\u{2019}t"), "can't");
        assert_eq!(normalize_word("can`t"), "can't");
        assert_eq!(normalize_word("Can\u{2018}T"), "can't");
    }

    #[test]
    fn normalize_word_empty() {
        assert_eq!(normalize_word(""), "");
    }

    #[test]
    fn normalize_word_keeps_non_ascii_letters() {
        assert_eq!(normalize_word("CAF\u{00C9}"), "caf\u{00E9}");
    }

    // -- CharType --

    #[test]
    fn char_type_letters() {
        assert_eq!(get_char_type('A'), CharType::Letter);
        assert_eq!(get_char_type('z'), CharType::Letter);
        assert_eq!(get_char_type('\u{00E9}'), CharType::Letter);
    }

    #[test]
    fn char_type_digits_and_whitespace() {
        assert_eq!(get_char_type('0'), CharType::Digit);
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\n'), CharType::Whitespace);
    }

    #[test]
    fn char_type_punctuation() {
        assert_eq!(get_char_type('.'), CharType::Punctuation);
        assert_eq!(get_char_type('\''), CharType::Punctuation);
        assert_eq!(get_char_type('\u{2019}'), CharType::Punctuation);
        assert_eq!(get_char_type('\u{2014}'), CharType::Punctuation);
    }

    #[test]
    fn char_type_unknown() {
        assert_eq!(get_char_type('\u{1F600}'), CharType::Unknown);
    }

    #[test]
    fn word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('\''));
        assert!(is_word_char('\u{2019}'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('7'));
    }

    // -- case mapping --

    #[test]
    fn simple_case_mapping() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_lower('1'), '1');
        assert!(is_upper('Q'));
        assert!(!is_upper('q'));
        assert!(is_lower('q'));
        assert!(!is_lower('\''));
    }
}
