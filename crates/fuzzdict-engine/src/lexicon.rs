// Word membership with pattern overlays applied on top of the raw trie

use fuzzdict_core::character::normalize_word;

use crate::dictionary::Dictionary;
use crate::tables::PatternTables;

/// Suffix marking a possessive form.
pub const POSSESSIVE_SUFFIX: &str = "'s";

/// Trait for word membership sources.
///
/// Callers pass a word already in normal form (see [`normalize_word`]);
/// no normalisation happens here.
pub trait Lexicon {
    /// Whether the normalised word is known.
    fn contains_normalized(&self, word: &str) -> bool;
}

impl Lexicon for Dictionary {
    fn contains_normalized(&self, word: &str) -> bool {
        self.find_node(word)
            .is_some_and(|id| self.node(id).is_terminal())
    }
}

/// Return the base of a possessive form ("dog's" -> "dog").
///
/// The word must be longer than the suffix itself.
pub fn possessive_base(word: &str) -> Option<&str> {
    if word.chars().count() <= POSSESSIVE_SUFFIX.len() {
        return None;
    }
    word.strip_suffix(POSSESSIVE_SUFFIX)
}

/// Adapts a dictionary and its pattern tables into one membership test.
///
/// Rules, in order:
/// 1. A contraction key ("dont") is not a word.
/// 2. A misspelling key ("recieve") is not a word.
/// 3. A canonical contracted form ("don't") is a word.
/// 4. A possessive ("dog's") is a word when its base is.
/// 5. Otherwise the raw dictionary decides.
pub struct OverlayLexicon<'a> {
    dictionary: &'a dyn Lexicon,
    tables: &'a PatternTables,
}

impl<'a> OverlayLexicon<'a> {
    /// Create a new overlay over `dictionary`.
    pub fn new(dictionary: &'a dyn Lexicon, tables: &'a PatternTables) -> Self {
        Self { dictionary, tables }
    }

    /// Membership test for raw user input: normalises, then applies the
    /// overlay rules.
    pub fn is_word(&self, word: &str) -> bool {
        self.contains_normalized(&normalize_word(word))
    }
}

impl Lexicon for OverlayLexicon<'_> {
    fn contains_normalized(&self, word: &str) -> bool {
        if self.tables.contraction(word).is_some() || self.tables.misspelling(word).is_some() {
            return false;
        }
        if self.tables.is_contracted_form(word) {
            return true;
        }
        if let Some(base) = possessive_base(word) {
            return self.contains_normalized(base);
        }
        self.dictionary.contains_normalized(word)
    }
}
