// FuzzdictHandle: top-level integration point for dictionary lookups.
//
// Owns the dictionary, the pattern tables and the keyboard layout, and
// provides membership tests, ranked corrections and prefix completion.
//
// Design notes:
// - The handle creates lightweight borrowing views (OverlayLexicon,
//   Corrector) in each method call instead of storing them.
// - Options are stored directly in the handle and passed to the views when
//   methods are called.
// - Everything is immutable after construction, so a shared handle can be
//   queried from any number of threads.

use std::io::BufRead;
use std::path::Path;

use fuzzdict_core::{Correction, Suggestion};

use crate::dictionary::Dictionary;
use crate::distance::KeyboardLayout;
use crate::lexicon::OverlayLexicon;
use crate::loader::{self, LoadError, WordEntry};
use crate::ranking::{Corrector, DEFAULT_MAX_DISTANCE};
use crate::suggestion;
use crate::tables::PatternTables;

/// Default number of corrections or completions returned.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Error type for FuzzdictHandle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum FuzzdictError {
    /// The word list could not be loaded.
    #[error("failed to load dictionary: {0}")]
    Load(#[from] LoadError),
}

/// Query defaults stored in the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Edit-distance bound used when a call does not give one.
    pub max_distance: usize,
    /// Result count used when a call asks for zero results.
    pub max_suggestions: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Top-level handle that owns the dictionary and its overlay data.
pub struct FuzzdictHandle {
    dictionary: Dictionary,
    tables: PatternTables,
    layout: KeyboardLayout,
    options: EngineOptions,
}

impl FuzzdictHandle {
    /// Create a handle from a built dictionary and pattern tables.
    ///
    /// The keyboard layout defaults to QWERTY. A zero `max_suggestions`
    /// in `options` is replaced by [`DEFAULT_MAX_SUGGESTIONS`].
    pub fn new(dictionary: Dictionary, tables: PatternTables, mut options: EngineOptions) -> Self {
        if options.max_suggestions == 0 {
            options.max_suggestions = DEFAULT_MAX_SUGGESTIONS;
        }
        tracing::debug!(
            words = dictionary.len(),
            nodes = dictionary.node_count(),
            contractions = tables.contraction_count(),
            misspellings = tables.misspelling_count(),
            "dictionary ready"
        );
        Self {
            dictionary,
            tables,
            layout: KeyboardLayout::qwerty(),
            options,
        }
    }

    /// Create a handle from parsed word-list entries.
    pub fn from_entries<I>(entries: I, tables: PatternTables) -> Self
    where
        I: IntoIterator<Item = WordEntry>,
    {
        let dictionary = entries
            .into_iter()
            .map(|e| (e.word, e.frequency))
            .collect();
        Self::new(dictionary, tables, EngineOptions::default())
    }

    /// Create a handle by reading a `word,frequency` list from `reader`.
    ///
    /// `source` names the reader in error messages.
    pub fn from_reader<R: BufRead>(
        reader: R,
        source: &Path,
        tables: PatternTables,
    ) -> Result<Self, FuzzdictError> {
        let entries = loader::read_word_list(reader, source)?;
        Ok(Self::from_entries(entries, tables))
    }

    /// Create a handle by loading a `word,frequency` list file.
    pub fn from_path(path: &Path, tables: PatternTables) -> Result<Self, FuzzdictError> {
        let entries = loader::load_word_list(path)?;
        Ok(Self::from_entries(entries, tables))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Check whether a word is known.
    ///
    /// Case and apostrophe variants are ignored. Contraction and misspelling
    /// keys are never words; contracted forms and possessives of known
    /// words always are.
    pub fn is_word(&self, word: &str) -> bool {
        OverlayLexicon::new(&self.dictionary, &self.tables).is_word(word)
    }

    /// Stored frequency of a word, 0 if absent.
    pub fn frequency(&self, word: &str) -> u64 {
        self.dictionary.frequency(word)
    }

    /// The best correction for `word`.
    ///
    /// `max_distance` falls back to the configured default.
    pub fn correct_one(&self, word: &str, max_distance: Option<usize>) -> Option<Correction> {
        self.corrector()
            .correct_one(word, max_distance.unwrap_or(self.options.max_distance))
    }

    /// Up to `limit` ranked corrections for `word`.
    ///
    /// A `limit` of 0 is replaced by the configured default.
    pub fn correct_many(
        &self,
        word: &str,
        limit: usize,
        max_distance: Option<usize>,
    ) -> Vec<Correction> {
        self.corrector().correct(
            word,
            self.effective_limit(limit),
            max_distance.unwrap_or(self.options.max_distance),
        )
    }

    /// Up to `limit` completions of `prefix`, most frequent first.
    ///
    /// A `limit` of 0 is replaced by the configured default.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<Suggestion> {
        suggestion::suggest(&self.dictionary, prefix, self.effective_limit(limit))
    }

    /// The single best completion of `prefix`, if it occurs more than once.
    pub fn suggest_one(&self, prefix: &str) -> Option<Suggestion> {
        suggestion::suggest_one(&self.dictionary, prefix)
    }

    fn corrector(&self) -> Corrector<'_> {
        Corrector::new(&self.dictionary, &self.tables, &self.layout)
    }

    fn effective_limit(&self, limit: usize) -> usize {
        if limit == 0 {
            tracing::debug!(
                default = self.options.max_suggestions,
                "zero result limit replaced by default"
            );
            self.options.max_suggestions
        } else {
            limit
        }
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the default edit-distance bound.
    pub fn set_max_distance(&mut self, value: usize) {
        self.options.max_distance = value;
    }

    /// Set the default result count. 0 restores the built-in default.
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.options.max_suggestions = if value == 0 {
            DEFAULT_MAX_SUGGESTIONS
        } else {
            value
        };
    }

    /// Replace the keyboard layout used for tie-breaking.
    pub fn set_keyboard_layout(&mut self, layout: KeyboardLayout) {
        self.layout = layout;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn tables(&self) -> &PatternTables {
        &self.tables
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    pub fn keyboard_layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    /// Whether the raw dictionary, without overlays, contains `word`.
    pub fn contains_raw(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn handle() -> FuzzdictHandle {
        let dictionary: Dictionary = [("hello", 100), ("help", 50), ("world", 80)]
            .into_iter()
            .collect();
        FuzzdictHandle::new(dictionary, PatternTables::empty(), EngineOptions::default())
    }

    #[test]
    fn default_options() {
        let opts = EngineOptions::default();
        assert_eq!(opts.max_distance, 2);
        assert_eq!(opts.max_suggestions, 5);
    }

    #[test]
    fn is_word_and_frequency() {
        let h = handle();
        assert!(h.is_word("Hello"));
        assert!(!h.is_word("helo"));
        assert_eq!(h.frequency("WORLD"), 80);
        assert_eq!(h.frequency("nope"), 0);
    }

    #[test]
    fn correct_one_uses_default_distance() {
        let h = handle();
        assert_eq!(h.correct_one("helo", None).unwrap().word, "hello");
        assert_eq!(h.correct_one("helo", Some(0)), None);
    }

    #[test]
    fn set_max_distance_changes_default() {
        let mut h = handle();
        h.set_max_distance(0);
        assert_eq!(h.correct_one("helo", None), None);
        assert!(h.correct_one("helo", Some(1)).is_some());
    }

    #[test]
    fn zero_limit_uses_default() {
        let mut h = handle();
        h.set_max_suggestions(1);
        assert_eq!(h.correct_many("helo", 0, None).len(), 1);
        assert_eq!(h.suggest("hel", 0).len(), 1);
        assert_eq!(h.suggest("hel", 5).len(), 2);
    }

    #[test]
    fn set_max_suggestions_zero_restores_default() {
        let mut h = handle();
        h.set_max_suggestions(0);
        assert_eq!(h.options().max_suggestions, DEFAULT_MAX_SUGGESTIONS);
    }

    #[test]
    fn from_reader_builds_dictionary() {
        let h = FuzzdictHandle::from_reader(
            Cursor::new("hello,100\nhelp,50\n"),
            Path::new("<mem>"),
            PatternTables::empty(),
        )
        .unwrap();
        assert_eq!(h.dictionary().len(), 2);
        assert_eq!(h.suggest_one("hel").unwrap().word, "hello");
    }

    #[test]
    fn from_reader_empty_is_error() {
        let result =
            FuzzdictHandle::from_reader(Cursor::new(""), Path::new("<mem>"), PatternTables::empty());
        let err = result.err().unwrap();
        assert!(matches!(err, FuzzdictError::Load(LoadError::Empty { .. })));
        assert!(err.to_string().starts_with("failed to load dictionary"));
    }

    #[test]
    fn contains_raw_ignores_overlays() {
        let dictionary: Dictionary = [("dont", 3)].into_iter().collect();
        let tables = PatternTables::new([("dont", "don't")], std::iter::empty::<(&str, &str)>());
        let h = FuzzdictHandle::new(dictionary, tables, EngineOptions::default());
        assert!(h.contains_raw("dont"));
        assert!(!h.is_word("dont"));
    }

    #[test]
    fn keyboard_layout_can_be_replaced() {
        let mut h = handle();
        h.set_keyboard_layout(KeyboardLayout::from_rows(&["ab"]));
        assert!(h.keyboard_layout().is_adjacent('a', 'b'));
        assert!(!h.keyboard_layout().is_adjacent('q', 'w'));
    }
}
