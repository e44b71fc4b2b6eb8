// Static pattern tables: contractions and common misspellings
//
// The tables are plain data handed to the engine at construction time. Keys
// are normalised once here, so lookups take already normalised words.

#[cfg(feature = "english")]
pub mod english;

use fuzzdict_core::character::normalize_word;
use hashbrown::{HashMap, HashSet};

/// Immutable overlay data consulted before and alongside the fuzzy search.
#[derive(Debug, Clone, Default)]
pub struct PatternTables {
    /// Apostrophe-less spelling -> canonical contracted form ("dont" -> "don't").
    contractions: HashMap<String, String>,
    /// Misspelled form -> intended word ("recieve" -> "receive").
    misspellings: HashMap<String, String>,
    /// Normalised canonical contracted forms ("don't", "i'm").
    contracted_forms: HashSet<String>,
}

impl PatternTables {
    /// Build tables from `(key, value)` pairs.
    ///
    /// Keys of both tables and misspelling targets are normalised.
    /// Contraction values keep their spelling for output ("I'm"), and their
    /// normalised forms are recorded as known words. A misspelling entry
    /// that maps a word to itself is dropped, since its key would otherwise
    /// be reported as misspelled.
    pub fn new<C, M, K, V>(contractions: C, misspellings: M) -> Self
    where
        C: IntoIterator<Item = (K, V)>,
        M: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut tables = Self::default();

        for (key, value) in contractions {
            let canonical = value.as_ref().to_string();
            tables.contracted_forms.insert(normalize_word(&canonical));
            tables
                .contractions
                .insert(normalize_word(key.as_ref()), canonical);
        }

        for (key, value) in misspellings {
            let key = normalize_word(key.as_ref());
            let target = normalize_word(value.as_ref());
            if key != target {
                tables.misspellings.insert(key, target);
            }
        }

        tables
    }

    /// Tables with no entries; only the possessive rule remains active.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in English contraction and misspelling tables.
    #[cfg(feature = "english")]
    pub fn english() -> Self {
        Self::new(
            english::CONTRACTIONS.iter().copied(),
            english::COMMON_MISSPELLINGS.iter().copied(),
        )
    }

    /// The canonical contracted form for a normalised apostrophe-less key.
    pub fn contraction(&self, key: &str) -> Option<&str> {
        self.contractions.get(key).map(String::as_str)
    }

    /// The intended word for a normalised misspelled key.
    pub fn misspelling(&self, key: &str) -> Option<&str> {
        self.misspellings.get(key).map(String::as_str)
    }

    /// Whether a normalised word is one of the canonical contracted forms.
    pub fn is_contracted_form(&self, word: &str) -> bool {
        self.contracted_forms.contains(word)
    }

    /// Number of contraction entries.
    pub fn contraction_count(&self) -> usize {
        self.contractions.len()
    }

    /// Number of misspelling entries.
    pub fn misspelling_count(&self) -> usize {
        self.misspellings.len()
    }
}
