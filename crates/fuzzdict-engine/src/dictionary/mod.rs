// Prefix dictionary: an arena-backed character trie with frequency weights
//
// Nodes live in a single `Vec` and refer to their children by `NodeId`, so
// every node has exactly one parent and the whole structure is released at
// once. The dictionary is filled during loading and only read afterwards.

mod iter;

pub use iter::Words;

use fuzzdict_core::character::normalize_word;
use hashbrown::HashMap;

/// Index of a node inside the dictionary arena.
pub type NodeId = usize;

/// The root node is always the first arena slot.
pub const ROOT: NodeId = 0;

/// One character position in the trie.
#[derive(Debug, Clone, Default)]
pub struct DictionaryNode {
    children: HashMap<char, NodeId>,
    terminal: bool,
    frequency: u64,
}

impl DictionaryNode {
    /// Whether the path from the root to this node spells a complete word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Frequency weight; meaningful only for terminal nodes.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// The child reached by `c`, if any.
    pub fn child(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }

    /// Iterate over `(character, child)` edges in unspecified order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&c, &id)| (c, id))
    }
}

/// A weighted word list indexed by prefix.
///
/// All keys are stored in normal form (lowercase, straight apostrophes; see
/// [`normalize_word`]), and every lookup normalises its argument first.
#[derive(Debug, Clone)]
pub struct Dictionary {
    nodes: Vec<DictionaryNode>,
    word_count: usize,
    max_frequency: u64,
}

impl Dictionary {
    /// Create an empty dictionary containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![DictionaryNode::default()],
            word_count: 0,
            max_frequency: 0,
        }
    }

    /// Insert a word with its frequency weight.
    ///
    /// The word is normalised before insertion; blank words are ignored.
    /// Inserting an existing word replaces its frequency. Returns `true` if
    /// the word was not present before.
    pub fn insert(&mut self, word: &str, frequency: u64) -> bool {
        let word = normalize_word(word.trim());
        if word.is_empty() {
            return false;
        }

        let mut node_idx = ROOT;
        for c in word.chars() {
            node_idx = match self.nodes[node_idx].child(c) {
                Some(next) => next,
                None => {
                    let new_id = self.nodes.len();
                    self.nodes.push(DictionaryNode::default());
                    self.nodes[node_idx].children.insert(c, new_id);
                    new_id
                }
            };
        }

        let node = &mut self.nodes[node_idx];
        let is_new = !node.terminal;
        node.terminal = true;
        node.frequency = frequency;
        if is_new {
            self.word_count += 1;
        }
        self.max_frequency = self.max_frequency.max(frequency);
        is_new
    }

    /// Check whether `word` is stored as a complete word.
    ///
    /// This is the raw trie lookup; pattern overlays are applied by
    /// [`crate::lexicon::OverlayLexicon`].
    pub fn contains(&self, word: &str) -> bool {
        self.terminal_node(&normalize_word(word)).is_some()
    }

    /// Frequency of `word`, or 0 if it is absent or only a prefix.
    pub fn frequency(&self, word: &str) -> u64 {
        self.terminal_node(&normalize_word(word))
            .map_or(0, |id| self.nodes[id].frequency)
    }

    /// Walk from the root along an already normalised key.
    pub fn find_node(&self, key: &str) -> Option<NodeId> {
        key.chars()
            .try_fold(ROOT, |node_idx, c| self.nodes[node_idx].child(c))
    }

    fn terminal_node(&self, key: &str) -> Option<NodeId> {
        self.find_node(key).filter(|&id| self.nodes[id].terminal)
    }

    /// Access a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this dictionary.
    pub fn node(&self, id: NodeId) -> &DictionaryNode {
        &self.nodes[id]
    }

    /// Lazily enumerate every word with its frequency.
    ///
    /// The order is unspecified. Each call starts a fresh traversal.
    pub fn words(&self) -> Words<'_> {
        Words::new(&self.nodes, ROOT, String::new(), false)
    }

    /// Lazily enumerate the words that extend `prefix`.
    ///
    /// The prefix is normalised first. Yields nothing if no stored word
    /// starts with it; the prefix itself is never yielded, even when it is a
    /// word.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        let prefix = normalize_word(prefix);
        match self.find_node(&prefix) {
            Some(start) => Words::new(&self.nodes, start, prefix, true),
            None => Words::empty(&self.nodes),
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Highest frequency seen during loading.
    pub fn max_frequency(&self) -> u64 {
        self.max_frequency
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<(S, u64)> for Dictionary {
    fn extend<I: IntoIterator<Item = (S, u64)>>(&mut self, iter: I) {
        for (word, frequency) in iter {
            self.insert(word.as_ref(), frequency);
        }
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}
