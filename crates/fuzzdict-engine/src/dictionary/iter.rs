// Explicit-stack depth-first enumeration of dictionary words

use super::{DictionaryNode, NodeId};

/// A pending node: the edge character that leads to it and the length of
/// the word path once that character is appended.
struct Frame {
    node: NodeId,
    edge: Option<char>,
    depth: usize,
}

/// Lazy depth-first iterator over `(word, frequency)` pairs below a node.
///
/// Created by [`super::Dictionary::words`] and
/// [`super::Dictionary::words_with_prefix`].
pub struct Words<'a> {
    nodes: &'a [DictionaryNode],
    stack: Vec<Frame>,
    path: Vec<char>,
    skip: Option<NodeId>,
}

impl<'a> Words<'a> {
    /// Start a traversal at `start`, whose path from the root spells `prefix`.
    /// When `skip_start` is set, the start node itself is never yielded.
    pub(super) fn new(
        nodes: &'a [DictionaryNode],
        start: NodeId,
        prefix: String,
        skip_start: bool,
    ) -> Self {
        let path: Vec<char> = prefix.chars().collect();
        let depth = path.len();
        Self {
            nodes,
            stack: vec![Frame {
                node: start,
                edge: None,
                depth,
            }],
            path,
            skip: skip_start.then_some(start),
        }
    }

    pub(super) fn empty(nodes: &'a [DictionaryNode]) -> Self {
        Self {
            nodes,
            stack: Vec::new(),
            path: Vec::new(),
            skip: None,
        }
    }
}

impl Iterator for Words<'_> {
    type Item = (String, u64);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            if let Some(c) = frame.edge {
                self.path.truncate(frame.depth - 1);
                self.path.push(c);
            }

            let node = &self.nodes[frame.node];
            for (c, child) in node.children() {
                self.stack.push(Frame {
                    node: child,
                    edge: Some(c),
                    depth: frame.depth + 1,
                });
            }

            if node.is_terminal() && self.skip != Some(frame.node) {
                return Some((self.path.iter().collect(), node.frequency()));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::super::Dictionary;

    #[test]
    fn yields_words_sharing_deep_prefixes() {
        let dict: Dictionary = [("a", 1), ("ab", 2), ("abc", 3), ("abd", 4), ("b", 5)]
            .into_iter()
            .collect();
        let mut words: Vec<(String, u64)> = dict.words().collect();
        words.sort();
        assert_eq!(
            words,
            vec![
                ("a".to_string(), 1),
                ("ab".to_string(), 2),
                ("abc".to_string(), 3),
                ("abd".to_string(), 4),
                ("b".to_string(), 5),
            ]
        );
    }

    #[test]
    fn prefix_traversal_rebuilds_full_words() {
        let dict: Dictionary = [("don't", 9), ("done", 3), ("do", 1)].into_iter().collect();
        let mut words: Vec<String> = dict.words_with_prefix("do").map(|(w, _)| w).collect();
        words.sort();
        assert_eq!(words, vec!["don't".to_string(), "done".to_string()]);
    }

    #[test]
    fn iterator_is_lazy() {
        let dict: Dictionary = (0..100).map(|i| (format!("w{i}"), i)).collect();
        let first_three: Vec<_> = dict.words().take(3).collect();
        assert_eq!(first_three.len(), 3);
    }
}
