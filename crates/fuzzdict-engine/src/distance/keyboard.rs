// Keyboard adjacency and the keyboard-proximity cost model

use hashbrown::HashSet;

use super::{CostModel, distance};

/// Letter rows of the US QWERTY layout, top to bottom.
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Cost of every edit under the keyboard model.
pub const KEYBOARD_UNIT_COST: usize = 10;

/// Cost of substituting a character with a physically adjacent key.
pub const ADJACENT_SUBSTITUTION_COST: usize = 9;

/// Physical key adjacency for a staggered keyboard.
///
/// Built from letter rows: a key touches its left and right neighbours in
/// the same row, and the keys at the same index and one index to the left
/// in the row below (each row is shifted right relative to the one above).
/// Every pair is stored in both orders, so the relation is symmetric by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    adjacent: HashSet<(char, char)>,
}

impl KeyboardLayout {
    /// Build a layout from its rows, top row first.
    pub fn from_rows(rows: &[&str]) -> Self {
        let rows: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
        let mut layout = Self {
            adjacent: HashSet::new(),
        };

        for (r, row) in rows.iter().enumerate() {
            let below = rows.get(r + 1);
            for (i, &key) in row.iter().enumerate() {
                if let Some(&right) = row.get(i + 1) {
                    layout.connect(key, right);
                }
                let Some(below) = below else { continue };
                if let Some(&under) = below.get(i) {
                    layout.connect(key, under);
                }
                if let Some(&under_left) = i.checked_sub(1).and_then(|j| below.get(j)) {
                    layout.connect(key, under_left);
                }
            }
        }

        layout
    }

    /// The standard US QWERTY letter layout.
    pub fn qwerty() -> Self {
        Self::from_rows(&QWERTY_ROWS)
    }

    fn connect(&mut self, a: char, b: char) {
        self.adjacent.insert((a, b));
        self.adjacent.insert((b, a));
    }

    /// Check whether two keys are physical neighbours.
    pub fn is_adjacent(&self, a: char, b: char) -> bool {
        self.adjacent.contains(&(a, b))
    }

    /// Check that every stored pair also appears reversed.
    pub fn is_symmetric(&self) -> bool {
        self.adjacent
            .iter()
            .all(|&(a, b)| self.adjacent.contains(&(b, a)))
    }

    /// Number of ordered adjacent pairs.
    pub fn pair_count(&self) -> usize {
        self.adjacent.len()
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::qwerty()
    }
}

/// Edit costs scaled by [`KEYBOARD_UNIT_COST`], with adjacent-key
/// substitutions discounted to [`ADJACENT_SUBSTITUTION_COST`].
///
/// Dividing a result by 10 gives a value comparable to the uniform model.
#[derive(Debug, Clone, Copy)]
pub struct KeyboardCost<'a> {
    layout: &'a KeyboardLayout,
}

impl<'a> KeyboardCost<'a> {
    pub fn new(layout: &'a KeyboardLayout) -> Self {
        Self { layout }
    }

    /// Keyboard-model distance between two strings.
    pub fn distance(&self, a: &str, b: &str, threshold: Option<usize>) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        distance(self, &a, &b, threshold)
    }
}

impl CostModel for KeyboardCost<'_> {
    fn indel(&self) -> usize {
        KEYBOARD_UNIT_COST
    }

    fn substitution(&self, a: char, b: char) -> usize {
        if a == b {
            0
        } else if self.layout.is_adjacent(a, b) {
            ADJACENT_SUBSTITUTION_COST
        } else {
            KEYBOARD_UNIT_COST
        }
    }
}
