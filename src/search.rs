//! Adjacency search over a letter grid
//!
//! All four queries share one backtracking skeleton: depth-first descent
//! through the 8-connected neighbors of each cell, with a per-call visited
//! mask marked on entry and cleared on backtrack. Validation and path
//! reconstruction match raw characters; enumeration and suggestions walk
//! the dictionary trie in lockstep with the grid so dead branches are
//! pruned early.
//!
//! Determinism: starting cells scan row-major and neighbors follow a fixed
//! direction order (NW, N, NE, W, E, SW, S, SE), so validation and path
//! queries always report the first match under that order. Enumeration and
//! suggestions are deduplicated and sorted before return.

use crate::board::Grid;
use crate::dictionary::{Dictionary, TrieNode};
use crate::MIN_WORD_LENGTH;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Neighbor offsets in scan order: NW, N, NE, W, E, SW, S, SE.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A word search over one (grid, dictionary) pair. Holds read-only borrows;
/// cheap to construct per query.
pub struct SearchEngine<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
}

impl<'a> SearchEngine<'a> {
    pub fn new(grid: &'a Grid, dictionary: &'a Dictionary) -> Self {
        SearchEngine { grid, dictionary }
    }

    /// Whether `word` can be traced on the grid as a contiguous,
    /// non-cell-revisiting path. Case-insensitive; words shorter than three
    /// letters are rejected outright. Dictionary membership is not checked
    /// here — this answers embeddability only.
    pub fn validate_word(&self, word: &str) -> bool {
        let chars: Vec<char> = word.to_lowercase().chars().collect();
        if chars.len() < MIN_WORD_LENGTH {
            return false;
        }
        let mut visited = vec![false; self.grid.cell_count()];
        for row in 0..self.grid.size() {
            for col in 0..self.grid.size() {
                if self.match_from(row, col, &chars, 0, &mut visited, None) {
                    return true;
                }
            }
        }
        false
    }

    /// The first discoverable path for `word`, as (row, col) coordinates in
    /// traversal order, or `None` when the word cannot be traced. A "QU"
    /// tile consumes two word characters but contributes one path entry.
    pub fn find_word_path(&self, word: &str) -> Option<Vec<(usize, usize)>> {
        let chars: Vec<char> = word.to_lowercase().chars().collect();
        if chars.len() < MIN_WORD_LENGTH {
            return None;
        }
        let mut visited = vec![false; self.grid.cell_count()];
        let mut path = Vec::new();
        for row in 0..self.grid.size() {
            for col in 0..self.grid.size() {
                if self.match_from(row, col, &chars, 0, &mut visited, Some(&mut path)) {
                    return Some(path);
                }
                debug_assert!(path.is_empty());
            }
        }
        None
    }

    /// Every dictionary word embeddable in the grid, lexicographically
    /// sorted. Starting cells fan out in parallel; each sub-search owns its
    /// visited mask and result set, unioned afterwards.
    pub fn find_all_words(&self) -> Vec<String> {
        let size = self.grid.size();
        let found = (0..self.grid.cell_count())
            .into_par_iter()
            .map(|start| {
                let mut visited = vec![false; self.grid.cell_count()];
                let mut found = BTreeSet::new();
                self.walk_trie(
                    start / size,
                    start % size,
                    self.dictionary.root(),
                    &mut visited,
                    &mut found,
                );
                found
            })
            .reduce(BTreeSet::new, |mut acc, set| {
                acc.extend(set);
                acc
            });
        found.into_iter().collect()
    }

    /// Up to `max` grid-reachable dictionary words starting with `prefix`,
    /// sorted. The walk stops gathering once `max` distinct words are
    /// accumulated. An empty prefix yields no suggestions.
    pub fn suggestions(&self, prefix: &str, max: usize) -> Vec<String> {
        let prefix: Vec<char> = prefix.to_lowercase().chars().collect();
        if prefix.is_empty() || max == 0 {
            return Vec::new();
        }
        let mut visited = vec![false; self.grid.cell_count()];
        let mut found = BTreeSet::new();
        for row in 0..self.grid.size() {
            for col in 0..self.grid.size() {
                self.walk_suggestions(
                    row,
                    col,
                    self.dictionary.root(),
                    &prefix,
                    0,
                    &mut visited,
                    &mut found,
                    max,
                );
            }
        }
        found.into_iter().take(max).collect()
    }

    /// Raw character-matching DFS shared by validation and path queries.
    /// `index` is how many word characters have been consumed so far. When
    /// `path` is supplied, consumed cells are recorded and unwound on
    /// backtrack.
    fn match_from(
        &self,
        row: usize,
        col: usize,
        chars: &[char],
        index: usize,
        visited: &mut [bool],
        mut path: Option<&mut Vec<(usize, usize)>>,
    ) -> bool {
        let size = self.grid.size();
        let cell = row * size + col;
        if visited[cell] {
            return false;
        }
        let Some(tile) = self.grid.tile(row, col) else {
            return false;
        };

        // A "QU" tile matches only when the next two remaining characters
        // are exactly "qu"; every other tile consumes one character.
        let (first, second) = tile.chars_lower();
        if chars.get(index) != Some(&first) {
            return false;
        }
        let next = match second {
            Some(u) => {
                if chars.get(index + 1) != Some(&u) {
                    return false;
                }
                index + 2
            }
            None => index + 1,
        };

        visited[cell] = true;
        if let Some(p) = path.as_deref_mut() {
            p.push((row, col));
        }

        if next == chars.len() {
            return true;
        }

        for (dr, dc) in DIRECTIONS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if nr < size
                && nc < size
                && self.match_from(nr, nc, chars, next, visited, path.as_deref_mut())
            {
                return true;
            }
        }

        visited[cell] = false;
        if let Some(p) = path.as_deref_mut() {
            p.pop();
        }
        false
    }

    /// Trie-guided DFS for full enumeration. `node` is the trie position
    /// reached before consuming this cell.
    fn walk_trie(
        &self,
        row: usize,
        col: usize,
        node: &TrieNode,
        visited: &mut [bool],
        found: &mut BTreeSet<String>,
    ) {
        let size = self.grid.size();
        let cell = row * size + col;
        if visited[cell] {
            return;
        }
        let Some(tile) = self.grid.tile(row, col) else {
            return;
        };

        // Descend one trie level per tile character; a "QU" tile needs both
        // the 'q' child and its 'u' grandchild.
        let (first, second) = tile.chars_lower();
        let Some(mut node) = node.child(first) else {
            return;
        };
        if let Some(u) = second {
            match node.child(u) {
                Some(grandchild) => node = grandchild,
                None => return,
            }
        }

        if let Some(word) = node.word() {
            found.insert(word.to_string());
        }

        visited[cell] = true;
        for (dr, dc) in DIRECTIONS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if nr < size && nc < size {
                self.walk_trie(nr, nc, node, visited, found);
            }
        }
        visited[cell] = false;
    }

    /// Trie-guided DFS for prefix suggestions. `matched` counts prefix
    /// characters consumed so far; words are recorded only once the whole
    /// prefix has been matched.
    #[allow(clippy::too_many_arguments)]
    fn walk_suggestions(
        &self,
        row: usize,
        col: usize,
        node: &TrieNode,
        prefix: &[char],
        matched: usize,
        visited: &mut [bool],
        found: &mut BTreeSet<String>,
        max: usize,
    ) {
        if found.len() >= max {
            return;
        }
        let size = self.grid.size();
        let cell = row * size + col;
        if visited[cell] {
            return;
        }
        let Some(tile) = self.grid.tile(row, col) else {
            return;
        };

        let (first, second) = tile.chars_lower();
        let Some(mut node) = node.child(first) else {
            return;
        };
        let mut matched = matched;
        if matched < prefix.len() {
            if prefix[matched] != first {
                return;
            }
            matched += 1;
        }
        if let Some(u) = second {
            match node.child(u) {
                Some(grandchild) => node = grandchild,
                None => return,
            }
            // A one-character remainder of 'q' is satisfied by this tile;
            // the trailing 'u' then falls outside the prefix.
            if matched < prefix.len() {
                if prefix[matched] != u {
                    return;
                }
                matched += 1;
            }
        }

        if matched >= prefix.len() {
            if let Some(word) = node.word() {
                found.insert(word.to_string());
            }
        }

        visited[cell] = true;
        for (dr, dc) in DIRECTIONS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if nr < size && nc < size {
                self.walk_suggestions(nr, nc, node, prefix, matched, visited, found, max);
            }
        }
        visited[cell] = false;
    }
}
