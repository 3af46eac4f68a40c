//! Trie dictionary for prefix-pruned word lookup
//!
//! Built once from a host-supplied word list and read-only afterwards, so
//! concurrent searches need no synchronization. Entries shorter than the
//! minimum word length are dropped at insertion; character classes are the
//! caller's responsibility to filter upstream.

use crate::MIN_WORD_LENGTH;
use std::collections::HashMap;

/// One node of the prefix tree. End-of-word nodes carry the canonical
/// lowercase spelling so the search engine never reassembles words.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    children: HashMap<char, TrieNode>,
    word: Option<String>,
}

impl TrieNode {
    pub(crate) fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// The canonical word ending at this node, if any.
    pub(crate) fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }
}

/// A prefix-tree dictionary over a word list.
#[derive(Debug, Default)]
pub struct Dictionary {
    root: TrieNode,
    word_count: usize,
}

impl Dictionary {
    /// Build a dictionary from a word list. Entries are lowercased and
    /// inserted letter by letter; entries shorter than three letters are
    /// silently dropped. Duplicates collapse onto one trie path.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::default();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    fn insert(&mut self, word: &str) {
        if word.chars().count() < MIN_WORD_LENGTH {
            return;
        }
        let lower = word.to_lowercase();
        let mut node = &mut self.root;
        for c in lower.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.word.is_none() {
            node.word = Some(lower);
            self.word_count += 1;
        }
    }

    /// Exact membership test, case-insensitive. Words shorter than three
    /// letters are always absent.
    pub fn contains_word(&self, word: &str) -> bool {
        if word.chars().count() < MIN_WORD_LENGTH {
            return false;
        }
        let mut node = &self.root;
        for c in word.to_lowercase().chars() {
            match node.child(c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.word().is_some()
    }

    /// Number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// True when no words survived insertion.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Traversal entry point for the search engine.
    pub(crate) fn root(&self) -> &TrieNode {
        &self.root
    }
}
