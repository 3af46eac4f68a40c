//! # wordgrid
//!
//! A Boggle-style word search engine. Given a dictionary word list and a
//! square grid of letter tiles, the engine finds every word embeddable in
//! the grid under 8-directional adjacency rules, validates individual words,
//! reconstructs the path a word takes across the grid, and offers
//! prefix-based suggestions. On top of the search sit a scoring table and a
//! set of move-selection heuristics for automated players.
//!
//! The crate is a pure library: the host application supplies the word list
//! and grid size, and consumes sorted word lists, coordinate paths, scores,
//! and move suggestions. Timers, rendering, persistence, and networking are
//! the host's business.

pub mod board;
pub mod dictionary;
pub mod score;
pub mod search;
pub mod strategy;

pub use board::{Grid, GridError, Tile};
pub use dictionary::Dictionary;
pub use score::score;
pub use search::SearchEngine;

/// Minimum word length accepted anywhere in the engine (Boggle rule).
/// Shorter entries are dropped at dictionary build time, and validation,
/// enumeration, and path queries reject shorter words outright.
pub const MIN_WORD_LENGTH: usize = 3;
