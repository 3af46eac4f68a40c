//! Boggle word scoring

/// Points awarded for a word, by length: 3-4 letters score 1, 5 scores 2,
/// 6 scores 3, 7 scores 5, and 8 or more score 11. Anything shorter than
/// the minimum word length scores 0.
pub fn score(word: &str) -> u32 {
    match word.chars().count() {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}
