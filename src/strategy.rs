//! Move heuristics and board analytics for automated players
//!
//! Everything here is a pure function over the `find_all_words` output
//! (minus a player's already-found set). Randomized policies take an
//! injected RNG so hosts and tests get reproducible move lists; tie-breaks
//! are explicit (priority descending, then word ascending) rather than
//! whatever the sort happens to leave behind.

use crate::board::Grid;
use crate::dictionary::Dictionary;
use crate::score::score;
use crate::search::SearchEngine;
use rand::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Letters that make a word noticeably harder to spot on a board.
pub const RARE_LETTERS: [char; 4] = ['j', 'q', 'x', 'z'];

const BALANCED_MOVE_COUNT: usize = 5;
const NOVICE_MOVE_COUNT: usize = 3;
const SCORE_FIRST_MOVE_COUNT: usize = 6;
const SAFE_MOVE_COUNT: usize = 4;
const RARE_MOVE_COUNT: usize = 2;
const RARE_FILLER_COUNT: usize = 4;

/// Selection policy for an automated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Short words, small random subset
    Novice,
    /// Score-weighted with random jitter
    Balanced,
    /// Score-per-difficulty ranking, scaled by remaining time
    Skilled,
    /// Highest raw score first
    ScoreFirst,
    /// Bounded length window
    Safe,
    /// Seeks words with rare letters
    RareLetters,
}

/// Candidate words a player has not found yet. Preserves the input order
/// (sorted, when fed from `find_all_words`).
pub fn remaining_words(all_words: &[String], found: &HashSet<String>) -> Vec<String> {
    all_words
        .iter()
        .filter(|w| !found.contains(w.as_str()))
        .cloned()
        .collect()
}

/// Dispatch to the policy for `profile`. `time_remaining_secs` only
/// influences the skilled policy.
pub fn moves_for_profile<R: Rng>(
    profile: Profile,
    words: &[String],
    time_remaining_secs: u32,
    rng: &mut R,
) -> Vec<String> {
    match profile {
        Profile::Novice => novice_moves_with_rng(words, rng),
        Profile::Balanced => balanced_moves_with_rng(words, rng),
        Profile::Skilled => skilled_moves(words, time_remaining_secs),
        Profile::ScoreFirst => score_first_moves(words),
        Profile::Safe => safe_moves(words),
        Profile::RareLetters => rare_letter_moves(words),
    }
}

/// Top words by score with a random jitter of at most 50% of the score,
/// so repeated calls don't always hand back the same list.
pub fn balanced_moves(words: &[String]) -> Vec<String> {
    balanced_moves_with_rng(words, &mut rand::rng())
}

/// `balanced_moves` with a specific RNG (for testing/seeding).
pub fn balanced_moves_with_rng<R: Rng>(words: &[String], rng: &mut R) -> Vec<String> {
    let mut ranked: Vec<(f64, &String)> = words
        .iter()
        .map(|word| {
            let jitter: f64 = rng.random_range(0.0..0.5);
            (score(word) as f64 * (1.0 + jitter), word)
        })
        .collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    ranked
        .into_iter()
        .take(BALANCED_MOVE_COUNT)
        .map(|(_, word)| word.clone())
        .collect()
}

/// Words ranked by score per difficulty unit; more candidates are offered
/// when more of the round remains.
pub fn skilled_moves(words: &[String], time_remaining_secs: u32) -> Vec<String> {
    let mut ranked: Vec<(f64, &String)> = words
        .iter()
        .map(|word| (score(word) as f64 / estimate_difficulty(word), word))
        .collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    let count = if time_remaining_secs > 120 {
        8
    } else if time_remaining_secs > 60 {
        6
    } else {
        4
    };
    ranked
        .into_iter()
        .take(count)
        .map(|(_, word)| word.clone())
        .collect()
}

/// A small random subset, preferring words of five letters or fewer.
pub fn novice_moves(words: &[String]) -> Vec<String> {
    novice_moves_with_rng(words, &mut rand::rng())
}

/// `novice_moves` with a specific RNG (for testing/seeding).
pub fn novice_moves_with_rng<R: Rng>(words: &[String], rng: &mut R) -> Vec<String> {
    let short: Vec<&String> = words.iter().filter(|w| w.chars().count() <= 5).collect();
    let pool: Vec<&String> = if short.is_empty() {
        words.iter().collect()
    } else {
        short
    };
    pool.choose_multiple(rng, NOVICE_MOVE_COUNT)
        .map(|word| (*word).clone())
        .collect()
}

/// Highest-scoring words first; word order breaks score ties.
pub fn score_first_moves(words: &[String]) -> Vec<String> {
    let mut ranked: Vec<&String> = words.iter().collect();
    ranked.sort_by(|a, b| score(b).cmp(&score(a)).then_with(|| a.cmp(b)));
    ranked
        .into_iter()
        .take(SCORE_FIRST_MOVE_COUNT)
        .cloned()
        .collect()
}

/// Sure-win picks: words of three to five letters, falling back to the full
/// candidate list when none qualify.
pub fn safe_moves(words: &[String]) -> Vec<String> {
    let safe: Vec<&String> = words
        .iter()
        .filter(|w| (3..=5).contains(&w.chars().count()))
        .collect();
    let pool: Vec<&String> = if safe.is_empty() {
        words.iter().collect()
    } else {
        safe
    };
    pool.into_iter().take(SAFE_MOVE_COUNT).cloned().collect()
}

/// A mix of rare-letter words (which opponents tend to miss) and ordinary
/// candidates.
pub fn rare_letter_moves(words: &[String]) -> Vec<String> {
    let rare = words.iter().filter(|w| contains_rare_letter(w));
    let regular = words.iter().filter(|w| !contains_rare_letter(w));
    rare.take(RARE_MOVE_COUNT)
        .chain(regular.take(RARE_FILLER_COUNT))
        .cloned()
        .collect()
}

/// Whether a word contains any of J, Q, X, or Z.
pub fn contains_rare_letter(word: &str) -> bool {
    word.to_lowercase().chars().any(|c| RARE_LETTERS.contains(&c))
}

/// Estimated effort to spot a word on a board. Grows with length past four
/// letters, with rare letters, and with repeated letters.
pub fn estimate_difficulty(word: &str) -> f64 {
    let lower = word.to_lowercase();
    let length = lower.chars().count();

    let mut difficulty = 1.0 + 0.5 * length.saturating_sub(4) as f64;

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in lower.chars() {
        if RARE_LETTERS.contains(&c) {
            difficulty += 1.0;
        }
        *counts.entry(c).or_insert(0) += 1;
    }
    difficulty += 0.5 * counts.values().filter(|&&n| n > 1).count() as f64;

    difficulty
}

/// Aggregate difficulty metrics for one generated board, relative only to
/// other boards of the same dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardAnalysis {
    /// Number of distinct findable words
    pub word_count: usize,
    /// Mean length of the findable words (0 for a wordless board)
    pub average_word_length: f64,
    /// Sum of all findable word scores
    pub total_score: u32,
    /// How often each tile face appears on the board
    pub tile_frequency: BTreeMap<String, usize>,
    /// Scalar combining word density, length, and achievable score
    pub complexity: f64,
}

/// Run the full search and derive board metrics from its result.
pub fn analyze_board(grid: &Grid, dictionary: &Dictionary) -> BoardAnalysis {
    let words = SearchEngine::new(grid, dictionary).find_all_words();

    let word_count = words.len();
    let total_score: u32 = words.iter().map(|w| score(w)).sum();
    let average_word_length = if word_count == 0 {
        0.0
    } else {
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / word_count as f64
    };

    let mut tile_frequency = BTreeMap::new();
    for (_, tile) in grid.cells() {
        *tile_frequency.entry(tile.to_string()).or_insert(0) += 1;
    }

    let density = word_count as f64 / grid.cell_count() as f64;
    let length_factor = average_word_length / 5.0;
    let score_factor = total_score as f64 / 100.0;
    let complexity = density * length_factor * score_factor * 10.0;

    BoardAnalysis {
        word_count,
        average_word_length,
        total_score,
        tile_frequency,
        complexity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_remaining_words_filters_found() {
        let all = words(&["art", "cat", "rat", "tar"]);
        let found: HashSet<String> = ["cat", "tar"].iter().map(|w| w.to_string()).collect();
        assert_eq!(remaining_words(&all, &found), words(&["art", "rat"]));
    }

    #[test]
    fn test_balanced_moves_bounded_and_from_input() {
        let all = words(&["art", "cat", "rat", "tar", "tars", "arts", "star"]);
        let mut rng = StdRng::seed_from_u64(1);
        let moves = balanced_moves_with_rng(&all, &mut rng);
        assert_eq!(moves.len(), 5);
        for word in &moves {
            assert!(all.contains(word));
        }
    }

    #[test]
    fn test_balanced_moves_jitter_cannot_flip_large_gaps() {
        // 11 points beats 2 * 1.5 = 3 no matter the jitter.
        let all = words(&["apple", "alphabet"]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let moves = balanced_moves_with_rng(&all, &mut rng);
            assert_eq!(moves[0], "alphabet");
        }
    }

    #[test]
    fn test_balanced_moves_deterministic_under_seed() {
        let all = words(&["art", "cat", "rat", "tar", "tars", "arts"]);
        let first = balanced_moves_with_rng(&all, &mut StdRng::seed_from_u64(9));
        let second = balanced_moves_with_rng(&all, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_estimate_difficulty() {
        // Baseline: short, no rare or repeated letters.
        assert_eq!(estimate_difficulty("cat"), 1.0);
        // "quiz": q and z add 1.0 each.
        assert_eq!(estimate_difficulty("quiz"), 3.0);
        // "banana": 6 letters (+1.0), a and n both repeat (+1.0).
        assert_eq!(estimate_difficulty("banana"), 3.0);
        // "alphabet": 8 letters (+2.0), a repeats (+0.5).
        assert_eq!(estimate_difficulty("alphabet"), 3.5);
    }

    #[test]
    fn test_skilled_moves_scale_with_time() {
        let all = words(&[
            "art", "cat", "rat", "tar", "tars", "arts", "star", "stare", "rates", "aster",
        ]);
        assert_eq!(skilled_moves(&all, 150).len(), 8);
        assert_eq!(skilled_moves(&all, 90).len(), 6);
        assert_eq!(skilled_moves(&all, 30).len(), 4);
        // Never more candidates than words.
        assert_eq!(skilled_moves(&all[..2], 150).len(), 2);
    }

    #[test]
    fn test_skilled_moves_rank_by_score_per_difficulty() {
        // "alphabet": 11 / 3.5 ≈ 3.14; "cat": 1 / 1 = 1.
        let all = words(&["cat", "alphabet"]);
        assert_eq!(skilled_moves(&all, 30), words(&["alphabet", "cat"]));
    }

    #[test]
    fn test_novice_moves_prefer_short_words() {
        let all = words(&["cat", "rat", "tar", "art", "alphabet", "pictures"]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let moves = novice_moves_with_rng(&all, &mut rng);
            assert!(moves.len() <= 3);
            for word in &moves {
                assert!(word.chars().count() <= 5, "picked long word {}", word);
            }
        }
    }

    #[test]
    fn test_novice_moves_fall_back_to_long_words() {
        let all = words(&["alphabet", "pictures"]);
        let mut rng = StdRng::seed_from_u64(3);
        let moves = novice_moves_with_rng(&all, &mut rng);
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_novice_moves_empty_input() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(novice_moves_with_rng(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_score_first_moves_ordering() {
        let all = words(&["cat", "apple", "alphabet", "garden", "rat"]);
        let moves = score_first_moves(&all);
        assert_eq!(
            moves,
            words(&["alphabet", "garden", "apple", "cat", "rat"])
        );
    }

    #[test]
    fn test_score_first_moves_capped_at_six() {
        let all = words(&["aaa", "bbb", "ccc", "ddd", "eee", "fff", "ggg"]);
        assert_eq!(score_first_moves(&all).len(), 6);
    }

    #[test]
    fn test_safe_moves_length_window() {
        let all = words(&["cat", "apple", "alphabet", "rat", "tar", "art", "star"]);
        let moves = safe_moves(&all);
        assert_eq!(moves.len(), 4);
        for word in &moves {
            let len = word.chars().count();
            assert!((3..=5).contains(&len));
        }
    }

    #[test]
    fn test_safe_moves_fall_back_when_window_empty() {
        let all = words(&["alphabet", "pictures"]);
        assert_eq!(safe_moves(&all), all);
    }

    #[test]
    fn test_rare_letter_moves_mix() {
        let all = words(&["quiz", "jazz", "onyx", "cat", "rat", "tar", "art", "star"]);
        let moves = rare_letter_moves(&all);
        assert_eq!(moves.len(), 6);
        let rare_count = moves.iter().filter(|w| contains_rare_letter(w)).count();
        assert_eq!(rare_count, 2);
    }

    #[test]
    fn test_rare_letter_moves_without_rare_words() {
        let all = words(&["cat", "rat", "tar", "art", "star", "arts"]);
        let moves = rare_letter_moves(&all);
        assert_eq!(moves, words(&["cat", "rat", "tar", "art"]));
    }

    #[test]
    fn test_contains_rare_letter() {
        assert!(contains_rare_letter("quiz"));
        assert!(contains_rare_letter("JAZZ"));
        assert!(!contains_rare_letter("cat"));
    }

    #[test]
    fn test_moves_for_profile_dispatch() {
        let all = words(&["cat", "apple", "alphabet", "rat", "tar", "art", "star"]);
        let mut rng = StdRng::seed_from_u64(5);

        for profile in [
            Profile::Novice,
            Profile::Balanced,
            Profile::Skilled,
            Profile::ScoreFirst,
            Profile::Safe,
            Profile::RareLetters,
        ] {
            let moves = moves_for_profile(profile, &all, 90, &mut rng);
            assert!(!moves.is_empty(), "{:?} returned nothing", profile);
            for word in &moves {
                assert!(all.contains(word));
            }
        }
    }

    #[test]
    fn test_analyze_board_scenario() {
        let grid = Grid::parse(&["C A T", "X X X", "X X X"]).unwrap();
        let dictionary = Dictionary::build(["cat", "cats"]);
        let analysis = analyze_board(&grid, &dictionary);

        assert_eq!(analysis.word_count, 1);
        assert_eq!(analysis.total_score, 1);
        assert_eq!(analysis.average_word_length, 3.0);
        assert_eq!(analysis.tile_frequency.get("X"), Some(&6));
        assert_eq!(analysis.tile_frequency.get("C"), Some(&1));

        // density 1/9, length factor 3/5, score factor 1/100, scaled by 10
        let expected = (1.0 / 9.0) * (3.0 / 5.0) * (1.0 / 100.0) * 10.0;
        assert!((analysis.complexity - expected).abs() < 1e-12);
    }

    #[test]
    fn test_analyze_board_wordless() {
        let grid = Grid::parse(&["X X", "X X"]).unwrap();
        let dictionary = Dictionary::build(["cat"]);
        let analysis = analyze_board(&grid, &dictionary);

        assert_eq!(analysis.word_count, 0);
        assert_eq!(analysis.average_word_length, 0.0);
        assert_eq!(analysis.total_score, 0);
        assert_eq!(analysis.complexity, 0.0);
    }
}
