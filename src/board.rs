//! Letter grids and board generation
//!
//! A board is an immutable square matrix of tiles. Generation has two
//! modes: the 16 canonical Boggle dice for 4x4 boards, and a
//! frequency-weighted letter distribution for every other size. A die face
//! of 'Q' materializes as the two-letter "QU" tile in both modes.

use once_cell::sync::Lazy;
use rand::distr::weighted::WeightedIndex;
use rand::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Board size that uses the canonical dice set.
pub const CLASSIC_SIZE: usize = 4;

/// The 16 canonical Boggle die face strings. 'Q' faces become "QU" tiles.
const DICE: [&str; 16] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTU", "DEILRX", "DELRVY", "DISTTY",
    "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ",
];

/// Per-letter sampling weights for non-classic board sizes.
/// Vowels and common consonants are weighted higher; rare letters get 1.
const LETTER_WEIGHTS: [(char, u32); 26] = [
    ('A', 8),
    ('B', 2),
    ('C', 3),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
];

static LETTER_DIST: Lazy<WeightedIndex<u32>> =
    Lazy::new(|| WeightedIndex::new(LETTER_WEIGHTS.iter().map(|&(_, w)| w)).expect("valid weights"));

/// Errors from grid construction. Searches themselves never fail; only
/// caller misuse when building a board is worth signaling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Requested a zero-sized board
    ZeroSize,
    /// Row lengths do not form a square matrix
    NotSquare {
        expected: usize,
        row: usize,
        found: usize,
    },
    /// A tile string was neither a single letter nor "QU"
    InvalidTile { tile: String },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroSize => write!(f, "grid size must be at least 1"),
            GridError::NotSquare {
                expected,
                row,
                found,
            } => write!(
                f,
                "grid is not square: row {} has {} tiles, expected {}",
                row, found, expected
            ),
            GridError::InvalidTile { tile } => write!(f, "invalid tile {:?}", tile),
        }
    }
}

impl std::error::Error for GridError {}

/// The content of one grid cell: a single uppercase letter, or the "QU"
/// digraph die face that occupies one cell but spells two letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Letter(char),
    Qu,
}

impl Tile {
    /// Map a die face letter to its tile ('Q' carries an implicit 'U').
    fn from_face_letter(letter: char) -> Self {
        if letter == 'Q' {
            Tile::Qu
        } else {
            Tile::Letter(letter)
        }
    }

    /// The lowercase characters this tile contributes to a word, in order.
    /// The second entry is only present for the "QU" tile.
    pub(crate) fn chars_lower(&self) -> (char, Option<char>) {
        match self {
            Tile::Letter(c) => (c.to_ascii_lowercase(), None),
            Tile::Qu => ('q', Some('u')),
        }
    }

    /// Number of word characters this tile consumes (1, or 2 for "QU").
    pub fn letter_count(&self) -> usize {
        match self {
            Tile::Letter(_) => 1,
            Tile::Qu => 2,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Letter(c) => write!(f, "{}", c),
            Tile::Qu => write!(f, "QU"),
        }
    }
}

impl FromStr for Tile {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("qu") {
            return Ok(Tile::Qu);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                Ok(Tile::from_face_letter(c.to_ascii_uppercase()))
            }
            _ => Err(GridError::InvalidTile {
                tile: s.to_string(),
            }),
        }
    }
}

/// An immutable square board of letter tiles, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Build a grid from explicit rows of tiles.
    /// Fails unless the rows form a non-empty square matrix.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        let mut tiles = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GridError::NotSquare {
                    expected: size,
                    row: i,
                    found: row.len(),
                });
            }
            tiles.extend(row);
        }
        Ok(Grid { size, tiles })
    }

    /// Parse a grid from rows of whitespace-separated tile strings,
    /// e.g. `&["C A T", "QU I X", "E R S"]`.
    pub fn parse(rows: &[&str]) -> Result<Self, GridError> {
        let rows = rows
            .iter()
            .map(|row| row.split_whitespace().map(Tile::from_str).collect())
            .collect::<Result<Vec<Vec<Tile>>, GridError>>()?;
        Self::from_rows(rows)
    }

    /// Generate a random board of the given size.
    pub fn generate(size: usize) -> Result<Self, GridError> {
        Self::generate_with_rng(size, &mut rand::rng())
    }

    /// Generate a random board using a specific RNG (for testing/seeding).
    ///
    /// Size 4 shuffles the canonical dice and rolls one face per cell;
    /// every other size samples each cell independently from the weighted
    /// letter distribution.
    pub fn generate_with_rng<R: Rng>(size: usize, rng: &mut R) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }

        let tiles = if size == CLASSIC_SIZE {
            let mut dice = DICE;
            dice.shuffle(rng);
            dice.iter()
                .map(|die| {
                    let face = die.chars().choose(rng).expect("die face is non-empty");
                    Tile::from_face_letter(face)
                })
                .collect()
        } else {
            (0..size * size)
                .map(|_| {
                    let (letter, _) = LETTER_WEIGHTS[LETTER_DIST.sample(rng)];
                    Tile::from_face_letter(letter)
                })
                .collect()
        };

        Ok(Grid { size, tiles })
    }

    /// Side length of the square board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// The tile at (row, col), or `None` when out of bounds.
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        if row < self.size && col < self.size {
            Some(&self.tiles[row * self.size + col])
        } else {
            None
        }
    }

    /// Iterate tiles with their (row, col) coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Tile)> {
        let size = self.size;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| ((i / size, i % size), tile))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.tiles[row * self.size + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
