//! Tile identity and visibility.
//!
//! ## Tile
//!
//! A tile is a `(color, number)` pair - the game's unit of hidden
//! information. Tiles are plain `Copy` values; equality and hashing use the
//! full pair, and the total order is `(number, color)`, which is the order
//! hands are kept sorted in.
//!
//! ## HandTile
//!
//! A tile held in a hand, together with its visibility flag. Visibility is
//! monotonic: `reveal` is the only mutator and it never unsets the flag.
//!
//! ## Encoding
//!
//! Tiles display as `b3` or `w6` (color code, then number). `FromStr`
//! accepts exactly that encoding.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tile color. The color set is fixed; the number range is configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// All colors, in order.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Single-character encoding used in tile labels.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::Black => 'b',
            Color::White => 'w',
        }
    }

    /// Parse a color code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Color::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A tile identity: color plus number.
///
/// The complete set for a game is the cross product of all colors and
/// numbers `1..=max_number`; every value occurs exactly once per game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    color: Color,
    number: u8,
}

impl Tile {
    /// Create a tile. Numbers start at 1.
    #[must_use]
    pub fn new(color: Color, number: u8) -> Self {
        assert!(number >= 1, "Tile numbers start at 1");
        Self { color, number }
    }

    /// The tile's color. Colors of hand tiles are public knowledge.
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// The tile's number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.number
    }

    /// The full tile set for the given number range, unshuffled, in sorted
    /// order.
    #[must_use]
    pub fn complete_set(max_number: u8) -> Vec<Tile> {
        let mut set = Vec::with_capacity(Color::ALL.len() * max_number as usize);
        for number in 1..=max_number {
            for color in Color::ALL {
                set.push(Tile::new(color, number));
            }
        }
        set
    }
}

// Hands sort by number first, so a sorted hand reads low to high.
impl Ord for Tile {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.number, self.color).cmp(&(other.number, other.color))
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color, self.number)
    }
}

/// Error parsing a tile encoding like `b3`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseTileError {
    #[error("empty tile encoding")]
    Empty,
    #[error("unknown color code `{0}`")]
    UnknownColor(char),
    #[error("invalid tile number in `{0}`")]
    BadNumber(String),
}

impl FromStr for Tile {
    type Err = ParseTileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let code = chars.next().ok_or(ParseTileError::Empty)?;
        let color = Color::from_code(code).ok_or(ParseTileError::UnknownColor(code))?;
        let number: u8 = chars
            .as_str()
            .parse()
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| ParseTileError::BadNumber(s.to_string()))?;
        Ok(Tile { color, number })
    }
}

/// A tile in a hand, with its visibility flag.
///
/// Visibility only ever goes hidden -> visible.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HandTile {
    tile: Tile,
    visible: bool,
}

impl HandTile {
    /// A freshly dealt or quietly gained tile.
    #[must_use]
    pub const fn hidden(tile: Tile) -> Self {
        Self { tile, visible: false }
    }

    /// A tile entering the hand face up (a revealed drawn tile).
    #[must_use]
    pub const fn revealed(tile: Tile) -> Self {
        Self { tile, visible: true }
    }

    /// The underlying tile identity.
    #[must_use]
    pub const fn tile(&self) -> Tile {
        self.tile
    }

    /// Whether the tile is visible to everyone.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Make the tile visible. Irreversible.
    pub fn reveal(&mut self) {
        self.visible = true;
    }

    /// What any other player sees: `b3` when visible, `b?` when hidden.
    /// The color side of a tile is never secret.
    #[must_use]
    pub fn public_label(&self) -> String {
        if self.visible {
            self.tile.to_string()
        } else {
            format!("{}?", self.tile.color())
        }
    }
}
