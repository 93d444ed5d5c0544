//! The undrawn pool and the face-up table.

use serde::{Deserialize, Serialize};

use crate::core::tile::Tile;

/// The shuffled pool of undrawn tiles.
///
/// Order is shuffle order; tiles come off the end. An empty pile is a
/// legitimate terminal condition, not an error - `take` signals it with
/// `None` and play continues with no tile to place.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DrawPile {
    tiles: Vec<Tile>,
}

impl DrawPile {
    /// Create a pile from already-shuffled tiles.
    #[must_use]
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Remove and return the top tile, or `None` when the pile is empty.
    pub fn take(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Return a taken tile to the top of the pile.
    ///
    /// Used when a round aborts after drawing: the tile goes back exactly
    /// where it came from, keeping the tile census intact.
    pub fn put_back(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// The undrawn tiles, bottom first; the next draw comes off the end.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of undrawn tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the pile is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Tiles lying face up on the table.
///
/// Everything here is visible by construction; tiles never leave.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Table {
    tiles: Vec<Tile>,
}

impl Table {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay a tile face up.
    pub fn place(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// The face-up tiles, in the order they were placed.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of face-up tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
