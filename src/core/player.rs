//! Player identification and hands.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting up to 255 players. Stable for the
//! game's lifetime.
//!
//! ## Player
//!
//! A seat's hand: a small sorted sequence of [`HandTile`]s. The hand is
//! re-sorted after every insertion, so position correlates with tile value -
//! the heuristic strategy leans on that. Guess resolution
//! ([`Player::resolve_guess`]) is the only way another player's action
//! mutates a hand.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::EngineError;
use super::tile::{HandTile, Tile};

/// Seat identifier. Seat indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seat and its hand.
///
/// Hands are small (a starting hand plus tiles gained on failed guesses),
/// so they live inline up to 8 tiles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    hand: SmallVec<[HandTile; 8]>,
}

impl Player {
    /// Create a player holding `tiles`, all hidden, sorted.
    #[must_use]
    pub fn new(id: PlayerId, tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut player = Self {
            id,
            hand: SmallVec::new(),
        };
        for tile in tiles {
            player.insert(HandTile::hidden(tile));
        }
        player
    }

    /// The seat this hand belongs to.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// The hand, sorted by tile order.
    #[must_use]
    pub fn hand(&self) -> &[HandTile] {
        &self.hand
    }

    /// Number of tiles in the hand.
    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Number of hand tiles still hidden.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.hand.iter().filter(|t| !t.is_visible()).count()
    }

    /// Whether every tile in the hand has been revealed.
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.hand.iter().all(HandTile::is_visible)
    }

    /// Gain a tile without revealing it (a declined optional guess).
    pub fn insert_hidden(&mut self, tile: Tile) {
        self.insert(HandTile::hidden(tile));
    }

    /// Gain a tile face up (the penalty for a failed guess).
    pub fn insert_revealed(&mut self, tile: Tile) {
        self.insert(HandTile::revealed(tile));
    }

    fn insert(&mut self, slot: HandTile) {
        self.hand.push(slot);
        self.hand.sort_by_key(HandTile::tile);
    }

    /// Resolve an incoming guess against this hand.
    ///
    /// Compares the indexed tile's identity to `guess`; on a match the tile
    /// is revealed and `true` is returned, otherwise `false` with no side
    /// effect. Resolving an already-revealed tile with its correct identity
    /// yields `true` again - a stable query.
    ///
    /// An out-of-range index is a caller contract violation.
    pub fn resolve_guess(&mut self, index: usize, guess: Tile) -> Result<bool, EngineError> {
        let hand_len = self.hand.len();
        let slot = self.hand.get_mut(index).ok_or(EngineError::InvalidIndex {
            player: self.id,
            index,
            hand_len,
        })?;

        if slot.tile() == guess {
            slot.reveal();
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
