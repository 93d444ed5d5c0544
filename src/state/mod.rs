//! Game state: tile locations, the turn cursor, and the guess history.
//!
//! ## GameState
//!
//! Owns every tile in the game, partitioned over the draw pile, the hands
//! and the table. The state itself is transparent - visibility masking is a
//! view concern, handled by [`view::GameView`]. Strategies never receive
//! `&GameState` directly.
//!
//! ## History
//!
//! Every resolved guess is appended to a persistent history vector. The
//! history is read-only outside the crate; the engine is the only writer.

pub mod deck;
pub mod view;

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::config::GameConfig;
use crate::core::player::{Player, PlayerId};
use crate::core::rng::GameRng;
use crate::core::tile::Tile;

use deck::{DrawPile, Table};
use view::GameView;

/// One resolved guess, as it went into the history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guesser: PlayerId,
    pub target: PlayerId,
    /// Position in the target's hand at resolution time.
    pub index: usize,
    pub guess: Tile,
    pub correct: bool,
}

/// Complete game state.
///
/// Every tile is in exactly one location at any instant: the draw pile, one
/// player's hand, or the table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    draw_pile: DrawPile,
    table: Table,
    players: Vec<Player>,
    turn_cursor: PlayerId,
    history: Vector<GuessRecord>,
}

impl GameState {
    /// Shuffle the complete set and deal starting hands.
    ///
    /// Hands are dealt from the front of the shuffle order, seat by seat;
    /// the remainder becomes the draw pile, drawn from the end.
    #[must_use]
    pub fn deal(config: GameConfig, rng: &mut GameRng) -> Self {
        config.validate();

        let mut tiles = Tile::complete_set(config.max_number);
        rng.shuffle(&mut tiles);

        let mut tiles = tiles.into_iter();
        let players = PlayerId::all(config.player_count)
            .map(|id| Player::new(id, tiles.by_ref().take(config.starting_hand_size)))
            .collect();

        Self {
            draw_pile: DrawPile::new(tiles.collect()),
            table: Table::new(),
            players,
            turn_cursor: PlayerId::new(0),
            history: Vector::new(),
            config,
        }
    }

    /// The configuration this game was dealt from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// A player's hand. Panics on a seat not in the game.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Mutable access to a player's hand. Panics on a seat not in the game.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// All players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Whose turn it is.
    #[must_use]
    pub fn turn_cursor(&self) -> PlayerId {
        self.turn_cursor
    }

    /// Advance the cursor to the next seat, wrapping around.
    pub fn advance_turn(&mut self) {
        let next = (self.turn_cursor.index() + 1) % self.player_count();
        self.turn_cursor = PlayerId::new(next as u8);
    }

    /// Draw the top tile of the pile, or `None` when exhausted.
    pub fn draw(&mut self) -> Option<Tile> {
        self.draw_pile.take()
    }

    /// The undrawn pile.
    #[must_use]
    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    /// Put a drawn tile back on top of the pile (aborted round).
    pub(crate) fn undraw(&mut self, tile: Tile) {
        self.draw_pile.put_back(tile);
    }

    /// The face-up table.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Lay a tile face up on the table.
    ///
    /// Tiles on the table are visible by construction and never return to
    /// hiding.
    pub fn place_on_table(&mut self, tile: Tile) {
        self.table.place(tile);
    }

    /// Every tile identity currently visible anywhere: revealed hand tiles
    /// plus the table.
    ///
    /// Computed fresh from the state on every call; nothing caches it.
    #[must_use]
    pub fn known_tiles(&self) -> FxHashSet<Tile> {
        let mut known: FxHashSet<Tile> = self
            .players
            .iter()
            .flat_map(|p| p.hand())
            .filter(|t| t.is_visible())
            .map(|t| t.tile())
            .collect();
        known.extend(self.table.tiles().iter().copied());
        known
    }

    /// Number of hand tiles still hidden, across all seats.
    #[must_use]
    pub fn hidden_remaining(&self) -> usize {
        self.players.iter().map(Player::hidden_count).sum()
    }

    /// Whether every hand tile has been revealed - no hidden information
    /// remains and no informative guess exists.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.iter().all(Player::is_fully_revealed)
    }

    /// Total tiles across pile, hands and table.
    ///
    /// Equals the complete-set size whenever no round is mid-flight.
    #[must_use]
    pub fn tile_census(&self) -> usize {
        self.draw_pile.len()
            + self.players.iter().map(Player::hand_len).sum::<usize>()
            + self.table.len()
    }

    /// The game as one seat sees it.
    #[must_use]
    pub fn view(&self, viewer: PlayerId) -> GameView<'_> {
        GameView::new(self, viewer)
    }

    /// The guess history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GuessRecord> {
        &self.history
    }

    pub(crate) fn record_guess(&mut self, record: GuessRecord) {
        self.history.push_back(record);
    }
}

impl fmt::Display for GameState {
    /// The public board: every hand masked, then the table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GAME STATE:")?;
        for player in &self.players {
            let labels: Vec<String> = player.hand().iter().map(|t| t.public_label()).collect();
            writeln!(f, "{}: {}", player.id(), labels.join(" "))?;
        }
        let table: Vec<String> = self.table.tiles().iter().map(Tile::to_string).collect();
        writeln!(f, "Table: {}", table.join(" "))
    }
}
