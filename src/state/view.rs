//! Per-seat views of the game.
//!
//! Strategies decide from a [`GameView`], never from `&GameState`: the view
//! exposes exactly what the viewing seat is entitled to know. Hand tile
//! colors, visibility flags and counts are public; numbers of other seats'
//! tiles appear only once revealed.
//!
//! The view also builds the [`EpistemicSnapshot`] consumed by external
//! possible-worlds tooling.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::core::tile::{Color, Tile};

use super::GameState;

/// What one seat sees of a single hand slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotView {
    /// Tile color - public for every slot.
    pub color: Color,
    /// Whether the tile has been revealed to everyone.
    pub visible: bool,
    /// Full identity, present for revealed tiles and the viewer's own hand.
    pub tile: Option<Tile>,
}

/// A read-only, visibility-masked view of the game for one seat.
#[derive(Clone, Copy)]
pub struct GameView<'a> {
    state: &'a GameState,
    viewer: PlayerId,
}

impl<'a> GameView<'a> {
    pub(crate) fn new(state: &'a GameState, viewer: PlayerId) -> Self {
        assert!(
            viewer.index() < state.player_count(),
            "Viewer is not seated in this game"
        );
        Self { state, viewer }
    }

    /// The seat this view belongs to.
    #[must_use]
    pub fn viewer(&self) -> PlayerId {
        self.viewer
    }

    /// Highest tile number in play.
    #[must_use]
    pub fn max_number(&self) -> u8 {
        self.state.config().max_number
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    /// Every seat except the viewer, in seat order.
    pub fn opponents(&self) -> impl Iterator<Item = PlayerId> + 'a {
        let viewer = self.viewer;
        PlayerId::all(self.state.player_count()).filter(move |p| *p != viewer)
    }

    /// Hand size of a seat.
    #[must_use]
    pub fn hand_len(&self, player: PlayerId) -> usize {
        self.state.player(player).hand_len()
    }

    /// Hidden-tile count of a seat.
    #[must_use]
    pub fn hidden_count(&self, player: PlayerId) -> usize {
        self.state.player(player).hidden_count()
    }

    /// A seat's hand as the viewer sees it, in hand order.
    pub fn slots(&self, player: PlayerId) -> impl Iterator<Item = SlotView> + 'a {
        let viewer_owns = player == self.viewer;
        self.state.player(player).hand().iter().map(move |slot| SlotView {
            color: slot.tile().color(),
            visible: slot.is_visible(),
            tile: (slot.is_visible() || viewer_owns).then(|| slot.tile()),
        })
    }

    /// Every tile identity visible anywhere.
    #[must_use]
    pub fn known_tiles(&self) -> FxHashSet<Tile> {
        self.state.known_tiles()
    }

    /// The maximal set of guessable values consistent with public knowledge:
    /// the complete set minus everything visible minus the drawn tile.
    /// Ascending tile order.
    #[must_use]
    pub fn candidate_tiles(&self, drawn: Option<Tile>) -> Vec<Tile> {
        let known = self.known_tiles();
        Tile::complete_set(self.max_number())
            .into_iter()
            .filter(|t| !known.contains(t) && Some(*t) != drawn)
            .collect()
    }

    /// Build the snapshot handed to external possible-worlds tooling.
    #[must_use]
    pub fn snapshot(&self) -> EpistemicSnapshot {
        let hands = self
            .state
            .players()
            .iter()
            .map(|player| {
                player
                    .hand()
                    .iter()
                    .map(|slot| {
                        if player.id() == self.viewer {
                            slot.tile().to_string()
                        } else {
                            slot.public_label()
                        }
                    })
                    .collect()
            })
            .collect();

        EpistemicSnapshot {
            hands,
            table: self.state.table().tiles().iter().map(Tile::to_string).collect(),
            max_number: self.max_number(),
        }
    }
}

/// Snapshot of one seat's knowledge, for external epistemic analysis.
///
/// The viewer's own hand is rendered by true identity (`b1`); other hands
/// are visibility-qualified (`b1` once revealed, `b?` while hidden).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpistemicSnapshot {
    /// One entry per seat, in seat order.
    pub hands: Vec<Vec<String>>,
    /// Face-up table tiles.
    pub table: Vec<String>,
    /// Highest tile number in play.
    pub max_number: u8,
}
