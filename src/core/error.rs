//! Engine error taxonomy.
//!
//! Contract violations are raised synchronously by the engine before a guess
//! is ever resolved, and are fatal to the round - the engine never retries
//! them. An interactive boundary may retry by re-prompting, but only before
//! submitting to the engine.
//!
//! An exhausted draw pile is deliberately *not* in this taxonomy: it is a
//! legitimate terminal condition, signalled by `DrawPile::take` returning
//! `None`.

use thiserror::Error;

use super::player::PlayerId;

/// Errors raised by the turn engine and guess resolution.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A guess targeted the guesser's own seat or a seat not in the game.
    #[error("{guesser} cannot guess against {target}")]
    InvalidTarget { guesser: PlayerId, target: PlayerId },

    /// A guess indexed outside the target's hand.
    #[error("tile index {index} is out of bounds for {player} (hand size {hand_len})")]
    InvalidIndex {
        player: PlayerId,
        index: usize,
        hand_len: usize,
    },

    /// A strategy declined the mandatory guess.
    #[error("{player} declined the mandatory guess")]
    IllegalDecline { player: PlayerId },

    /// A round was requested after every tile had been revealed.
    #[error("every tile is already revealed")]
    GameOver,
}
