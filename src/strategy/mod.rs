//! Player decision capabilities.
//!
//! A [`Strategy`] decides whom and what to guess; it never touches game
//! state directly. The engine owns one strategy per seat, hands it a masked
//! [`GameView`], and validates every returned guess before resolution - a
//! strategy bug surfaces as a typed error, not silent corruption.
//!
//! Implementations:
//! - [`HeuristicStrategy`]: the automated player
//! - [`InteractiveStrategy`]: adapter over a validated prompt port
//!
//! New strategies are added by implementing the trait, never by branching on
//! a kind tag.

pub mod heuristic;
pub mod interactive;

use crate::core::player::PlayerId;
use crate::core::tile::Tile;
use crate::state::view::GameView;

pub use heuristic::HeuristicStrategy;
pub use interactive::{InteractiveStrategy, PromptPort};

/// A proposed guess: which seat, which hand position, which tile value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guess {
    /// The seat being guessed against. Never the guesser's own.
    pub target: PlayerId,
    /// Position in the target's hand, 0-based.
    pub index: usize,
    /// The claimed tile identity.
    pub tile: Tile,
}

/// A seat's decision capability.
pub trait Strategy {
    /// Propose a guess, or decline with `None`.
    ///
    /// Declining is legal only when `optional` is true (the guesser has
    /// already been right at least once this round). A well-behaved
    /// strategy never targets the viewer's own seat and never proposes a
    /// value that is visible anywhere or equal to `drawn` - such a guess is
    /// provably non-informative or definitely wrong.
    fn propose_guess(
        &mut self,
        view: &GameView<'_>,
        drawn: Option<Tile>,
        optional: bool,
    ) -> Option<Guess>;
}
