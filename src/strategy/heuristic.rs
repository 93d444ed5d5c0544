//! The automated player.
//!
//! ## Decision procedure
//!
//! 1. Candidates: every tile value not visible anywhere and not the drawn
//!    tile.
//! 2. Target the opponent with the most hidden tiles (ties to the lowest
//!    seat).
//! 3. Split the target's hand at its midpoint. Hands are sorted, so
//!    position correlates with value: whichever half hides more tiles tells
//!    us where the information is.
//! 4. Aim at the lowest hidden slot and sample low values, or the highest
//!    hidden slot and sample high values.
//! 5. Sample from candidates of the aimed slot's color, rank `i` from the
//!    preferred end weighted `e^(-i)` - a strict preference for the extreme
//!    that still reaches every candidate.
//!
//! Optional guesses always decline; one guess per turn keeps the strategy
//! simple. Chaining is left to stronger implementations of the trait.

use std::cmp::Reverse;

use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::tile::Tile;
use crate::state::view::{GameView, SlotView};

use super::{Guess, Strategy};

/// Heuristic automated strategy with its own sampling stream.
#[derive(Clone, Debug)]
pub struct HeuristicStrategy {
    rng: GameRng,
}

impl HeuristicStrategy {
    /// Create a strategy drawing from the given sampling stream.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// The opponent with the most hidden tiles; ties go to the lowest seat.
    fn pick_target(view: &GameView<'_>) -> Option<PlayerId> {
        let mut best: Option<(PlayerId, usize)> = None;
        for opponent in view.opponents() {
            let hidden = view.hidden_count(opponent);
            if best.map_or(true, |(_, most)| hidden > most) {
                best = Some((opponent, hidden));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Sample one tile from `pool` (ordered from the preferred end) with
    /// weight `e^(-rank)`.
    fn sample(&mut self, pool: &[Tile]) -> Option<Tile> {
        let weights: Vec<f32> = (0..pool.len()).map(|i| (-(i as f32)).exp()).collect();
        self.rng.choose_weighted(&weights).map(|i| pool[i])
    }
}

impl Strategy for HeuristicStrategy {
    fn propose_guess(
        &mut self,
        view: &GameView<'_>,
        drawn: Option<Tile>,
        optional: bool,
    ) -> Option<Guess> {
        if optional {
            return None;
        }

        let candidates = view.candidate_tiles(drawn);

        let target = Self::pick_target(view)?;
        let hand: Vec<SlotView> = view.slots(target).collect();

        let mid = hand.len() / 2;
        let hidden = |slots: &[SlotView]| slots.iter().filter(|s| !s.visible).count();
        let prefer_low = hidden(&hand[..mid]) > hidden(&hand[mid..]);

        // Aim at a hidden slot on the preferred end; if every slot is
        // already visible the guess is doomed, but still must be made.
        let (index, slot) = if prefer_low {
            hand.iter()
                .copied()
                .enumerate()
                .min_by_key(|(i, s)| (s.visible, *i))?
        } else {
            hand.iter()
                .copied()
                .enumerate()
                .min_by_key(|(i, s)| (s.visible, Reverse(*i)))?
        };

        let mut pool: Vec<Tile> = candidates
            .iter()
            .copied()
            .filter(|t| t.color() == slot.color)
            .collect();
        if pool.is_empty() {
            // Only reachable when the aimed slot is already visible: a
            // hidden slot always contributes its own value to its color
            // pool. Fall back to the full candidate list.
            pool = candidates;
        }
        if !prefer_low {
            pool.reverse();
        }

        let tile = self.sample(&pool)?;
        Some(Guess { target, index, tile })
    }
}
