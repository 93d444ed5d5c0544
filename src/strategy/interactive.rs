//! Human seat, behind a prompt port.
//!
//! The core never talks to a terminal or a dialog box. It depends on one
//! narrow port: ask a question, hand over the allowed answers, receive one
//! of them back. Validated retry on bad input is the port's obligation -
//! whatever reaches the engine is already a member of the allowed set, so a
//! human can never trip the engine's contract errors by typo.

use crate::core::player::PlayerId;
use crate::core::tile::Tile;
use crate::state::view::GameView;

use super::{Guess, Strategy};

/// Answer sentinel for declining an optional guess.
const DECLINE: &str = "-1";

/// The input boundary.
///
/// `prompt` must return a member of `allowed`, re-asking as many times as it
/// takes. The mechanism (stdin, dialog, network) is the implementor's
/// business.
pub trait PromptPort {
    fn prompt(&mut self, question: &str, allowed: &[String]) -> String;
}

/// A seat driven by prompts: pick an opponent, a tile position, a tile
/// encoding.
#[derive(Clone, Debug)]
pub struct InteractiveStrategy<P> {
    port: P,
}

impl<P: PromptPort> InteractiveStrategy<P> {
    /// Create an interactive seat over the given port.
    #[must_use]
    pub fn new(port: P) -> Self {
        Self { port }
    }
}

impl<P: PromptPort> Strategy for InteractiveStrategy<P> {
    fn propose_guess(
        &mut self,
        view: &GameView<'_>,
        _drawn: Option<Tile>,
        optional: bool,
    ) -> Option<Guess> {
        // Opponent seat, by number.
        let mut allowed: Vec<String> = view.opponents().map(|p| p.index().to_string()).collect();
        let question = if optional {
            "Of which player do you want to guess a tile? (-1 to stop guessing)"
        } else {
            "Of which player do you want to guess a tile?"
        };
        if optional {
            allowed.push(DECLINE.to_string());
        }
        let answer = self.port.prompt(question, &allowed);
        if optional && answer == DECLINE {
            return None;
        }
        let target = view.opponents().find(|p| p.index().to_string() == answer)?;

        // Tile position, 1-based as players count them.
        let hand_len = view.hand_len(target);
        let allowed: Vec<String> = (1..=hand_len).map(|i| i.to_string()).collect();
        let answer = self
            .port
            .prompt("What is the position of the tile? (starting at 1)", &allowed);
        let index = (0..hand_len).find(|i| (i + 1).to_string() == answer)?;

        // The claimed tile.
        let allowed: Vec<String> = Tile::complete_set(view.max_number())
            .iter()
            .map(Tile::to_string)
            .collect();
        let answer = self
            .port
            .prompt("Which tile do you think it is? (e.g. b1 or w6)", &allowed);
        let tile = answer.parse().ok()?;

        Some(Guess { target, index, tile })
    }
}
