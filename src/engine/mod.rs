//! The turn engine: one round of the guess protocol per call.
//!
//! ## Round state machine
//!
//! Draw, then a mandatory guess, then - while guesses keep landing - an
//! optional guess chain, then resolution:
//!
//! - an incorrect guess reveals the drawn tile into the guesser's hand and
//!   ends the round (the information-leak rule: the drawn tile is exposed
//!   even though it was never guessed at);
//! - declining an optional guess banks the drawn tile hidden;
//! - an exhausted pile changes nothing except that there is no tile to
//!   place.
//!
//! The engine owns the strategies and validates every guess before
//! resolution; strategies only ever see a masked
//! [`GameView`](crate::state::view::GameView). Contract violations abort the
//! round without advancing the cursor.
//!
//! ## Construction
//!
//! [`GameBuilder`] pairs seat strategies with a configuration and one seed:
//!
//! ```
//! use tile_guess::engine::GameBuilder;
//!
//! let (mut engine, mut state) = GameBuilder::new()
//!     .heuristic_seats(3)
//!     .build(42);
//! let summary = engine.play_round(&mut state).unwrap();
//! assert_eq!(summary.guesser.index(), 0);
//! ```

pub mod observer;

use log::{debug, info};

use crate::core::config::GameConfig;
use crate::core::error::EngineError;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::tile::Tile;
use crate::state::{GameState, GuessRecord};
use crate::strategy::{Guess, HeuristicStrategy, Strategy};

pub use observer::GameObserver;

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundEnding {
    /// A guess missed; the drawn tile (if any) went to the guesser face up.
    Incorrect,
    /// The guesser stopped after at least one correct guess; the drawn tile
    /// (if any) joined their hand hidden.
    Declined,
}

/// What happened in one completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub guesser: PlayerId,
    /// The tile drawn this round, `None` once the pile is exhausted.
    pub drawn: Option<Tile>,
    /// Correct guesses made before the round ended.
    pub correct_guesses: usize,
    pub ending: RoundEnding,
}

enum Seat {
    Heuristic,
    Custom(Box<dyn Strategy>),
}

/// Builder pairing seats with configuration.
///
/// Seats are added in turn order. `build` derives every randomness stream
/// (the shuffle and each heuristic seat's sampling) from the one seed, so a
/// seed reproduces the whole game.
#[derive(Default)]
pub struct GameBuilder {
    seats: Vec<Seat>,
    starting_hand_size: Option<usize>,
    max_number: Option<u8>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` automated seats.
    #[must_use]
    pub fn heuristic_seats(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.seats.push(Seat::Heuristic);
        }
        self
    }

    /// Add one seat with a custom strategy (an interactive seat, a test
    /// script, a stronger bot).
    #[must_use]
    pub fn seat(mut self, strategy: Box<dyn Strategy>) -> Self {
        self.seats.push(Seat::Custom(strategy));
        self
    }

    /// Tiles dealt to each seat.
    #[must_use]
    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = Some(size);
        self
    }

    /// Highest tile number.
    #[must_use]
    pub fn max_number(mut self, max_number: u8) -> Self {
        self.max_number = Some(max_number);
        self
    }

    /// Deal the game and wire up the strategies.
    pub fn build(self, seed: u64) -> (GameEngine, GameState) {
        let mut config = GameConfig::new(self.seats.len());
        if let Some(size) = self.starting_hand_size {
            config = config.with_starting_hand_size(size);
        }
        if let Some(max) = self.max_number {
            config = config.with_max_number(max);
        }

        let root = GameRng::new(seed);
        let state = GameState::deal(config.clone(), &mut root.for_context("shuffle"));

        let strategies = self
            .seats
            .into_iter()
            .enumerate()
            .map(|(seat, kind)| match kind {
                Seat::Heuristic => Box::new(HeuristicStrategy::new(
                    root.for_context(&format!("sampling/{seat}")),
                )) as Box<dyn Strategy>,
                Seat::Custom(strategy) => strategy,
            })
            .collect();

        let engine = GameEngine {
            config,
            strategies,
            observers: Vec::new(),
        };
        (engine, state)
    }
}

/// Runs the turn state machine over a [`GameState`].
pub struct GameEngine {
    config: GameConfig,
    strategies: Vec<Box<dyn Strategy>>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// The configuration the game was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Attach an observer. Observers only ever add output.
    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Play one round for the cursor seat, then advance the cursor.
    ///
    /// Returns `GameOver` once every hand tile is revealed. Contract
    /// violations (`InvalidTarget`, `InvalidIndex`, `IllegalDecline`) abort
    /// the round before resolution; the drawn tile returns to the pile and
    /// the cursor stays put.
    pub fn play_round(&mut self, state: &mut GameState) -> Result<RoundSummary, EngineError> {
        if state.is_over() {
            return Err(EngineError::GameOver);
        }

        let guesser = state.turn_cursor();
        let drawn = state.draw();
        debug!(
            "{} draws ({} tiles left in the pile)",
            guesser,
            state.draw_pile().len()
        );
        for observer in &mut self.observers {
            observer.draw_state(state, drawn);
        }

        let mut correct_guesses = 0usize;
        loop {
            let optional = correct_guesses > 0;
            let decision = {
                let view = state.view(guesser);
                self.strategies[guesser.index()].propose_guess(&view, drawn, optional)
            };

            let Some(guess) = decision else {
                if !optional {
                    if let Some(tile) = drawn {
                        state.undraw(tile);
                    }
                    return Err(EngineError::IllegalDecline { player: guesser });
                }
                if let Some(tile) = drawn {
                    state.player_mut(guesser).insert_hidden(tile);
                }
                self.emit(&format!("{guesser} stops guessing"));
                info!("{guesser} ends the round after {correct_guesses} correct guesses");
                state.advance_turn();
                return Ok(RoundSummary {
                    guesser,
                    drawn,
                    correct_guesses,
                    ending: RoundEnding::Declined,
                });
            };

            if let Err(violation) = self.validate(state, guesser, &guess) {
                if let Some(tile) = drawn {
                    state.undraw(tile);
                }
                return Err(violation);
            }
            self.emit(&format!(
                "{} guesses that tile {} of {} is {}",
                guesser,
                guess.index + 1,
                guess.target,
                guess.tile
            ));

            let correct = state
                .player_mut(guess.target)
                .resolve_guess(guess.index, guess.tile)?;
            state.record_guess(GuessRecord {
                guesser,
                target: guess.target,
                index: guess.index,
                guess: guess.tile,
                correct,
            });

            if correct {
                correct_guesses += 1;
                self.emit(&format!("{} confirms the guess", guess.target));
                continue;
            }

            self.emit(&format!("{} denies the guess", guess.target));
            if let Some(tile) = drawn {
                state.player_mut(guesser).insert_revealed(tile);
                self.emit(&format!("{guesser} shows the drawn tile {tile}"));
            }
            info!("{guesser} ends the round after {correct_guesses} correct guesses");
            state.advance_turn();
            return Ok(RoundSummary {
                guesser,
                drawn,
                correct_guesses,
                ending: RoundEnding::Incorrect,
            });
        }
    }

    /// Raise contract violations before a guess ever reaches a hand.
    fn validate(
        &self,
        state: &GameState,
        guesser: PlayerId,
        guess: &Guess,
    ) -> Result<(), EngineError> {
        if guess.target == guesser || guess.target.index() >= state.player_count() {
            return Err(EngineError::InvalidTarget {
                guesser,
                target: guess.target,
            });
        }
        let hand_len = state.player(guess.target).hand_len();
        if guess.index >= hand_len {
            return Err(EngineError::InvalidIndex {
                player: guess.target,
                index: guess.index,
                hand_len,
            });
        }
        Ok(())
    }

    fn emit(&mut self, text: &str) {
        debug!("{text}");
        for observer in &mut self.observers {
            observer.line(text);
        }
    }
}
