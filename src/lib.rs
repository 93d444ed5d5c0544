//! # tile-guess
//!
//! A turn-based engine for a hidden-information tile guessing game.
//!
//! Each player holds a private, sorted hand of color+number tiles. A round
//! is: draw a tile, make one mandatory guess at a tile in an opponent's
//! hand, then keep guessing for as long as the guesses land. The first miss
//! reveals the drawn tile and hands it to the guesser; stopping voluntarily
//! banks it hidden. Correct deduction is self-reinforcing - a sharp guesser
//! can clear many facts in one turn - and every miss leaks information.
//!
//! ## Design Principles
//!
//! 1. **Views, not state**: strategies decide from a visibility-masked
//!    [`GameView`](state::view::GameView); only the engine mutates state.
//!
//! 2. **Deterministic by seed**: one build seed derives independent streams
//!    for the shuffle and every heuristic seat, so whole games replay.
//!
//! 3. **Strategies are a capability**: new players implement
//!    [`Strategy`](strategy::Strategy); nothing branches on a player kind.
//!
//! ## Modules
//!
//! - `core`: tiles, players, RNG, configuration, errors
//! - `state`: tile locations, views, the guess history
//! - `strategy`: the decision trait, the heuristic player, the prompt-port
//!   adapter for humans
//! - `engine`: the round state machine and game builder

pub mod core;
pub mod engine;
pub mod state;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{Color, EngineError, GameConfig, GameRng, HandTile, Player, PlayerId, Tile};

pub use crate::state::{
    deck::{DrawPile, Table},
    view::{EpistemicSnapshot, GameView, SlotView},
    GameState, GuessRecord,
};

pub use crate::strategy::{Guess, HeuristicStrategy, InteractiveStrategy, PromptPort, Strategy};

pub use crate::engine::{GameBuilder, GameEngine, GameObserver, RoundEnding, RoundSummary};
