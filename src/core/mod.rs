//! Core types: tiles, players, RNG, configuration, errors.
//!
//! This module contains the fundamental building blocks the rest of the
//! engine is assembled from. Nothing here knows about the turn protocol.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod tile;

pub use config::GameConfig;
pub use error::EngineError;
pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use tile::{Color, HandTile, ParseTileError, Tile};
