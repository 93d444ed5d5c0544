//! Game configuration.
//!
//! The engine never hardcodes table sizes - seat count, starting hand size
//! and the tile number range are all configured here. Strategy selection per
//! seat lives on the builder in `engine`, since strategies are behavior, not
//! data.

use serde::{Deserialize, Serialize};

use super::tile::Color;

/// Complete game configuration.
///
/// Defaults match the classic setup: 3 seats, 4 starting tiles, numbers up
/// to 6 - which deals out the entire tile set and starts with an empty draw
/// pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (2-255).
    pub player_count: usize,

    /// Tiles dealt to each seat at game start.
    pub starting_hand_size: usize,

    /// Highest tile number; the set is all colors crossed with
    /// `1..=max_number`.
    pub max_number: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 3,
            starting_hand_size: 4,
            max_number: 6,
        }
    }
}

impl GameConfig {
    /// Create a configuration for `player_count` seats with default hand
    /// size and number range.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count >= 2, "Must have at least 2 players");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        assert!(size >= 1, "Starting hands cannot be empty");
        self.starting_hand_size = size;
        self
    }

    /// Set the highest tile number.
    #[must_use]
    pub fn with_max_number(mut self, max_number: u8) -> Self {
        assert!(max_number >= 1, "Tile numbers start at 1");
        self.max_number = max_number;
        self
    }

    /// Size of the complete tile set for this configuration.
    #[must_use]
    pub fn tile_set_size(&self) -> usize {
        Color::ALL.len() * self.max_number as usize
    }

    /// Assert the configuration can actually be dealt.
    ///
    /// Cross-field check, run when a game is built rather than on every
    /// setter so fields can be adjusted in any order.
    pub fn validate(&self) {
        assert!(
            self.player_count * self.starting_hand_size <= self.tile_set_size(),
            "Starting hands exceed the tile set"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deals_whole_set() {
        let config = GameConfig::default();
        assert_eq!(config.tile_set_size(), 12);
        assert_eq!(config.player_count * config.starting_hand_size, 12);
        config.validate();
    }

    #[test]
    fn test_builder_methods() {
        let config = GameConfig::new(2)
            .with_starting_hand_size(2)
            .with_max_number(3);

        assert_eq!(config.player_count, 2);
        assert_eq!(config.starting_hand_size, 2);
        assert_eq!(config.tile_set_size(), 6);
        config.validate();
    }

    #[test]
    #[should_panic(expected = "Must have at least 2 players")]
    fn test_single_player_rejected() {
        GameConfig::new(1);
    }

    #[test]
    #[should_panic(expected = "Starting hands exceed the tile set")]
    fn test_overcommitted_deal_rejected() {
        GameConfig::new(4).with_max_number(2).validate();
    }

    #[test]
    fn test_serde_round_trip() {
        let config = GameConfig::new(2).with_starting_hand_size(2).with_max_number(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
