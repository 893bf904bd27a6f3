//! Game configuration.
//!
//! Embedders configure the round count and seat labels at construction.
//! The scoring rule itself is fixed and not configurable.

use serde::{Deserialize, Serialize};

use super::player::{Seat, SeatMap};

/// Default number of rounds in a game.
pub const DEFAULT_ROUNDS: u32 = 3;

/// Configuration for a duel.
///
/// ```
/// use dice_duel::core::{GameConfig, Seat};
///
/// let config = GameConfig::new()
///     .with_rounds(5)
///     .with_name(Seat::Player, "Alice");
///
/// assert_eq!(config.rounds, 5);
/// assert_eq!(config.names[Seat::Player], "Alice");
/// assert_eq!(config.names[Seat::Computer], "Computer");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rounds in a game. At least 1.
    pub rounds: u32,

    /// Display names for the two seats.
    pub names: SeatMap<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            names: SeatMap::new(|seat| seat.default_name().to_string()),
        }
    }
}

impl GameConfig {
    /// Create the default configuration: 3 rounds, default seat labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds.
    ///
    /// ## Panics
    ///
    /// Panics if `rounds` is 0.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds >= 1, "Game must have at least 1 round");
        self.rounds = rounds;
        self
    }

    /// Set the display name for a seat.
    #[must_use]
    pub fn with_name(mut self, seat: Seat, name: impl Into<String>) -> Self {
        self.names[seat] = name.into();
        self
    }
}
