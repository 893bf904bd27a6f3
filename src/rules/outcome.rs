//! Winner determination for rounds and games.
//!
//! Both are the same comparison: strictly greater score wins, equal is a
//! draw. Round outcomes are informational; only cumulative totals decide
//! the game.

use serde::{Deserialize, Serialize};

use crate::core::player::Seat;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Single winner.
    Winner(Seat),
    /// Equal totals.
    Draw,
}

impl Outcome {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(self, seat: Seat) -> bool {
        self == Outcome::Winner(seat)
    }

    /// Whether the game was drawn.
    #[must_use]
    pub fn is_draw(self) -> bool {
        self == Outcome::Draw
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(seat) => write!(f, "{} wins", seat),
            Outcome::Draw => f.write_str("Draw"),
        }
    }
}

/// Determine the game outcome from final totals.
///
/// Pure: safe to recompute any number of times.
#[must_use]
pub fn game_outcome(player_total: u32, computer_total: u32) -> Outcome {
    use std::cmp::Ordering;

    match player_total.cmp(&computer_total) {
        Ordering::Greater => Outcome::Winner(Seat::Player),
        Ordering::Less => Outcome::Winner(Seat::Computer),
        Ordering::Equal => Outcome::Draw,
    }
}

/// The seat that won a round, or `None` for a drawn round.
#[must_use]
pub fn round_winner(player_score: u32, computer_score: u32) -> Option<Seat> {
    match game_outcome(player_score, computer_score) {
        Outcome::Winner(seat) => Some(seat),
        Outcome::Draw => None,
    }
}
