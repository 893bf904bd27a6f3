//! Core types: dice, seats, state, RNG, configuration.
//!
//! This module contains the building blocks the round engine operates on.
//! Game rules live in `rules`, not here.

pub mod config;
pub mod dice;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, DEFAULT_ROUNDS};
pub use dice::{DicePair, Die, FACES};
pub use player::{Player, Seat, SeatMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GamePhase, GameState, Roll, RoundResult};
