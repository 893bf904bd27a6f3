//! # dice-duel
//!
//! A deterministic round engine for a two-player dice duel: each round both
//! seats roll two dice, a fixed scoring rule turns each pair into points,
//! totals accumulate over a fixed number of rounds, and the higher total
//! wins. The computer seat only rolls; it makes no decisions.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: the engine owns one `GameState` and is its only
//!    writer. Rendering, input capture, and animation belong to an
//!    external collaborator that consumes read-only snapshots.
//!
//! 2. **Injected randomness**: every die face comes from the engine's
//!    seeded `GameRng`, in a fixed draw order, so any session replays
//!    exactly from its seed.
//!
//! 3. **Guarded transitions**: `roll()` is valid only when a round is
//!    ready. Anything else is rejected with the state untouched — a round
//!    is never processed twice and never rolled past the limit.
//!
//! ## Modules
//!
//! - `core`: dice, seats, players, state, RNG, configuration
//! - `rules`: the scoring rule and winner determination
//! - `engine`: `DiceDuel`, the round engine state machine
//!
//! ## Example
//!
//! ```
//! use dice_duel::{DiceDuel, GameConfig, Seat};
//!
//! let mut game = DiceDuel::new(GameConfig::default(), 42);
//! game.reset();
//!
//! while game.state().is_active() {
//!     let round = game.roll().expect("round was ready");
//!     println!("{}", round);
//! }
//!
//! let outcome = game.result().expect("game is over");
//! if outcome.is_winner(Seat::Player) {
//!     println!("you beat the computer");
//! }
//! ```

pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DicePair, Die, GameConfig, GamePhase, GameRng, GameRngState, GameState, Player, Roll,
    RoundResult, Seat, SeatMap, DEFAULT_ROUNDS, FACES,
};

pub use crate::rules::{game_outcome, round_winner, score, Outcome, RollKind, MAX_SCORE};

pub use crate::engine::{DiceDuel, RollError};
