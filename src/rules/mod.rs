//! The game rules: scoring and outcome determination.
//!
//! Everything here is a pure function over core types. The engine calls
//! into `rules` but never the other way around.

pub mod outcome;
pub mod scoring;

pub use outcome::{game_outcome, round_winner, Outcome};
pub use scoring::{score, RollKind, MAX_SCORE};
