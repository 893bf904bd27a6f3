//! The round engine: the state machine that drives a duel.
//!
//! ## Transitions
//!
//! - `reset()`: any phase → `RoundReady(1)`. Zeroes both seats' scores,
//!   clears history. Also how a game starts, and how "play again" works
//!   after `GameOver`.
//! - `roll()`: `RoundReady(n)` → plays round `n` to completion →
//!   `RoundReady(n + 1)`, or `GameOver` once all rounds are played.
//!   In any other phase the call is rejected with the state untouched.
//!
//! One `roll()` runs to completion before another can begin: the engine is
//! `&mut self`-sequential, and the transient `RoundInProgress` phase keeps
//! the guard observable to embeddings that re-enter through callbacks.
//!
//! ## Determinism
//!
//! All four faces of a round are drawn from the engine's own `GameRng` in
//! a fixed order (player's first die, player's second, then the computer's
//! two). `reset` does not reseed, so a whole session of games replays
//! exactly from the construction seed.

use log::{debug, trace};

use crate::core::config::GameConfig;
use crate::core::dice::DicePair;
use crate::core::player::{Seat, SeatMap};
use crate::core::rng::{GameRng, GameRngState};
use crate::core::state::{GamePhase, GameState, Roll, RoundResult};
use crate::rules::outcome::Outcome;
use crate::rules::scoring::score;

/// Why a `roll()` call was rejected. The state is untouched in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollError {
    /// The game has not been started; call `reset` first.
    NotStarted,
    /// A roll is already being processed.
    RollInProgress,
    /// All rounds have been played; `reset` starts a new game.
    GameOver,
}

impl std::fmt::Display for RollError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RollError::NotStarted => f.write_str("game has not been started"),
            RollError::RollInProgress => f.write_str("a roll is already in progress"),
            RollError::GameOver => f.write_str("game is over"),
        }
    }
}

impl std::error::Error for RollError {}

/// A two-seat dice duel.
///
/// Owns the single `GameState` and the RNG every die is drawn from.
/// Renderers read `state()` or hold `snapshot()`s; only the engine writes.
///
/// ## Example
///
/// ```
/// use dice_duel::{DiceDuel, GameConfig};
///
/// let mut game = DiceDuel::new(GameConfig::default(), 42);
/// game.reset();
///
/// while game.state().is_active() {
///     let result = game.roll().expect("round was ready");
///     println!("{}", result);
/// }
///
/// let outcome = game.result().expect("game is over");
/// println!("{}", outcome);
/// ```
#[derive(Clone, Debug)]
pub struct DiceDuel {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
}

impl DiceDuel {
    /// Create an engine in the `NotStarted` phase.
    ///
    /// `seed` determines every die the session will roll.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            rng: GameRng::new(seed),
        }
    }

    /// Create an engine seeded from entropy, for non-replayable sessions.
    #[must_use]
    pub fn from_entropy(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            state,
            rng: GameRng::from_entropy(),
        }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// A detached copy of the current state for the renderer.
    ///
    /// Cheap: the history is a persistent vector.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// RNG checkpoint, for embedders that snapshot sessions.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// The game result, once the game is over. Idempotent.
    #[must_use]
    pub fn result(&self) -> Option<Outcome> {
        self.state.result()
    }

    /// Start a fresh game: round 1 ready, scores zeroed, history cleared.
    ///
    /// Valid in any phase. The RNG stream continues where it left off, so
    /// successive games stay replayable from the construction seed.
    pub fn reset(&mut self) -> &GameState {
        debug!("reset: starting a fresh {}-round game", self.config.rounds);
        self.state.reset(&self.config);
        &self.state
    }

    /// Play one round: roll both seats' dice, score them, and advance.
    ///
    /// Valid only in `RoundReady`. Any other phase returns an error and
    /// leaves the state untouched; this is the benign race between user
    /// input and an in-flight animation, not a failure. Never panics.
    pub fn roll(&mut self) -> Result<RoundResult, RollError> {
        let round = match self.state.phase() {
            GamePhase::RoundReady(n) => n,
            GamePhase::NotStarted => return Err(RollError::NotStarted),
            GamePhase::RoundInProgress => return Err(RollError::RollInProgress),
            GamePhase::GameOver => return Err(RollError::GameOver),
        };

        self.state.set_phase(GamePhase::RoundInProgress);
        self.state.clear_round_scores();

        // Fixed draw order: player's pair, then the computer's.
        let player_dice = DicePair::roll(&mut self.rng);
        let computer_dice = DicePair::roll(&mut self.rng);
        trace!(
            "round {}: player drew {}, computer drew {}",
            round,
            player_dice,
            computer_dice
        );

        let rolls = SeatMap::new(|seat| {
            let dice = match seat {
                Seat::Player => player_dice,
                Seat::Computer => computer_dice,
            };
            Roll {
                dice,
                score: score(dice),
            }
        });
        let result = RoundResult::new(round, rolls);
        self.state.record_round(result.clone());
        debug!("{}", result);

        let next = self.state.current_round();
        if next > self.state.max_rounds() {
            self.state.set_phase(GamePhase::GameOver);
            // result() is Some by construction here
            if let Some(outcome) = self.state.result() {
                debug!("game over: {}", outcome);
            }
        } else {
            self.state.set_phase(GamePhase::RoundReady(next));
        }

        Ok(result)
    }
}
