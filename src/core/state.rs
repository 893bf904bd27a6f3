//! Game state: phase, scores, and round history.
//!
//! ## GamePhase
//!
//! The round engine's machine states. `RoundInProgress` is only observable
//! from within a roll; `roll()` enters and leaves it in one call.
//!
//! ## RoundResult
//!
//! Immutable record of one completed round: both seats' dice and scores.
//! History keeps these most-recent-first.
//!
//! ## GameState
//!
//! The single game value. Exactly one writer (the engine); renderers read
//! it or hold snapshots. `Clone` is O(1)-ish thanks to the persistent
//! history vector.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::dice::DicePair;
use super::player::{Player, Seat, SeatMap};
use crate::rules::outcome::{self, Outcome};

/// Where the round engine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed but never started. `reset` starts the game.
    NotStarted,
    /// Waiting for the given round (1-based) to be rolled.
    RoundReady(u32),
    /// A roll is being processed; further rolls are rejected.
    RoundInProgress,
    /// All rounds played; the result is final.
    GameOver,
}

/// One seat's dice and score for a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    /// The dice as drawn.
    pub dice: DicePair,
    /// The score those dice earned.
    pub score: u32,
}

/// Immutable record of one completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    round: u32,
    rolls: SeatMap<Roll>,
}

impl RoundResult {
    pub(crate) fn new(round: u32, rolls: SeatMap<Roll>) -> Self {
        Self { round, rolls }
    }

    /// Round number, 1-based.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The dice a seat rolled this round.
    #[must_use]
    pub fn dice(&self, seat: Seat) -> DicePair {
        self.rolls[seat].dice
    }

    /// The score a seat earned this round.
    #[must_use]
    pub fn score(&self, seat: Seat) -> u32 {
        self.rolls[seat].score
    }

    /// The seat that won this round, or `None` for a drawn round.
    ///
    /// Informational only: round wins are never tallied toward the game
    /// result, which compares cumulative totals.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        outcome::round_winner(self.score(Seat::Player), self.score(Seat::Computer))
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let player = &self.rolls[Seat::Player];
        let computer = &self.rolls[Seat::Computer];
        write!(
            f,
            "Round {}: {} {} = {} pts, {} {} = {} pts",
            self.round,
            Seat::Player,
            player.dice,
            player.score,
            Seat::Computer,
            computer.dice,
            computer.score,
        )
    }
}

/// The single game value: phase, players, and history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    phase: GamePhase,
    current_round: u32,
    max_rounds: u32,
    players: SeatMap<Player>,
    history: Vector<RoundResult>,
}

impl GameState {
    /// Create a fresh, not-yet-started state from a configuration.
    pub(crate) fn new(config: &GameConfig) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            current_round: 1,
            max_rounds: config.rounds,
            players: SeatMap::new(|seat| Player::new(config.names[seat].clone())),
            history: Vector::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current round, 1-based. Never exceeds `max_rounds + 1`.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Number of rounds in a full game.
    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Whether rolls are being accepted or processed.
    ///
    /// False exactly before the first `reset` and after the last round.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(
            self.phase,
            GamePhase::RoundReady(_) | GamePhase::RoundInProgress
        )
    }

    /// Whether all rounds have been played.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// A seat's score accumulators.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    /// Both seats' score accumulators.
    #[must_use]
    pub fn players(&self) -> &SeatMap<Player> {
        &self.players
    }

    /// Completed rounds, most recent first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundResult> {
        &self.history
    }

    /// The most recently completed round, if any.
    #[must_use]
    pub fn latest_round(&self) -> Option<&RoundResult> {
        self.history.front()
    }

    /// The game result: strictly greater total wins, equal totals draw.
    ///
    /// `None` until the game is over. A pure function of final totals, so
    /// recomputing it any number of times yields the same answer.
    #[must_use]
    pub fn result(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        Some(outcome::game_outcome(
            self.players[Seat::Player].total_score(),
            self.players[Seat::Computer].total_score(),
        ))
    }

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    /// Zero both round scores ahead of a roll. Totals are untouched.
    pub(crate) fn clear_round_scores(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.clear_round();
        }
    }

    /// Record a completed round: apply both scores, prepend to history,
    /// advance the round counter.
    pub(crate) fn record_round(&mut self, result: RoundResult) {
        for seat in Seat::ALL {
            self.players[seat].apply_round(result.score(seat));
        }
        self.history.push_front(result);
        self.current_round += 1;
        debug_assert!(self.current_round <= self.max_rounds + 1);
    }

    /// Reinitialize for a fresh game: round 1 ready, scores zeroed,
    /// history cleared. Names are re-taken from the configuration.
    pub(crate) fn reset(&mut self, config: &GameConfig) {
        self.phase = GamePhase::RoundReady(1);
        self.current_round = 1;
        self.max_rounds = config.rounds;
        self.players = SeatMap::new(|seat| Player::new(config.names[seat].clone()));
        self.history = Vector::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::Die;

    fn pair(a: u8, b: u8) -> DicePair {
        DicePair::new(Die::new(a), Die::new(b))
    }

    fn round(n: u32, player: (u8, u8, u32), computer: (u8, u8, u32)) -> RoundResult {
        RoundResult::new(
            n,
            SeatMap::new(|seat| match seat {
                Seat::Player => Roll {
                    dice: pair(player.0, player.1),
                    score: player.2,
                },
                Seat::Computer => Roll {
                    dice: pair(computer.0, computer.1),
                    score: computer.2,
                },
            }),
        )
    }

    #[test]
    fn test_new_state_not_started() {
        let state = GameState::new(&GameConfig::default());

        assert_eq!(state.phase(), GamePhase::NotStarted);
        assert_eq!(state.current_round(), 1);
        assert_eq!(state.max_rounds(), 3);
        assert!(!state.is_active());
        assert!(!state.is_over());
        assert!(state.history().is_empty());
        assert_eq!(state.result(), None);
    }

    #[test]
    fn test_reset_makes_round_one_ready() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);

        state.reset(&config);

        assert_eq!(state.phase(), GamePhase::RoundReady(1));
        assert!(state.is_active());
        assert_eq!(state.player(Seat::Player).total_score(), 0);
        assert_eq!(state.player(Seat::Computer).total_score(), 0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_record_round_applies_scores() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.reset(&config);

        state.record_round(round(1, (3, 4, 7), (5, 5, 20)));

        assert_eq!(state.current_round(), 2);
        assert_eq!(state.player(Seat::Player).round_score(), 7);
        assert_eq!(state.player(Seat::Player).total_score(), 7);
        assert_eq!(state.player(Seat::Computer).round_score(), 20);
        assert_eq!(state.player(Seat::Computer).total_score(), 20);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_history_most_recent_first() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.reset(&config);

        state.record_round(round(1, (3, 4, 7), (2, 3, 5)));
        state.record_round(round(2, (6, 6, 24), (1, 2, 0)));

        assert_eq!(state.latest_round().unwrap().round(), 2);
        let rounds: Vec<_> = state.history().iter().map(RoundResult::round).collect();
        assert_eq!(rounds, vec![2, 1]);
    }

    #[test]
    fn test_round_result_winner_informational() {
        let r = round(1, (3, 4, 7), (2, 3, 5));
        assert_eq!(r.winner(), Some(Seat::Player));

        let drawn = round(2, (3, 4, 7), (2, 5, 7));
        assert_eq!(drawn.winner(), None);
    }

    #[test]
    fn test_result_only_when_over() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.reset(&config);

        state.record_round(round(1, (3, 4, 7), (2, 3, 5)));
        assert_eq!(state.result(), None);

        state.set_phase(GamePhase::GameOver);
        assert_eq!(state.result(), Some(Outcome::Winner(Seat::Player)));
    }

    #[test]
    fn test_round_result_display() {
        let r = round(2, (3, 4, 7), (5, 5, 20));
        assert_eq!(
            format!("{}", r),
            "Round 2: Player 3+4 = 7 pts, Computer 5+5 = 20 pts"
        );
    }

    #[test]
    fn test_state_serialization() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.reset(&config);
        state.record_round(round(1, (3, 4, 7), (2, 3, 5)));

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
