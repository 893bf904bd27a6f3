//! Seats and per-seat score accumulators.
//!
//! ## Seat
//!
//! The two sides of a duel: the human seat and the computer seat.
//!
//! ## Player
//!
//! Named score accumulators for one seat. `round_score` always holds the
//! score of the most recently completed round only; `total_score` is the
//! sum over all completed rounds. Only the engine mutates either.
//!
//! ## SeatMap
//!
//! Fixed two-slot per-seat storage, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The human seat.
    Player,
    /// The computer seat. Rolls random dice; makes no decisions.
    Computer,
}

impl Seat {
    /// Both seats, in scoring order (human first).
    pub const ALL: [Seat; 2] = [Seat::Player, Seat::Computer];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::Player => Seat::Computer,
            Seat::Computer => Seat::Player,
        }
    }

    /// Slot index for per-seat storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Player => 0,
            Seat::Computer => 1,
        }
    }

    /// Default display label for this seat.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Seat::Player => "Player",
            Seat::Computer => "Computer",
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_name())
    }
}

/// Score accumulators for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    round_score: u32,
    total_score: u32,
}

impl Player {
    /// Create a player with zeroed scores.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            round_score: 0,
            total_score: 0,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Score from the most recently completed round only.
    #[must_use]
    pub const fn round_score(&self) -> u32 {
        self.round_score
    }

    /// Sum of all completed rounds' scores.
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Zero both scores. The name is kept.
    pub fn reset(&mut self) {
        self.round_score = 0;
        self.total_score = 0;
    }

    /// Zero the round score ahead of a roll.
    pub(crate) fn clear_round(&mut self) {
        self.round_score = 0;
    }

    /// Record a completed round's score.
    pub(crate) fn apply_round(&mut self, score: u32) {
        self.round_score = score;
        self.total_score += score;
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a fixed two-element array, one slot per `Seat`.
///
/// ## Example
///
/// ```
/// use dice_duel::core::{Seat, SeatMap};
///
/// let mut wins: SeatMap<u32> = SeatMap::with_value(0);
/// wins[Seat::Player] += 1;
///
/// assert_eq!(wins[Seat::Player], 1);
/// assert_eq!(wins[Seat::Computer], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    ///
    /// The factory receives the `Seat` for each slot.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::Player), factory(Seat::Computer)],
        }
    }

    /// Create a new SeatMap with both slots set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs, human seat first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.iter().map(move |&seat| (seat, self.get(seat)))
    }

    /// Iterate over (Seat, &mut T) pairs, human seat first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        let [player, computer] = &mut self.data;
        [(Seat::Player, player), (Seat::Computer, computer)].into_iter()
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_opponent() {
        assert_eq!(Seat::Player.opponent(), Seat::Computer);
        assert_eq!(Seat::Computer.opponent(), Seat::Player);
    }

    #[test]
    fn test_seat_display() {
        assert_eq!(format!("{}", Seat::Player), "Player");
        assert_eq!(format!("{}", Seat::Computer), "Computer");
    }

    #[test]
    fn test_player_new() {
        let player = Player::new("Alice");

        assert_eq!(player.name(), "Alice");
        assert_eq!(player.round_score(), 0);
        assert_eq!(player.total_score(), 0);
    }

    #[test]
    fn test_player_apply_round() {
        let mut player = Player::new("Alice");

        player.apply_round(7);
        assert_eq!(player.round_score(), 7);
        assert_eq!(player.total_score(), 7);

        player.apply_round(12);
        assert_eq!(player.round_score(), 12); // Latest round only
        assert_eq!(player.total_score(), 19);
    }

    #[test]
    fn test_player_clear_round_keeps_total() {
        let mut player = Player::new("Alice");
        player.apply_round(7);

        player.clear_round();

        assert_eq!(player.round_score(), 0);
        assert_eq!(player.total_score(), 7);
    }

    #[test]
    fn test_player_reset() {
        let mut player = Player::new("Alice");
        player.apply_round(7);
        player.apply_round(12);

        player.reset();

        assert_eq!(player.name(), "Alice");
        assert_eq!(player.round_score(), 0);
        assert_eq!(player.total_score(), 0);
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<&str> = SeatMap::new(|seat| seat.default_name());

        assert_eq!(map[Seat::Player], "Player");
        assert_eq!(map[Seat::Computer], "Computer");
    }

    #[test]
    fn test_seat_map_mutation() {
        let mut map: SeatMap<u32> = SeatMap::with_value(0);

        map[Seat::Player] = 10;
        map[Seat::Computer] = 20;

        assert_eq!(map[Seat::Player], 10);
        assert_eq!(map[Seat::Computer], 20);
    }

    #[test]
    fn test_seat_map_iter() {
        let map: SeatMap<u32> = SeatMap::new(|seat| seat.index() as u32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Seat::Player, &0), (Seat::Computer, &1)]);
    }

    #[test]
    fn test_seat_map_iter_mut() {
        let mut map: SeatMap<u32> = SeatMap::with_value(1);

        for (_, value) in map.iter_mut() {
            *value += 1;
        }

        assert_eq!(map[Seat::Player], 2);
        assert_eq!(map[Seat::Computer], 2);
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<u32> = SeatMap::new(|seat| seat.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
