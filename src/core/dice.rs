//! Dice value types.
//!
//! A `Die` is a single face in 1..=6. A `DicePair` is one seat's roll for a
//! round: two dice drawn together and scored together.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Number of faces on a die.
pub const FACES: u8 = 6;

/// A single die face in 1..=6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Die(u8);

impl Die {
    /// Create a die showing `value`.
    ///
    /// ## Panics
    ///
    /// Panics if `value` is not in 1..=6.
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!(
            (1..=FACES).contains(&value),
            "Die face must be 1-6, got {}",
            value
        );
        Self(value)
    }

    /// Draw a uniformly random face from `rng`.
    #[must_use]
    pub fn roll(rng: &mut GameRng) -> Self {
        Self(rng.roll_face())
    }

    /// The face value, in 1..=6.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One seat's roll for a round: two dice drawn together.
///
/// ```
/// use dice_duel::core::{DicePair, Die};
///
/// let pair = DicePair::new(Die::new(3), Die::new(5));
/// assert_eq!(pair.sum(), 8);
/// assert!(!pair.is_double());
/// assert!(!pair.contains(1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DicePair {
    first: Die,
    second: Die,
}

impl DicePair {
    /// Create a pair from two dice.
    #[must_use]
    pub const fn new(first: Die, second: Die) -> Self {
        Self { first, second }
    }

    /// Draw both dice from `rng`, first die first.
    #[must_use]
    pub fn roll(rng: &mut GameRng) -> Self {
        let first = Die::roll(rng);
        let second = Die::roll(rng);
        Self { first, second }
    }

    /// The first die.
    #[must_use]
    pub const fn first(self) -> Die {
        self.first
    }

    /// The second die.
    #[must_use]
    pub const fn second(self) -> Die {
        self.second
    }

    /// Sum of both faces.
    #[must_use]
    pub const fn sum(self) -> u32 {
        self.first.value() as u32 + self.second.value() as u32
    }

    /// Whether both dice show the same face.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.first.value() == self.second.value()
    }

    /// Whether either die shows `face`.
    #[must_use]
    pub const fn contains(self, face: u8) -> bool {
        self.first.value() == face || self.second.value() == face
    }
}

impl std::fmt::Display for DicePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.first, self.second)
    }
}
