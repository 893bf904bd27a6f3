//! Deterministic random number generation for dice rolls.
//!
//! The engine owns a single `GameRng`; every die face in a session is drawn
//! from it in a documented order, so an entire session replays exactly from
//! the construction seed.
//!
//! ## Usage
//!
//! ```
//! use dice_duel::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed produces the identical face sequence.
//! for _ in 0..10 {
//!     assert_eq!(rng1.roll_face(), rng2.roll_face());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::dice::FACES;

/// Deterministic RNG behind every die roll.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// The stream position is snapshotable, so an embedder can checkpoint a
/// session without the core persisting anything itself.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread-local entropy source.
    ///
    /// For embeddings that want a fresh unpredictable session rather than a
    /// replayable one.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was constructed with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a uniformly random die face in 1..=6.
    pub fn roll_face(&mut self) -> u8 {
        self.inner.gen_range(1..=FACES)
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of how many
/// faces have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
