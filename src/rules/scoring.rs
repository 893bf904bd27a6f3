//! The scoring rule: dice pair in, points out.
//!
//! Rule precedence, first match wins:
//! 1. Either die shows 1 — a bust, zero points. Wins over rule 2, so
//!    double ones still score 0.
//! 2. Doubles — twice the sum.
//! 3. Otherwise — the sum.
//!
//! Pure and total over all 36 pairs. Maximum score is 24 (double sixes);
//! the smallest non-zero score is 5 (2+3, since anything containing a 1
//! busts).

use serde::{Deserialize, Serialize};

use crate::core::dice::DicePair;

/// Highest possible score: double sixes.
pub const MAX_SCORE: u32 = 24;

/// Which scoring rule a pair falls under.
///
/// Renderers use this for messaging ("Bust!"); `score` and `classify`
/// agree by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollKind {
    /// At least one die shows 1. Scores 0.
    Bust,
    /// Both dice match (and neither is 1). Scores twice the sum.
    Double,
    /// Plain roll. Scores the sum.
    Simple,
}

impl RollKind {
    /// Classify a pair by the first matching rule.
    #[must_use]
    pub fn classify(pair: DicePair) -> Self {
        if pair.contains(1) {
            RollKind::Bust
        } else if pair.is_double() {
            RollKind::Double
        } else {
            RollKind::Simple
        }
    }
}

/// Score a pair of dice.
///
/// ```
/// use dice_duel::core::{DicePair, Die};
/// use dice_duel::rules::score;
///
/// let pair = |a, b| DicePair::new(Die::new(a), Die::new(b));
///
/// assert_eq!(score(pair(3, 1)), 0);  // bust
/// assert_eq!(score(pair(4, 4)), 16); // double
/// assert_eq!(score(pair(2, 5)), 7);  // sum
/// ```
#[must_use]
pub fn score(pair: DicePair) -> u32 {
    match RollKind::classify(pair) {
        RollKind::Bust => 0,
        RollKind::Double => pair.sum() * 2,
        RollKind::Simple => pair.sum(),
    }
}
