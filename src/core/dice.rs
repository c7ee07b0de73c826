//! Dice: a turn's move distances.
//!
//! A roll yields two usable distances, or four copies of the shared value
//! on doubles. The dice remember only the last roll's two raw values;
//! tracking which distances remain unconsumed is the game's job.

use smallvec::{smallvec, SmallVec};
use std::fmt;

use super::rng::DiceRng;

/// A roll's usable distances: two values, or four copies on doubles.
pub type Distances = SmallVec<[u8; 4]>;

/// Two six-sided dice.
#[derive(Clone, Debug)]
pub struct Dice {
    rng: DiceRng,
    first: Option<u8>,
    second: Option<u8>,
}

impl Dice {
    /// Dice seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(DiceRng::from_entropy())
    }

    /// Dice with a fixed seed, for reproducible matches and tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(DiceRng::new(seed))
    }

    /// Dice over an existing RNG.
    #[must_use]
    pub fn with_rng(rng: DiceRng) -> Self {
        Self {
            rng,
            first: None,
            second: None,
        }
    }

    /// Roll both dice.
    ///
    /// Returns the two values, or four copies of the shared value when
    /// both dice match. Always succeeds.
    pub fn roll(&mut self) -> Distances {
        let first = self.rng.die();
        let second = self.rng.die();
        self.first = Some(first);
        self.second = Some(second);

        if first == second {
            smallvec![first; 4]
        } else {
            smallvec![first, second]
        }
    }

    /// Roll a single die, leaving the stored pair untouched.
    ///
    /// Used for the opening roll that decides who moves first.
    pub fn roll_single(&mut self) -> u8 {
        self.rng.die()
    }

    /// The first die of the last roll, `None` before any roll.
    #[must_use]
    pub fn first_die(&self) -> Option<u8> {
        self.first
    }

    /// The second die of the last roll, `None` before any roll.
    #[must_use]
    pub fn second_die(&self) -> Option<u8> {
        self.second
    }

    /// True iff the last roll was doubles. False before any roll.
    #[must_use]
    pub fn is_double(&self) -> bool {
        match (self.first, self.second) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first, self.second) {
            (Some(a), Some(b)) if a == b => write!(f, "{a}-{b} (double)"),
            (Some(a), Some(b)) => write!(f, "{a}-{b}"),
            _ => write!(f, "not rolled"),
        }
    }
}
