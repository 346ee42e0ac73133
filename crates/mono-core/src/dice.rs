//! A throw of two six-sided dice.

use std::fmt;

use crate::RandomSource;

/// Faces of one die shown by a single throw.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roll {
    pub d1: u8,
    pub d2: u8,
}

impl Roll {
    /// Build a roll from two die faces.
    ///
    /// # Panics
    /// Panics in debug mode if either face is outside `1..=6`.
    #[inline]
    pub fn new(d1: u8, d2: u8) -> Roll {
        debug_assert!((1..=6).contains(&d1), "die face {d1} out of range");
        debug_assert!((1..=6).contains(&d2), "die face {d2} out of range");
        Roll { d1, d2 }
    }

    /// Throw both dice, first `d1` then `d2`.
    #[inline]
    pub fn roll<R: RandomSource + ?Sized>(rng: &mut R) -> Roll {
        let d1 = rng.roll_die();
        let d2 = rng.roll_die();
        Roll { d1, d2 }
    }

    /// Number of spaces to move.
    #[inline]
    pub fn total(self) -> u8 {
        self.d1 + self.d2
    }

    /// `true` when both dice show the same face.
    #[inline]
    pub fn is_double(self) -> bool {
        self.d1 == self.d2
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.d1, self.d2)
    }
}
