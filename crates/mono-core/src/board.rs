//! The board: a cyclic sequence of 40 spaces.
//!
//! There is no board entity.  A token's location is just a [`Space`], an
//! index in `[0, 40)`, and every constructor or movement helper reduces
//! modulo [`SPACES`] so a `Space` can always be used to index a
//! `[T; SPACES]` accumulator without a bounds surprise.

use std::fmt;

/// Number of spaces on the board.
pub const SPACES: usize = 40;

// ── Space ─────────────────────────────────────────────────────────────────────

/// A board position in `[0, 40)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Space(pub u8);

impl Space {
    /// The starting space.
    pub const GO: Space = Space(0);

    /// The jail space.  Also the "just visiting" square.
    pub const JAIL: Space = Space(10);

    /// Landing here sends the token to [`Space::JAIL`].
    pub const GO_TO_JAIL: Space = Space(30);

    /// Build a space from any integer, wrapping around the board.
    #[inline]
    pub fn new(n: u32) -> Space {
        Space((n % SPACES as u32) as u8)
    }

    /// Cast to `usize` for direct use as an array index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The space `steps` ahead, wrapping past GO.
    #[inline]
    pub fn advance(self, steps: u8) -> Space {
        Space::new(self.0 as u32 + steps as u32)
    }

    /// The space `steps` behind, wrapping backwards past GO.
    #[inline]
    pub fn back(self, steps: u8) -> Space {
        let n = (self.0 as i32 - steps as i32).rem_euclid(SPACES as i32);
        Space(n as u8)
    }

    #[inline]
    pub fn is_chance(self) -> bool {
        CHANCE_SPACES.contains(&self)
    }

    #[inline]
    pub fn is_chest(self) -> bool {
        CHEST_SPACES.contains(&self)
    }

    #[inline]
    pub fn is_railroad(self) -> bool {
        RAILROADS.contains(&self)
    }

    /// Standard board label for this space.
    pub fn name(self) -> &'static str {
        SPACE_NAMES[self.index()]
    }

    /// Iterate all 40 spaces in board order.
    pub fn all() -> impl Iterator<Item = Space> {
        (0..SPACES as u8).map(Space)
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.name())
    }
}

impl From<Space> for usize {
    #[inline(always)]
    fn from(space: Space) -> usize {
        space.0 as usize
    }
}

// ── Special spaces ────────────────────────────────────────────────────────────

/// Landing on one of these draws from the chance deck.
///
/// Space 2 is also a chest space: a move ending there draws chance first,
/// then chest if the chance card left the token in place.
pub const CHANCE_SPACES: [Space; 3] = [Space(2), Space(7), Space(36)];

/// Landing on one of these draws from the community-chest deck.
pub const CHEST_SPACES: [Space; 3] = [Space(2), Space(17), Space(33)];

/// The four railroads, one per side of the board.
pub const RAILROADS: [Space; 4] = [Space(5), Space(15), Space(25), Space(35)];

/// The railroad reached by the "advance to nearest railroad" card.
///
/// Computed as `(round(space / 10) * 10 + 5) mod 40` with halves rounded up,
/// in integer arithmetic: spaces 0–4 go to 5, 5–14 to 15, 15–24 to 25,
/// 25–34 to 35 and 35–39 wrap to 5.
#[inline]
pub fn nearest_railroad(space: Space) -> Space {
    let tens = (space.0 as u32 + 5) / 10;
    Space::new(tens * 10 + 5)
}

const SPACE_NAMES: [&str; SPACES] = [
    "GO",
    "Mediterranean Avenue",
    "Community Chest 1",
    "Baltic Avenue",
    "Income Tax",
    "Reading Railroad",
    "Oriental Avenue",
    "Chance 1",
    "Vermont Avenue",
    "Connecticut Avenue",
    "Jail",
    "St. Charles Place",
    "Electric Company",
    "States Avenue",
    "Virginia Avenue",
    "Pennsylvania Railroad",
    "St. James Place",
    "Community Chest 2",
    "Tennessee Avenue",
    "New York Avenue",
    "Free Parking",
    "Kentucky Avenue",
    "Chance 2",
    "Indiana Avenue",
    "Illinois Avenue",
    "B&O Railroad",
    "Atlantic Avenue",
    "Ventnor Avenue",
    "Water Works",
    "Marvin Gardens",
    "Go To Jail",
    "Pacific Avenue",
    "North Carolina Avenue",
    "Community Chest 3",
    "Pennsylvania Avenue",
    "Short Line",
    "Chance 3",
    "Park Place",
    "Luxury Tax",
    "Boardwalk",
];
