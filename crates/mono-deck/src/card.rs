//! Card directives.
//!
//! Each card is stored in the canonical lists as a compact `i8` code:
//!
//! | Code     | Directive                                  |
//! |----------|--------------------------------------------|
//! | `-1`     | no positional effect                       |
//! | `-3`     | move back three spaces                     |
//! | `-5`     | advance to the nearest railroad            |
//! | `0..=39` | advance directly to that space             |
//!
//! An advance to space 10 (jail) also starts a jail sentence.

use std::fmt;

use mono_core::{MonoError, MonoResult, Space, SPACES};

/// What a drawn card does to the token.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Card {
    /// No positional effect.
    Blank,
    /// Move back three spaces.  Landing effects of the new space are not
    /// re-triggered.
    BackThree,
    /// Advance to the nearest railroad.
    NearestRailroad,
    /// Teleport to the given space.
    AdvanceTo(Space),
}

impl Card {
    pub const BLANK_CODE: i8 = -1;
    pub const BACK_THREE_CODE: i8 = -3;
    pub const NEAREST_RAILROAD_CODE: i8 = -5;

    /// Decode a card from its compact code.
    pub fn from_code(code: i8) -> MonoResult<Card> {
        match code {
            Self::BLANK_CODE => Ok(Card::Blank),
            Self::BACK_THREE_CODE => Ok(Card::BackThree),
            Self::NEAREST_RAILROAD_CODE => Ok(Card::NearestRailroad),
            c if (0..SPACES as i8).contains(&c) => Ok(Card::AdvanceTo(Space(c as u8))),
            c => Err(MonoError::UnknownCard(c)),
        }
    }

    /// The compact code for this card.
    pub fn code(self) -> i8 {
        match self {
            Card::Blank           => Self::BLANK_CODE,
            Card::BackThree       => Self::BACK_THREE_CODE,
            Card::NearestRailroad => Self::NEAREST_RAILROAD_CODE,
            Card::AdvanceTo(s)    => s.0 as i8,
        }
    }

    /// `true` for the card that sends the token straight to jail.
    #[inline]
    pub fn sends_to_jail(self) -> bool {
        self == Card::AdvanceTo(Space::JAIL)
    }
}

impl TryFrom<i8> for Card {
    type Error = MonoError;

    fn try_from(code: i8) -> MonoResult<Card> {
        Card::from_code(code)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Blank           => f.write_str("blank"),
            Card::BackThree       => f.write_str("back 3"),
            Card::NearestRailroad => f.write_str("nearest railroad"),
            Card::AdvanceTo(s)    => write!(f, "advance to {s}"),
        }
    }
}
