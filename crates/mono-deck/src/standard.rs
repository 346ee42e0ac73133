//! The fixed card lists, in printed order.

use mono_core::Space;

use crate::Card;
use crate::deck::DECK_SIZE;

/// Chance: six blanks, two "nearest railroad", one "back three", and
/// advances to GO, Reading Railroad, Jail, St. Charles Place, Illinois
/// Avenue and Boardwalk.
pub const CHANCE_CARDS: [Card; DECK_SIZE] = [
    Card::Blank,
    Card::Blank,
    Card::Blank,
    Card::Blank,
    Card::Blank,
    Card::Blank,
    Card::NearestRailroad,
    Card::NearestRailroad,
    Card::BackThree,
    Card::AdvanceTo(Space::GO),
    Card::AdvanceTo(Space(5)),
    Card::AdvanceTo(Space::JAIL),
    Card::AdvanceTo(Space(11)),
    Card::AdvanceTo(Space(24)),
    Card::AdvanceTo(Space(39)),
];

/// Community chest: advance to GO, go to jail, and thirteen blanks.
pub const CHEST_CARDS: [Card; DECK_SIZE] = [
    Card::AdvanceTo(Space::GO),
    Card::Blank,
    Card::Blank,
    Card::Blank,
    Card::Blank,
    Card::Blank,
    Card::Blank,
    Card::Blank,
    Card::AdvanceTo(Space::JAIL),
    Card::Blank,
    Card::Blank,
    Card::Blank,
    Card::Blank,
    Card::Blank,
    Card::Blank,
];

/// [`CHANCE_CARDS`] in compact code form.
pub const CHANCE_CODES: [i8; DECK_SIZE] = [-1, -1, -1, -1, -1, -1, -5, -5, -3, 0, 5, 10, 11, 24, 39];

/// [`CHEST_CARDS`] in compact code form.
pub const CHEST_CODES: [i8; DECK_SIZE] = [0, -1, -1, -1, -1, -1, -1, -1, 10, -1, -1, -1, -1, -1, -1];
