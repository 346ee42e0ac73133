//! `mono-deck` — the two 15-card decks.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`card`]      | `Card` directive enum and its compact `i8` encoding    |
//! | [`deck`]      | `Deck` (biased shuffle, rotate-draw), `DECK_SIZE`      |
//! | [`standard`]  | The fixed chance and community-chest card lists        |
//!
//! A deck is a ring: drawing never removes a card, it only rotates the
//! order, so the multiset of cards in a deck never changes.

pub mod card;
pub mod deck;
pub mod error;
pub mod standard;

#[cfg(test)]
mod tests;

pub use card::Card;
pub use deck::{DECK_SIZE, Deck};
pub use error::{DeckError, DeckResult};
pub use standard::{CHANCE_CARDS, CHANCE_CODES, CHEST_CARDS, CHEST_CODES};
