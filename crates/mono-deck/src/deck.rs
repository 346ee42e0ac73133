//! A fixed-size ring of cards.

use mono_core::RandomSource;

use crate::standard::{CHANCE_CARDS, CHEST_CARDS};
use crate::{Card, DeckError, DeckResult};

/// Cards in every deck.
pub const DECK_SIZE: usize = 15;

/// One 15-card deck.
///
/// The deck owns its cards by value and is only ever mutated by
/// [`shuffle`](Deck::shuffle) and [`draw`](Deck::draw), both of which
/// reorder without adding or removing cards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    /// Build a deck from cards in top-to-bottom order.
    pub fn new(cards: [Card; DECK_SIZE]) -> Self {
        Self { cards }
    }

    /// Decode a deck from compact card codes.
    pub fn from_codes(codes: &[i8]) -> DeckResult<Self> {
        if codes.len() != DECK_SIZE {
            return Err(DeckError::WrongSize { expected: DECK_SIZE, got: codes.len() });
        }
        let mut cards = [Card::Blank; DECK_SIZE];
        for (slot, &code) in cards.iter_mut().zip(codes) {
            *slot = Card::from_code(code)?;
        }
        Ok(Self { cards })
    }

    /// The chance deck in printed order.
    pub fn chance() -> Self {
        Self::new(CHANCE_CARDS)
    }

    /// The community-chest deck in printed order.
    pub fn community_chest() -> Self {
        Self::new(CHEST_CARDS)
    }

    /// Reorder the deck in place.
    ///
    /// For every position `i` in `0..15` a partner `j` is picked uniformly
    /// from the *whole* deck `[0, 15)` and the two are swapped.  This is not
    /// Fisher–Yates: the 15^15 equally likely pick sequences do not map
    /// evenly onto the 15! orderings, and the simulated statistics depend on
    /// exactly this bias.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for i in 0..DECK_SIZE {
            let j = rng.pick_index(DECK_SIZE);
            self.cards.swap(i, j);
        }
    }

    /// Move the top card to the bottom and return the card now on top.
    #[inline]
    pub fn draw(&mut self) -> Card {
        self.cards.rotate_left(1);
        self.cards[0]
    }

    /// The card currently on top.
    #[inline]
    pub fn top(&self) -> Card {
        self.cards[0]
    }

    /// All cards, top first.
    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    /// Card codes sorted ascending — equal for two decks holding the same
    /// multiset of cards regardless of order.
    pub fn sorted_codes(&self) -> [i8; DECK_SIZE] {
        let mut codes = self.cards.map(Card::code);
        codes.sort_unstable();
        codes
    }
}
