//! Unit tests for mono-deck.

#[cfg(test)]
mod card {
    use mono_core::{MonoError, Space};

    use crate::{CHANCE_CARDS, CHANCE_CODES, CHEST_CARDS, CHEST_CODES, Card};

    #[test]
    fn decodes_directives() {
        assert_eq!(Card::from_code(-1).unwrap(), Card::Blank);
        assert_eq!(Card::from_code(-3).unwrap(), Card::BackThree);
        assert_eq!(Card::from_code(-5).unwrap(), Card::NearestRailroad);
        assert_eq!(Card::from_code(24).unwrap(), Card::AdvanceTo(Space(24)));
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(matches!(Card::from_code(-2), Err(MonoError::UnknownCard(-2))));
        assert!(matches!(Card::try_from(40i8), Err(MonoError::UnknownCard(40))));
    }

    #[test]
    fn standard_codes_all_decode_and_reencode() {
        for &code in CHANCE_CODES.iter().chain(CHEST_CODES.iter()) {
            assert_eq!(Card::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn card_tables_decode_from_codes() {
        for (cards, codes) in [(CHANCE_CARDS, CHANCE_CODES), (CHEST_CARDS, CHEST_CODES)] {
            let decoded: Vec<Card> = codes.iter().map(|&c| Card::from_code(c).unwrap()).collect();
            assert_eq!(decoded, cards);
        }
    }

    #[test]
    fn only_jail_advance_sends_to_jail() {
        assert!(Card::AdvanceTo(Space::JAIL).sends_to_jail());
        assert!(!Card::AdvanceTo(Space::GO).sends_to_jail());
        assert!(!Card::BackThree.sends_to_jail());
    }
}

#[cfg(test)]
mod deck {
    use mono_core::{ScriptedSource, StreamRng};

    use crate::{CHANCE_CODES, CHEST_CODES, Card, DECK_SIZE, Deck, DeckError};

    fn identity_picks() -> Vec<usize> {
        (0..DECK_SIZE).collect()
    }

    #[test]
    fn standard_decks_match_codes() {
        assert_eq!(Deck::chance().cards().map(Card::code), CHANCE_CODES);
        assert_eq!(Deck::community_chest().cards().map(Card::code), CHEST_CODES);
        let chest = Deck::community_chest();
        let blanks = chest.cards().iter().filter(|&&c| c == Card::Blank).count();
        assert_eq!(blanks, 13);
    }

    #[test]
    fn from_codes_checks_length() {
        let err = Deck::from_codes(&[-1, -1]).unwrap_err();
        assert!(matches!(err, DeckError::WrongSize { expected: 15, got: 2 }));
    }

    #[test]
    fn from_codes_propagates_bad_card() {
        let mut codes = CHANCE_CODES;
        codes[3] = -9;
        assert!(matches!(Deck::from_codes(&codes), Err(DeckError::Core(_))));
    }

    #[test]
    fn fifteen_draws_return_each_card_once_in_rotated_order() {
        let mut deck = Deck::chance();
        let original = *deck.cards();
        let drawn: Vec<Card> = (0..DECK_SIZE).map(|_| deck.draw()).collect();
        let expected: Vec<Card> = (0..DECK_SIZE).map(|i| original[(i + 1) % DECK_SIZE]).collect();
        assert_eq!(drawn, expected);
        // A full cycle restores the original order.
        assert_eq!(*deck.cards(), original);
    }

    #[test]
    fn draw_exposes_new_top() {
        let mut deck = Deck::chance();
        let second = deck.cards()[1];
        assert_eq!(deck.draw(), second);
        assert_eq!(deck.top(), second);
        assert_eq!(deck.cards()[DECK_SIZE - 1], Card::Blank); // old top now at bottom
    }

    #[test]
    fn identity_picks_leave_order_unchanged() {
        let mut deck = Deck::chance();
        let before = deck.clone();
        deck.shuffle(&mut ScriptedSource::new([], identity_picks()));
        assert_eq!(deck, before);
    }

    #[test]
    fn shuffle_swaps_with_any_position() {
        // Every pick is 14: each i is swapped with the last slot, including
        // already-visited ones.
        let mut deck = Deck::from_codes(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]).unwrap();
        deck.shuffle(&mut ScriptedSource::new([], [14]));
        let codes = deck.cards().map(Card::code);
        // i=0 moves 0 to the end; each following i rotates the tail in.
        assert_eq!(codes, [14, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13]);
    }

    #[test]
    fn shuffle_and_draw_preserve_multiset() {
        let mut rng = StreamRng::new(99, 0);
        let mut deck = Deck::chance();
        let reference = deck.sorted_codes();
        for round in 0..200 {
            deck.shuffle(&mut rng);
            for _ in 0..(round % 17) {
                deck.draw();
            }
            assert_eq!(deck.sorted_codes(), reference);
        }
    }

    #[test]
    fn shuffle_changes_order_eventually() {
        let mut rng = StreamRng::new(3, 0);
        let original = Deck::chance();
        let mut deck = original.clone();
        deck.shuffle(&mut rng);
        assert_ne!(deck, original);
    }
}
