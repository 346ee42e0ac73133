//! The single-game state machine.
//!
//! # One move
//!
//! ```text
//! throw d1, d2
//! if free (no jail time) or double:
//!     advance d1+d2, count a landing
//!     chance space?     draw chance, apply card
//!     chest space?      draw chest,  apply card     (checked after chance)
//!     on GO TO JAIL?    jail
//! else:
//!     count a landing on the current space, serve one turn
//! double?  bump streak, third in a row → jail
//! else     reset streak
//! count the end of the move
//! ```
//!
//! Every route into jail puts the token on space 10 with two turns to serve.

use mono_core::{RandomSource, Roll, Space, nearest_railroad};
use mono_deck::{Card, Deck};

use crate::player::DOUBLES_LIMIT;
use crate::{PlayerState, Tally};

/// Everything that happened during one move.  Produced by
/// [`GameSimulator::step`]; collected by
/// [`GameSimulator::play_game_traced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub roll:   Roll,
    /// The space counted in `Tally::lands` for this move.
    pub landed: Space,
    /// Card drawn from the chance deck, if a chance space was hit.
    pub chance: Option<Card>,
    /// Card drawn from the community-chest deck, if a chest space was hit.
    pub chest:  Option<Card>,
    /// Token state after the move.
    pub after:  PlayerState,
}

/// Plays games against a pair of decks it owns exclusively.
///
/// The decks persist between games (their storage is reused) but are
/// reshuffled at the start of each one.  Build one simulator per worker.
#[derive(Debug, Clone)]
pub struct GameSimulator {
    chance:         Deck,
    chest:          Deck,
    moves_per_game: u32,
}

impl GameSimulator {
    /// A simulator with both decks in printed order.
    pub fn new(moves_per_game: u32) -> Self {
        Self::with_decks(Deck::chance(), Deck::community_chest(), moves_per_game)
    }

    pub fn with_decks(chance: Deck, chest: Deck, moves_per_game: u32) -> Self {
        Self { chance, chest, moves_per_game }
    }

    pub fn chance(&self) -> &Deck {
        &self.chance
    }

    pub fn chest(&self) -> &Deck {
        &self.chest
    }

    pub fn moves_per_game(&self) -> u32 {
        self.moves_per_game
    }

    // ── Game level ────────────────────────────────────────────────────────

    /// Shuffle both decks (chance first) and return a fresh token.
    pub fn new_game<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> PlayerState {
        self.chance.shuffle(rng);
        self.chest.shuffle(rng);
        PlayerState::new()
    }

    /// Play one full game, folding every move into `tally`.
    pub fn play_game<R: RandomSource + ?Sized>(&mut self, rng: &mut R, tally: &mut Tally) {
        let mut state = self.new_game(rng);
        for _ in 0..self.moves_per_game {
            let roll = Roll::roll(rng);
            self.step(&mut state, roll, tally);
        }
        tally.record_game();
    }

    /// Like [`play_game`](Self::play_game) but also returns one record per
    /// move.
    pub fn play_game_traced<R: RandomSource + ?Sized>(
        &mut self,
        rng:   &mut R,
        tally: &mut Tally,
    ) -> Vec<MoveRecord> {
        let mut state = self.new_game(rng);
        let mut trace = Vec::with_capacity(self.moves_per_game as usize);
        for _ in 0..self.moves_per_game {
            let roll = Roll::roll(rng);
            trace.push(self.step(&mut state, roll, tally));
        }
        tally.record_game();
        trace
    }

    /// Play `games` consecutive games.
    pub fn play_games<R: RandomSource + ?Sized>(
        &mut self,
        rng:   &mut R,
        games: u64,
        tally: &mut Tally,
    ) {
        for _ in 0..games {
            self.play_game(rng, tally);
        }
    }

    // ── Move level ────────────────────────────────────────────────────────

    /// Apply one throw of the dice to `state`.
    ///
    /// Increments exactly one `lands` counter and exactly one `ends` counter
    /// in `tally`, whichever branch is taken.
    pub fn step(&mut self, state: &mut PlayerState, roll: Roll, tally: &mut Tally) -> MoveRecord {
        let mut chance = None;
        let mut chest = None;
        let landed;

        if !state.in_jail() || roll.is_double() {
            state.position = state.position.advance(roll.total());
            landed = state.position;
            tally.record_land(landed);

            if state.position.is_chance() {
                let card = self.chance.draw();
                apply_card(state, card);
                chance = Some(card);
            }
            // Checked against the post-chance position: "back three" from
            // space 36 lands on the chest at 33.
            if state.position.is_chest() {
                let card = self.chest.draw();
                apply_card(state, card);
                chest = Some(card);
            }
            if state.position == Space::GO_TO_JAIL {
                state.send_to_jail();
            }
        } else {
            landed = state.position;
            tally.record_land(landed);
            state.jail_turns -= 1;
        }

        if roll.is_double() {
            state.doubles_streak = state.doubles_streak.saturating_add(1);
            if state.doubles_streak == DOUBLES_LIMIT {
                state.send_to_jail();
            }
        } else {
            state.doubles_streak = 0;
        }

        tally.record_end(state.position);

        MoveRecord { roll, landed, chance, chest, after: *state }
    }
}

/// Apply a drawn card's directive to the token.
pub fn apply_card(state: &mut PlayerState, card: Card) {
    match card {
        Card::Blank => {}
        Card::BackThree => state.position = state.position.back(3),
        Card::NearestRailroad => state.position = nearest_railroad(state.position),
        Card::AdvanceTo(space) => {
            if card.sends_to_jail() {
                state.send_to_jail();
            } else {
                state.position = space;
            }
        }
    }
}
