//! Per-space landing and end-of-move counters.

use mono_core::{Space, SPACES};

/// Accumulated statistics for any number of games.
///
/// - `lands[s]` counts moves in which the token landed on `s` by dice —
///   including the "re-landing" on its own space while it sits in jail.
///   Card and go-to-jail redirects are not landings.
/// - `ends[s]` counts moves that finished with the token on `s`, after every
///   redirect.  Exactly one per move.
///
/// Tallies from independent chunks combine with [`merge`](Tally::merge);
/// element-wise addition is the only way counts from different workers
/// meet, so no counter is ever shared between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub lands: [u64; SPACES],
    pub ends:  [u64; SPACES],
    /// Games folded into this tally.
    pub games: u64,
    /// Moves folded into this tally.
    pub moves: u64,
}

impl Default for Tally {
    fn default() -> Self {
        Self::new()
    }
}

impl Tally {
    pub fn new() -> Self {
        Self {
            lands: [0; SPACES],
            ends:  [0; SPACES],
            games: 0,
            moves: 0,
        }
    }

    #[inline]
    pub fn record_land(&mut self, space: Space) {
        self.lands[space.index()] += 1;
    }

    /// Count the end of one move.  Also advances the move counter.
    #[inline]
    pub fn record_end(&mut self, space: Space) {
        self.ends[space.index()] += 1;
        self.moves += 1;
    }

    #[inline]
    pub fn record_game(&mut self) {
        self.games += 1;
    }

    /// Add every counter of `other` into `self`.
    pub fn merge(&mut self, other: &Tally) {
        for (a, b) in self.lands.iter_mut().zip(other.lands.iter()) {
            *a += b;
        }
        for (a, b) in self.ends.iter_mut().zip(other.ends.iter()) {
            *a += b;
        }
        self.games += other.games;
        self.moves += other.moves;
    }

    pub fn total_lands(&self) -> u64 {
        self.lands.iter().sum()
    }

    pub fn total_ends(&self) -> u64 {
        self.ends.iter().sum()
    }

    pub fn lands_at(&self, space: Space) -> u64 {
        self.lands[space.index()]
    }

    pub fn ends_at(&self, space: Space) -> u64 {
        self.ends[space.index()]
    }

    /// Fraction of all landings that happened on `space`.  `0.0` when empty.
    pub fn land_share(&self, space: Space) -> f64 {
        share(self.lands[space.index()], self.total_lands())
    }

    /// Fraction of all moves that ended on `space`.  `0.0` when empty.
    pub fn end_share(&self, space: Space) -> f64 {
        share(self.ends[space.index()], self.total_ends())
    }

    /// The space where most moves end, lowest index on ties.
    pub fn most_visited(&self) -> Space {
        Space::all()
            .max_by(|a, b| {
                self.ends[a.index()]
                    .cmp(&self.ends[b.index()])
                    .then(b.cmp(a))
            })
            .unwrap_or(Space::GO)
    }
}

fn share(part: u64, total: u64) -> f64 {
    if total == 0 { 0.0 } else { part as f64 / total as f64 }
}
