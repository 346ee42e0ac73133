//! Deterministic random sources.
//!
//! # Determinism strategy
//!
//! A run is split into independent chunks of games.  Each chunk gets its own
//! `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (stream_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive stream IDs uniformly across the seed space.
//! This means:
//!
//! - Chunks never share RNG state (no contention, no ordering dependency).
//! - The result of a run depends only on the seed and the chunk size, never
//!   on how many worker threads executed the chunks.
//! - All RNG calls are local to the owning thread; no synchronisation needed.
//!
//! The simulator itself only sees the [`RandomSource`] trait, so tests can
//! substitute a [`ScriptedSource`] that replays fixed dice and shuffle picks.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// Everything random the game engine needs.
pub trait RandomSource {
    /// One face of a standard six-sided die, uniform in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// A uniform index in `[0, len)`.  Used by deck shuffles.
    fn pick_index(&mut self, len: usize) -> usize;
}

// ── StreamRng ─────────────────────────────────────────────────────────────────

/// Per-chunk deterministic RNG.
///
/// Create one per chunk of games; never share one between threads.
pub struct StreamRng(SmallRng);

impl StreamRng {
    /// Seed deterministically from the run's global seed and a stream index.
    pub fn new(global_seed: u64, stream: u64) -> Self {
        let seed = global_seed ^ stream.wrapping_mul(MIXING_CONSTANT);
        StreamRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for StreamRng {
    #[inline]
    fn roll_die(&mut self) -> u8 {
        self.0.gen_range(1..=6)
    }

    #[inline]
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

// ── ScriptedSource ────────────────────────────────────────────────────────────

/// A [`RandomSource`] that replays fixed sequences.
///
/// Die faces and shuffle picks are served from two independent scripts.
/// Each script cycles back to its start when exhausted.  An empty dice
/// script always yields `1`; an empty pick script always yields `0`.  Picks
/// are reduced modulo the requested length.
///
/// Scripting the picks `0, 1, …, 14` makes every 15-card shuffle a no-op,
/// which keeps the deck order known in transition tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    dice:       VecDeque<u8>,
    picks:      VecDeque<usize>,
    dice_drawn: usize,
}

impl ScriptedSource {
    pub fn new<D, P>(dice: D, picks: P) -> Self
    where
        D: IntoIterator<Item = u8>,
        P: IntoIterator<Item = usize>,
    {
        Self {
            dice:       dice.into_iter().collect(),
            picks:      picks.into_iter().collect(),
            dice_drawn: 0,
        }
    }

    /// Script die faces from a list of `(d1, d2)` throws.
    pub fn from_rolls<I>(rolls: I, picks: Vec<usize>) -> Self
    where
        I: IntoIterator<Item = (u8, u8)>,
    {
        let dice: Vec<u8> = rolls.into_iter().flat_map(|(a, b)| [a, b]).collect();
        Self::new(dice, picks)
    }

    /// How many die faces have been served so far.
    pub fn dice_drawn(&self) -> usize {
        self.dice_drawn
    }
}

impl RandomSource for ScriptedSource {
    fn roll_die(&mut self) -> u8 {
        self.dice_drawn += 1;
        match self.dice.pop_front() {
            None => 1,
            Some(face) => {
                self.dice.push_back(face);
                face
            }
        }
    }

    fn pick_index(&mut self, len: usize) -> usize {
        match self.picks.pop_front() {
            None => 0,
            Some(pick) => {
                self.picks.push_back(pick);
                pick % len.max(1)
            }
        }
    }
}
