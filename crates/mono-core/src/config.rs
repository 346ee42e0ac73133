//! Run configuration.
//!
//! The board, the decks and the transition rules are fixed.  Moves per game
//! is a compile-time constant of the application.  Only the size of the run
//! can be overridden from the environment: how many independent games, the
//! master seed, and how the games are chunked across RNG streams and worker
//! threads.

use std::env;
use std::str::FromStr;

use crate::{MonoError, MonoResult};

/// Games in the reference run.
pub const DEFAULT_GAMES: u64 = 100_000_000;

/// Moves per game in the reference run.
pub const DEFAULT_MOVES_PER_GAME: u32 = 40;

/// Games per independent RNG stream.
pub const DEFAULT_CHUNK_GAMES: u64 = 100_000;

/// Top-level simulation configuration.
///
/// Typically built from compile-time constants by the application crate
/// (optionally overridden from the environment) and passed to the runner.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of independent games (trials) to simulate.
    pub games: u64,

    /// Dice throws per game.  Win/loss is not modelled; a game is simply
    /// this many moves.
    pub moves_per_game: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    /// Ignored without the `parallel` feature of `mono-sim`.
    pub num_threads: Option<usize>,

    /// Games per RNG stream.  Chunk `k` of the run is seeded from
    /// `(seed, k)`, so changing this value changes the results.
    pub chunk_games: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games:          DEFAULT_GAMES,
            moves_per_game: DEFAULT_MOVES_PER_GAME,
            seed:           42,
            num_threads:    None,
            chunk_games:    DEFAULT_CHUNK_GAMES,
        }
    }
}

impl SimConfig {
    /// Total dice throws across the whole run.
    #[inline]
    pub fn total_moves(&self) -> u64 {
        self.games * self.moves_per_game as u64
    }

    /// Number of RNG chunks the run is split into (last one may be short).
    #[inline]
    pub fn chunk_count(&self) -> u64 {
        if self.chunk_games == 0 {
            return 0;
        }
        self.games.div_ceil(self.chunk_games)
    }

    /// Number of games in chunk `k`.
    #[inline]
    pub fn chunk_len(&self, k: u64) -> u64 {
        let start = k * self.chunk_games;
        self.games.saturating_sub(start).min(self.chunk_games)
    }

    /// Apply `MONO_*` environment overrides on top of `self`.
    ///
    /// | Variable           | Field            |
    /// |--------------------|------------------|
    /// | `MONO_GAMES`       | `games`          |
    /// | `MONO_SEED`        | `seed`           |
    /// | `MONO_THREADS`     | `num_threads`    |
    /// | `MONO_CHUNK_GAMES` | `chunk_games`    |
    ///
    /// Unset variables leave the field untouched.  `moves_per_game` has no
    /// override.
    pub fn with_env_overrides(self) -> MonoResult<Self> {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Like [`with_env_overrides`](Self::with_env_overrides) but reads from
    /// an arbitrary lookup, so tests don't have to touch the process env.
    pub fn with_overrides<F>(mut self, lookup: F) -> MonoResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("MONO_GAMES") {
            self.games = parse_var("MONO_GAMES", &v)?;
        }
        if let Some(v) = lookup("MONO_SEED") {
            self.seed = parse_var("MONO_SEED", &v)?;
        }
        if let Some(v) = lookup("MONO_THREADS") {
            self.num_threads = Some(parse_var("MONO_THREADS", &v)?);
        }
        if let Some(v) = lookup("MONO_CHUNK_GAMES") {
            self.chunk_games = parse_var("MONO_CHUNK_GAMES", &v)?;
        }
        Ok(self)
    }

    /// Reject values the runner cannot execute.
    pub fn validate(&self) -> MonoResult<()> {
        if self.moves_per_game == 0 {
            return Err(MonoError::Config("moves_per_game must be > 0".into()));
        }
        if self.chunk_games == 0 {
            return Err(MonoError::Config("chunk_games must be > 0".into()));
        }
        if self.num_threads == Some(0) {
            return Err(MonoError::Config("num_threads must be > 0 when set".into()));
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> MonoResult<T> {
    // Accept `100_000_000` as written in source constants.
    let cleaned: String = value.trim().chars().filter(|&c| c != '_').collect();
    cleaned
        .parse()
        .map_err(|_| MonoError::Parse(format!("{key}={value:?} is not a valid number")))
}
