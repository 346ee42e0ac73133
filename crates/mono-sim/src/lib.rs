//! `mono-sim` — single-game engine and trial runner for rust_mono.
//!
//! # Pipeline
//!
//! ```text
//! for chunk k in 0..config.chunk_count():         (parallel with `parallel`)
//!   rng  = StreamRng(seed, k); game = GameSimulator; tally_k = Tally
//!   for each game in the chunk:
//!     shuffle chance, shuffle chest, token on GO
//!     for each of moves_per_game moves: GameSimulator::step
//! total = Σ tally_k                                 (sequential, chunk order)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Simulates chunks on Rayon's thread pool.               |
//! | `serde`    | Serde derives on `PlayerState` and `MoveRecord`.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mono_core::SimConfig;
//! use mono_sim::{NoopObserver, RunnerBuilder};
//!
//! let runner = RunnerBuilder::new(SimConfig::default()).games(1_000).build()?;
//! let tally = runner.run(&mut NoopObserver)?;
//! assert_eq!(tally.total_ends(), 40_000);
//! ```

pub mod builder;
pub mod error;
pub mod game;
pub mod observer;
pub mod player;
pub mod runner;
pub mod tally;


pub use builder::RunnerBuilder;
pub use error::{SimError, SimResult};
pub use game::{GameSimulator, MoveRecord, apply_card};
pub use observer::{ChunkReport, NoopObserver, ProgressLogger, RunObserver};
pub use player::PlayerState;
pub use runner::Runner;
pub use tally::Tally;
