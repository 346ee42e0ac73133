//! `mono-core` — foundational types for the `rust_mono` Monte Carlo simulator.
//!
//! This crate is a dependency of every other `mono-*` crate.  It has no
//! `mono-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`board`]       | `Space`, special-space sets, `nearest_railroad`       |
//! | [`dice`]        | `Roll` (two six-sided dice)                           |
//! | [`rng`]         | `RandomSource`, `StreamRng`, `ScriptedSource`         |
//! | [`config`]      | `SimConfig` (trial count, moves, seed, threads)       |
//! | [`error`]       | `MonoError`, `MonoResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod board;
pub mod config;
pub mod dice;
pub mod error;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use board::{Space, SPACES, nearest_railroad};
pub use config::SimConfig;
pub use dice::Roll;
pub use error::{MonoError, MonoResult};
pub use rng::{RandomSource, ScriptedSource, StreamRng};
