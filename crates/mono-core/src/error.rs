//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `MonoError` as one
//! variant.  Nothing in the per-move hot path returns an error; these
//! variants only surface while configuring a run or decoding card lists.

use thiserror::Error;

/// The top-level error type for `mono-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum MonoError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown card code {0}")]
    UnknownCard(i8),
}

/// Shorthand result type for all `mono-*` crates.
pub type MonoResult<T> = Result<T, MonoError>;
