use mono_core::MonoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck needs exactly {expected} cards, got {got}")]
    WrongSize {
        expected: usize,
        got:      usize,
    },

    #[error(transparent)]
    Core(#[from] MonoError),
}

pub type DeckResult<T> = Result<T, DeckError>;
