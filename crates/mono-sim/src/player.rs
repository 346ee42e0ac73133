//! Per-game token state.

use mono_core::Space;

/// Jail sentence handed out by every route into jail, in turns.
pub const JAIL_SENTENCE: u8 = 2;

/// Consecutive doubles that send the token to jail.
pub const DOUBLES_LIMIT: u8 = 3;

/// The state of the single token during one game.
///
/// Created fresh at the start of every game; nothing carries over between
/// games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    /// Where the token stands.
    pub position: Space,

    /// Turns still to be served in jail.  `0` means free to move.
    pub jail_turns: u8,

    /// Doubles thrown in a row.  Reset by any non-double.
    pub doubles_streak: u8,
}

impl PlayerState {
    /// A token on GO with no jail time and no doubles streak.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn in_jail(&self) -> bool {
        self.jail_turns > 0
    }

    /// Move to the jail space and start a fresh sentence.
    #[inline]
    pub fn send_to_jail(&mut self) {
        self.position = Space::JAIL;
        self.jail_turns = JAIL_SENTENCE;
    }
}
