//! Plain data row type written by output backends.

use mono_core::Space;
use mono_sim::Tally;

/// One board space's share of a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TallyRow {
    pub space:      u8,
    pub name:       &'static str,
    pub lands:      u64,
    pub ends:       u64,
    /// `lands / Σ lands`.
    pub land_share: f64,
    /// `ends / Σ ends`.
    pub end_share:  f64,
}

impl TallyRow {
    /// One row per space, in board order.
    pub fn from_tally(tally: &Tally) -> Vec<TallyRow> {
        Space::all()
            .map(|space| TallyRow {
                space:      space.0,
                name:       space.name(),
                lands:      tally.lands_at(space),
                ends:       tally.ends_at(space),
                land_share: tally.land_share(space),
                end_share:  tally.end_share(space),
            })
            .collect()
    }
}
