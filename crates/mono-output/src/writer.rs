//! The `TallyWriter` trait implemented by all backend writers.

use mono_core::SimConfig;
use mono_sim::Tally;

use crate::OutputResult;

/// Trait implemented by the text and CSV writers.
pub trait TallyWriter {
    /// Write the finished tally of a run described by `config`.
    fn write_tally(&mut self, config: &SimConfig, tally: &Tally) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
