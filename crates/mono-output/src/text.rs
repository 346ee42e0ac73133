//! Plain-text backend: the counters, one per line.

use std::io::{BufWriter, Write};

use mono_core::SimConfig;
use mono_sim::Tally;

use crate::OutputResult;
use crate::writer::TallyWriter;

/// Banner line that opens every text report.
pub const BANNER: &str = "MONO-RS";

/// Writes a run's counters as plain text:
///
/// ```text
/// MONO-RS
/// RUNNING <games> GAMES
/// PLAYING <moves> MOVES
/// DONE!
/// LANDS
/// <lands[0]>
/// …
/// <lands[39]>
/// ENDS
/// <ends[0]>
/// …
/// <ends[39]>
/// ```
pub struct TextWriter<W: Write> {
    out:      BufWriter<W>,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out: BufWriter::new(out), finished: false }
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.out.flush()?;
        self.out.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> TallyWriter for TextWriter<W> {
    fn write_tally(&mut self, config: &SimConfig, tally: &Tally) -> OutputResult<()> {
        writeln!(self.out, "{BANNER}")?;
        writeln!(self.out, "RUNNING {} GAMES", config.games)?;
        writeln!(self.out, "PLAYING {} MOVES", config.moves_per_game)?;
        writeln!(self.out, "DONE!")?;
        writeln!(self.out, "LANDS")?;
        for count in &tally.lands {
            writeln!(self.out, "{count}")?;
        }
        writeln!(self.out, "ENDS")?;
        for count in &tally.ends {
            writeln!(self.out, "{count}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
