//! CSV output backend.
//!
//! Creates `tally.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use mono_core::SimConfig;
use mono_sim::Tally;

use crate::writer::TallyWriter;
use crate::{OutputResult, TallyRow};

/// File name written inside the output directory.
pub const TALLY_FILE: &str = "tally.csv";

/// Writes one row per board space.
pub struct CsvWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `tally.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(dir.join(TALLY_FILE))?;
        rows.write_record(["space", "name", "lands", "ends", "land_share", "end_share"])?;
        Ok(Self { rows, finished: false })
    }
}

impl TallyWriter for CsvWriter {
    fn write_tally(&mut self, _config: &SimConfig, tally: &Tally) -> OutputResult<()> {
        for row in TallyRow::from_tally(tally) {
            self.rows.write_record(&[
                row.space.to_string(),
                row.name.to_string(),
                row.lands.to_string(),
                row.ends.to_string(),
                format!("{:.6}", row.land_share),
                format!("{:.6}", row.end_share),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
