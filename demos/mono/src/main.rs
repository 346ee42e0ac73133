//! mono — long-run landing statistics for a 40-space board.
//!
//! Plays `GAMES` independent games of `MOVES` dice throws each and prints
//! how often every space was landed on and how often a move ended there.
//! Counters go to stdout; progress logs go to stderr (`RUST_LOG=info`).
//!
//! The run size is fixed at compile time.  For quick experiments the
//! `MONO_GAMES`, `MONO_SEED`, `MONO_THREADS` and `MONO_CHUNK_GAMES`
//! environment variables override the constants (`MOVES` stays fixed), and
//! `MONO_CSV_DIR` additionally writes a `tally.csv` there.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use mono_core::SimConfig;
use mono_output::{CsvWriter, TallyWriter, TextWriter};
use mono_sim::{ProgressLogger, RunnerBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const GAMES:       u64 = 100_000_000;
const MOVES:       u32 = 40;
const SEED:        u64 = 42;
const CHUNK_GAMES: u64 = 100_000;
const LOG_EVERY:   u64 = 100;   // chunks between progress lines

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    // 1. Config: constants, then environment overrides.
    let config = SimConfig {
        games:          GAMES,
        moves_per_game: MOVES,
        seed:           SEED,
        num_threads:    None, // all logical cores
        chunk_games:    CHUNK_GAMES,
    }
    .with_env_overrides()?;

    // 2. Build and run.
    let runner = RunnerBuilder::new(config).build()?;
    let t0 = Instant::now();
    let tally = runner.run(&mut ProgressLogger::new(LOG_EVERY))?;
    log::info!("simulation complete in {:.3} s", t0.elapsed().as_secs_f64());

    // 3. Print counters.
    let mut out = TextWriter::new(io::stdout().lock());
    out.write_tally(runner.config(), &tally)?;
    out.finish()?;

    // 4. Optional CSV.
    if let Some(dir) = std::env::var_os("MONO_CSV_DIR").map(PathBuf::from) {
        std::fs::create_dir_all(&dir)?;
        let mut csv = CsvWriter::new(&dir)?;
        csv.write_tally(runner.config(), &tally)?;
        csv.finish()?;
        log::info!("wrote {}", dir.join(mono_output::csv::TALLY_FILE).display());
    }

    Ok(())
}
