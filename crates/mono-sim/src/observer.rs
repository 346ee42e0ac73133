//! Run observer trait for progress reporting.

use std::time::Instant;

use mono_core::SimConfig;

use crate::Tally;

/// Progress of a run after one chunk of games has been folded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkReport {
    /// Index of the chunk just merged (also its RNG stream id).
    pub index:        u64,
    /// Games in that chunk.
    pub games:        u64,
    /// Games merged so far, this chunk included.
    pub games_done:   u64,
    /// Chunks in the whole run.
    pub chunks_total: u64,
}

/// Callbacks invoked by [`Runner::run`][crate::Runner::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Callbacks always run on the calling
/// thread, in chunk order, even when chunks were simulated in parallel.
///
/// # Example — completion counter
///
/// ```rust,ignore
/// struct Count(u64);
///
/// impl RunObserver for Count {
///     fn on_chunk_end(&mut self, report: &ChunkReport, _total: &Tally) {
///         self.0 = report.games_done;
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called once before any game is played.
    fn on_run_start(&mut self, _config: &SimConfig) {}

    /// Called after each chunk's tally is merged into the running `total`.
    fn on_chunk_end(&mut self, _report: &ChunkReport, _total: &Tally) {}

    /// Called once with the final tally, before `run` returns it.
    fn on_run_end(&mut self, _total: &Tally) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// Logs progress through the `log` facade every `every_chunks` chunks.
pub struct ProgressLogger {
    every_chunks: u64,
    started:      Option<Instant>,
}

impl ProgressLogger {
    pub fn new(every_chunks: u64) -> Self {
        Self { every_chunks: every_chunks.max(1), started: None }
    }
}

impl RunObserver for ProgressLogger {
    fn on_run_start(&mut self, config: &SimConfig) {
        self.started = Some(Instant::now());
        log::info!(
            "simulating {} games × {} moves in {} chunks (seed {})",
            config.games,
            config.moves_per_game,
            config.chunk_count(),
            config.seed,
        );
    }

    fn on_chunk_end(&mut self, report: &ChunkReport, _total: &Tally) {
        let last = report.index + 1 == report.chunks_total;
        if (report.index + 1) % self.every_chunks == 0 || last {
            log::info!(
                "chunk {}/{}: {} games done",
                report.index + 1,
                report.chunks_total,
                report.games_done,
            );
        }
    }

    fn on_run_end(&mut self, total: &Tally) {
        let secs = self.started.map(|t| t.elapsed().as_secs_f64()).unwrap_or(0.0);
        log::info!(
            "finished {} games ({} moves) in {:.3} s; most common end space: {}",
            total.games,
            total.moves,
            secs,
            total.most_visited(),
        );
    }
}
