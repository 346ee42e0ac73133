//! The `Runner` and its trial loop.

use mono_core::{SimConfig, StreamRng};

use crate::observer::ChunkReport;
use crate::{GameSimulator, RunObserver, SimResult, Tally};

/// Drives every game of a run and returns the finished [`Tally`].
///
/// The run is split into chunks of `config.chunk_games` games.  Chunk `k`:
///
/// 1. gets its own [`StreamRng`] seeded from `(config.seed, k)`,
/// 2. gets a fresh [`GameSimulator`] (decks in printed order),
/// 3. plays its games sequentially into a private `Tally`.
///
/// Chunk tallies are merged element-wise in ascending chunk order.  Because
/// no state crosses a chunk boundary, the result depends only on the
/// configuration, never on thread count or scheduling.
///
/// Create via [`RunnerBuilder`][crate::RunnerBuilder].
pub struct Runner {
    pub(crate) config: SimConfig,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl Runner {
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run every game and return the aggregated counters.
    ///
    /// The tally is only handed out after the last chunk has been merged.
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: RunObserver>(&self, observer: &mut O) -> SimResult<Tally> {
        observer.on_run_start(&self.config);

        let chunks_total = self.config.chunk_count();
        let mut total = Tally::new();
        let mut games_done = 0;

        for (index, chunk) in self.simulate_chunks() {
            total.merge(&chunk);
            games_done += chunk.games;
            let report = ChunkReport { index, games: chunk.games, games_done, chunks_total };
            log::debug!("merged chunk {index} ({} games)", chunk.games);
            observer.on_chunk_end(&report, &total);
        }

        observer.on_run_end(&total);
        Ok(total)
    }

    /// Simulate chunk `k` in isolation.
    pub fn run_chunk(&self, k: u64) -> Tally {
        let mut rng = StreamRng::new(self.config.seed, k);
        let mut game = GameSimulator::new(self.config.moves_per_game);
        let mut tally = Tally::new();
        game.play_games(&mut rng, self.config.chunk_len(k), &mut tally);
        tally
    }

    #[cfg(not(feature = "parallel"))]
    fn simulate_chunks(&self) -> impl Iterator<Item = (u64, Tally)> + '_ {
        (0..self.config.chunk_count()).map(|k| (k, self.run_chunk(k)))
    }

    /// All chunks on the worker pool; results come back in chunk order.
    #[cfg(feature = "parallel")]
    fn simulate_chunks(&self) -> impl Iterator<Item = (u64, Tally)> + '_ {
        use rayon::prelude::*;

        let n = self.config.chunk_count();
        let work = || -> Vec<Tally> {
            (0..n).into_par_iter().map(|k| self.run_chunk(k)).collect()
        };
        let tallies = match &self.pool {
            Some(pool) => pool.install(work),
            None       => work(),
        };
        (0..n).zip(tallies)
    }
}
