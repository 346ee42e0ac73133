//! Fluent builder for constructing a [`Runner`].

use mono_core::SimConfig;

use crate::{Runner, SimResult};

/// Fluent builder for [`Runner`].
///
/// Starts from a [`SimConfig`] (use `SimConfig::default()` for the
/// reference run) and lets callers override individual fields.
///
/// | Method             | Field                    |
/// |--------------------|--------------------------|
/// | `.games(n)`        | `config.games`           |
/// | `.moves(n)`        | `config.moves_per_game`  |
/// | `.seed(s)`         | `config.seed`            |
/// | `.threads(n)`      | `config.num_threads`     |
/// | `.chunk_games(n)`  | `config.chunk_games`     |
///
/// # Example
///
/// ```rust,ignore
/// let runner = RunnerBuilder::new(SimConfig::default())
///     .games(1_000)
///     .seed(7)
///     .build()?;
/// let tally = runner.run(&mut NoopObserver)?;
/// ```
pub struct RunnerBuilder {
    config: SimConfig,
}

impl RunnerBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    pub fn games(mut self, games: u64) -> Self {
        self.config.games = games;
        self
    }

    pub fn moves(mut self, moves_per_game: u32) -> Self {
        self.config.moves_per_game = moves_per_game;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn threads(mut self, num_threads: usize) -> Self {
        self.config.num_threads = Some(num_threads);
        self
    }

    pub fn chunk_games(mut self, chunk_games: u64) -> Self {
        self.config.chunk_games = chunk_games;
        self
    }

    /// Validate the configuration and return a ready-to-run [`Runner`].
    ///
    /// Invalid settings surface as `SimError::Core(MonoError::Config(..))`.
    pub fn build(self) -> SimResult<Runner> {
        self.config.validate()?;

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None    => None,
        };

        Ok(Runner {
            config: self.config,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
