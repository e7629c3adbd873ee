//! Pre-training loop for the learning agent
//!
//! Training plays quiet agent-vs-agent games: two learning agents alias
//! one strategy table, every game reinforces the winner's choices, and
//! after enough games the shared table encodes a strong policy a human
//! then plays against.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    agent::{LearningAgent, LossResponse, SharedStrategyTable, StrategyTable},
    engine::{GameSession, Slot},
    ports::NullObserver,
};

/// Number of quiet games played when pre-training an agent.
pub const DEFAULT_TRAINING_GAMES: usize = 100_000;

/// Interval (in games) between win-rate history samples.
const HISTORY_SAMPLE_INTERVAL: usize = 1_000;

/// Configuration for a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training games
    pub games: usize,

    /// Initial pile size for every game
    pub pile_size: u32,

    /// Random seed; the second agent draws from `seed + 1`
    pub seed: Option<u64>,

    /// Loss rule applied by both agents
    pub loss_response: LossResponse,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_TRAINING_GAMES,
            pile_size: 10,
            seed: None,
            loss_response: LossResponse::default(),
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Total games played
    pub total_games: usize,

    /// Games won by the opening agent
    pub first_wins: usize,

    /// Games won by the second agent
    pub second_wins: usize,

    /// Opening agent's win rate
    pub first_win_rate: f64,

    /// Opening agent's win rate sampled every thousand games
    pub win_rate_history: Vec<f64>,
}

impl TrainingReport {
    fn new(
        total_games: usize,
        first_wins: usize,
        second_wins: usize,
        win_rate_history: Vec<f64>,
    ) -> Self {
        let first_win_rate = if total_games > 0 {
            first_wins as f64 / total_games as f64
        } else {
            0.0
        };
        Self {
            total_games,
            first_wins,
            second_wins,
            first_win_rate,
            win_rate_history,
        }
    }

    /// Save the report to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a report from a JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let report = serde_json::from_reader(file)?;
        Ok(report)
    }
}

/// A training session mutating one shared table lineage.
pub struct TrainingSession {
    config: TrainingConfig,
    table: SharedStrategyTable,
    pub games_played: usize,
}

impl TrainingSession {
    /// Create a session over a fresh table lineage sized to the pile.
    ///
    /// # Errors
    /// Returns an error if the configured pile size is zero.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        let table = StrategyTable::untrained(config.pile_size)?.into_shared();
        Self::with_table(table, config)
    }

    /// Train an existing lineage further.
    ///
    /// # Errors
    /// Returns an error if the table does not cover the configured pile.
    pub fn with_table(table: SharedStrategyTable, config: TrainingConfig) -> Result<Self> {
        let capacity = table.borrow().capacity();
        if capacity < config.pile_size {
            return Err(Error::PileOutOfRange {
                pile: config.pile_size,
                capacity,
            });
        }
        Ok(Self {
            config,
            table,
            games_played: 0,
        })
    }

    /// Handle to the lineage being trained.
    pub fn table(&self) -> SharedStrategyTable {
        Rc::clone(&self.table)
    }

    /// Run the configured number of quiet games.
    ///
    /// # Errors
    /// Propagates engine failures; agent-vs-agent games produce none in
    /// practice.
    pub fn train(&mut self) -> Result<TrainingReport> {
        self.train_observed(|_| {})
    }

    /// Like [`train`](Self::train), invoking `after_game` with the running
    /// game count after every game. Progress bars hook in here.
    pub fn train_observed(&mut self, mut after_game: impl FnMut(usize)) -> Result<TrainingReport> {
        let mut first = self.lineage_agent("AI 1", self.config.seed)?;
        let mut second = self.lineage_agent("AI 2", self.config.seed.map(|s| s.wrapping_add(1)))?;

        let mut first_wins = 0;
        let mut second_wins = 0;
        let mut win_rate_history = Vec::new();

        for _ in 0..self.config.games {
            let mut session = GameSession::new(self.config.pile_size, &mut first, &mut second)?;
            match session.run(&mut NullObserver)? {
                Slot::First => first_wins += 1,
                Slot::Second => second_wins += 1,
            }
            self.games_played += 1;

            if self.games_played % HISTORY_SAMPLE_INTERVAL == 0 {
                win_rate_history.push(first_wins as f64 / self.games_played as f64);
            }
            after_game(self.games_played);
        }

        Ok(TrainingReport::new(
            self.config.games,
            first_wins,
            second_wins,
            win_rate_history,
        ))
    }

    fn lineage_agent(&self, name: &str, seed: Option<u64>) -> Result<LearningAgent> {
        let mut builder = LearningAgent::builder()
            .name(name)
            .loss_response(self.config.loss_response)
            .shared_table(self.table());
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        builder.build()
    }
}
