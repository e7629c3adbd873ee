//! Builder pattern for LearningAgent construction
//!
//! Makes the table decision explicit: an agent either starts from a fresh
//! untrained seed or aliases an existing shared lineage.

use rand::{SeedableRng, rngs::StdRng};

use super::{
    learner::{LearningAgent, LossResponse},
    table::{DEFAULT_TABLE_CAPACITY, SharedStrategyTable, StrategyTable},
};
use crate::Result;

#[derive(Debug)]
enum TableSource {
    Fresh { capacity: u32 },
    Shared(SharedStrategyTable),
}

/// Builder for constructing LearningAgent instances.
///
/// # Examples
///
/// ```
/// use sticks::agent::{LearningAgent, StrategyTable};
///
/// // Naive agent with its own untrained table
/// let naive = LearningAgent::builder().untrained(20).build().unwrap();
///
/// // Two agents of one training lineage
/// let table = StrategyTable::untrained(20).unwrap().into_shared();
/// let a = LearningAgent::builder()
///     .name("AI 1")
///     .shared_table(table.clone())
///     .build()
///     .unwrap();
/// let b = LearningAgent::builder()
///     .name("AI 2")
///     .shared_table(table)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct LearningAgentBuilder {
    name: Option<String>,
    seed: Option<u64>,
    loss_response: LossResponse,
    table: TableSource,
}

impl LearningAgentBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the random seed for deterministic draws.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set how the agent reacts to losses.
    pub fn loss_response(mut self, loss_response: LossResponse) -> Self {
        self.loss_response = loss_response;
        self
    }

    /// Start from a fresh untrained table covering pile sizes
    /// 1..=capacity.
    pub fn untrained(mut self, capacity: u32) -> Self {
        self.table = TableSource::Fresh { capacity };
        self
    }

    /// Alias an existing table lineage instead of seeding a new one.
    pub fn shared_table(mut self, table: SharedStrategyTable) -> Self {
        self.table = TableSource::Shared(table);
        self
    }

    /// Build the agent with the configured parameters.
    ///
    /// # Errors
    /// Returns an error if a fresh table is requested with zero capacity.
    pub fn build(self) -> Result<LearningAgent> {
        let table = match self.table {
            TableSource::Fresh { capacity } => StrategyTable::untrained(capacity)?.into_shared(),
            TableSource::Shared(table) => table,
        };

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };

        Ok(LearningAgent::from_parts(
            self.name.unwrap_or_else(|| "AI".to_string()),
            table,
            self.loss_response,
            rng,
        ))
    }
}

impl Default for LearningAgentBuilder {
    fn default() -> Self {
        Self {
            name: None,
            seed: None,
            loss_response: LossResponse::default(),
            table: TableSource::Fresh {
                capacity: DEFAULT_TABLE_CAPACITY,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Participant;

    #[test]
    fn builder_defaults() {
        let agent = LearningAgentBuilder::new()
            .build()
            .expect("build should succeed");
        assert_eq!(agent.name(), "AI");
        assert_eq!(agent.loss_response(), LossResponse::Forget);
        assert_eq!(agent.table().borrow().capacity(), DEFAULT_TABLE_CAPACITY);
    }

    #[test]
    fn fresh_tables_are_isolated() {
        let a = LearningAgentBuilder::new().untrained(10).build().unwrap();
        let b = LearningAgentBuilder::new().untrained(10).build().unwrap();

        a.table().borrow_mut().bag_mut(5).unwrap().reinforce(2);
        assert_eq!(b.table().borrow().bag(5).unwrap().count_of(2), 1);
    }

    #[test]
    fn shared_tables_alias() {
        let table = StrategyTable::untrained(10).unwrap().into_shared();
        let a = LearningAgentBuilder::new()
            .shared_table(table.clone())
            .build()
            .unwrap();
        let b = LearningAgentBuilder::new()
            .shared_table(table)
            .build()
            .unwrap();

        a.table().borrow_mut().bag_mut(5).unwrap().reinforce(2);
        assert_eq!(b.table().borrow().bag(5).unwrap().count_of(2), 2);
    }

    #[test]
    fn zero_capacity_fails_to_build() {
        assert!(LearningAgentBuilder::new().untrained(0).build().is_err());
    }
}
