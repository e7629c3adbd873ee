//! Bag-based learning agent
//!
//! A learning automaton in the "beads in matchboxes" family: one bag of
//! candidate take amounts per possible pile size, sampled uniformly, with
//! winning choices reinforced by appending them back into their bag.

pub mod bag;
pub mod builder;
pub mod learner;
pub mod table;

pub use bag::Bag;
pub use builder::LearningAgentBuilder;
pub use learner::{LearningAgent, LossResponse};
pub use table::{DEFAULT_TABLE_CAPACITY, SharedStrategyTable, StrategyTable};
