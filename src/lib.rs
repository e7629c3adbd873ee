//! Game of Sticks engine and learning opponent
//!
//! This crate provides:
//! - A turn engine for the 1-2-3 stick subtraction game
//! - A bag-based learning agent (a "beads in matchboxes" automaton)
//! - A training loop for pre-training agents against each other
//! - Console plumbing for the interactive game modes

pub mod agent;
pub mod cli;
pub mod engine;
pub mod error;
pub mod ports;
pub mod training;

pub use agent::{
    Bag, DEFAULT_TABLE_CAPACITY, LearningAgent, LearningAgentBuilder, LossResponse,
    SharedStrategyTable, StrategyTable,
};
pub use engine::{GameSession, Slot};
pub use error::{Error, Result};
pub use ports::{GameObserver, NullObserver, Participant};
pub use training::{DEFAULT_TRAINING_GAMES, TrainingConfig, TrainingReport, TrainingSession};
