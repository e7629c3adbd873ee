//! Ports (trait boundaries) for external dependencies.
//!
//! These traits sit between the turn engine and everything that plugs into
//! it: players (human or learning agent) and notification sinks that render
//! game state. Following hexagonal architecture, the traits are owned by the
//! domain and implemented by adapters elsewhere.

pub mod observer;
pub mod participant;

pub use observer::{GameObserver, NullObserver};
pub use participant::Participant;
