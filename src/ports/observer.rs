//! Observer port - structured notifications emitted by the turn engine
//!
//! The engine never formats display strings; it reports what happened,
//! tagged with the slot it happened to, and sinks decide how to render it.
//! All methods default to no-ops so observers only implement the events
//! they care about.

use crate::{Result, engine::Slot};

/// Receives game events as they happen.
///
/// The console renderer in the CLI layer implements this; training runs
/// use [`NullObserver`] to suppress all output.
pub trait GameObserver {
    /// Called at the top of every turn, including retries after an
    /// illegal move.
    fn on_pile_update(&mut self, _pile: u32, _active: Slot, _name: &str) -> Result<()> {
        Ok(())
    }

    /// Called after a validated move reduces the pile.
    fn on_move_taken(
        &mut self,
        _slot: Slot,
        _name: &str,
        _taken: u32,
        _remaining: u32,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a participant's choice falls outside `[1, pile]`.
    /// The same participant will be asked again with the pile unchanged.
    fn on_illegal_move(
        &mut self,
        _slot: Slot,
        _name: &str,
        _attempted: u32,
        _pile: u32,
    ) -> Result<()> {
        Ok(())
    }

    /// Called once when a participant takes the last stick and wins.
    fn on_winner(&mut self, _slot: Slot, _name: &str) -> Result<()> {
        Ok(())
    }
}

/// Observer that swallows every event. Used for quiet training games.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}
