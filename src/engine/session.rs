//! Game session and turn loop
//!
//! Two participants alternately remove 1-3 sticks from a shared pile;
//! whoever removes the last stick wins. The engine validates each choice
//! against the remaining pile, routes notifications by slot tag, and
//! reports the outcome to both participants when the pile empties.

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{GameObserver, Participant},
};

/// Identifies one of the two fixed participant seats.
///
/// Turn order is defined by slot: `First` opens the game, and ownership
/// toggles to the other slot after every pile-reducing move. Notifications
/// carry the slot so sinks and callers never compare participants by
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// The opposite seat.
    pub fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }
}

/// A single game of sticks between two participants.
///
/// The session borrows its participants for its own lifetime, so the same
/// agent instances can be reused across many sequential games (the
/// training loop relies on this).
pub struct GameSession<'a> {
    pile: u32,
    participants: [&'a mut dyn Participant; 2],
    active: Slot,
}

impl<'a> GameSession<'a> {
    /// Create a session over a fresh pile. `first` opens the game.
    ///
    /// # Errors
    /// Returns an error if `initial_pile` is zero.
    pub fn new(
        initial_pile: u32,
        first: &'a mut dyn Participant,
        second: &'a mut dyn Participant,
    ) -> Result<Self> {
        if initial_pile == 0 {
            return Err(Error::InvalidPileSize { size: initial_pile });
        }
        Ok(GameSession {
            pile: initial_pile,
            participants: [first, second],
            active: Slot::First,
        })
    }

    /// Sticks remaining on the table.
    pub fn pile(&self) -> u32 {
        self.pile
    }

    /// Seat that acts next.
    pub fn active(&self) -> Slot {
        self.active
    }

    /// Drive the game to completion and return the winning slot.
    ///
    /// Each turn: the active participant is told the pile size, asked for a
    /// move, and the choice is validated against `[1, pile]`. An illegal
    /// choice is reported to the observer and the same participant retries
    /// with the pile unchanged; the turn does not advance. Taking exactly
    /// the remaining pile wins, and both participants are told the outcome.
    ///
    /// # Errors
    /// Propagates participant and observer failures (e.g. console input
    /// closing mid-game).
    pub fn run(&mut self, observer: &mut dyn GameObserver) -> Result<Slot> {
        loop {
            let active = self.active;
            let seat = active.index();

            self.participants[seat].observe_pile(self.pile);
            observer.on_pile_update(self.pile, active, self.participants[seat].name())?;

            let choice = self.participants[seat].choose_move()?;

            if choice < 1 || choice > self.pile {
                observer.on_illegal_move(active, self.participants[seat].name(), choice, self.pile)?;
                continue;
            }

            if choice == self.pile {
                self.pile = 0;
                observer.on_move_taken(active, self.participants[seat].name(), choice, 0)?;
                observer.on_winner(active, self.participants[seat].name())?;
                for slot in [Slot::First, Slot::Second] {
                    self.participants[slot.index()].observe_outcome(slot == active);
                }
                return Ok(active);
            }

            self.pile -= choice;
            observer.on_move_taken(active, self.participants[seat].name(), choice, self.pile)?;
            self.active = active.other();
        }
    }
}
