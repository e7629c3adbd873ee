#![allow(dead_code)]

use std::collections::VecDeque;

use sticks::{GameObserver, Participant, Result, Slot};

/// Participant that plays a fixed move sequence and records what it saw.
pub struct Scripted {
    pub name: String,
    pub moves: VecDeque<u32>,
    pub piles_seen: Vec<u32>,
    pub outcome: Option<bool>,
}

impl Scripted {
    pub fn new(name: &str, moves: &[u32]) -> Self {
        Scripted {
            name: name.to_string(),
            moves: moves.iter().copied().collect(),
            piles_seen: Vec::new(),
            outcome: None,
        }
    }

    pub fn script_exhausted(&self) -> bool {
        self.moves.is_empty()
    }
}

impl Participant for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    fn observe_pile(&mut self, pile: u32) {
        self.piles_seen.push(pile);
    }

    fn choose_move(&mut self) -> Result<u32> {
        Ok(self.moves.pop_front().expect("script exhausted"))
    }

    fn observe_outcome(&mut self, won: bool) {
        self.outcome = Some(won);
    }
}

/// Participant that always takes a single stick.
pub struct TakeOne {
    pub name: String,
    pub outcome: Option<bool>,
}

impl TakeOne {
    pub fn new(name: &str) -> Self {
        TakeOne {
            name: name.to_string(),
            outcome: None,
        }
    }
}

impl Participant for TakeOne {
    fn name(&self) -> &str {
        &self.name
    }

    fn observe_pile(&mut self, _pile: u32) {}

    fn choose_move(&mut self) -> Result<u32> {
        Ok(1)
    }

    fn observe_outcome(&mut self, won: bool) {
        self.outcome = Some(won);
    }
}

/// Observer that records every event it receives.
#[derive(Debug, Default)]
pub struct EventLog {
    /// (active slot, pile) at the top of each turn
    pub pile_updates: Vec<(Slot, u32)>,
    /// (slot, taken, remaining) for each validated move
    pub moves: Vec<(Slot, u32, u32)>,
    /// (slot, attempted, pile) for each rejected move
    pub illegal: Vec<(Slot, u32, u32)>,
    pub winner: Option<(Slot, String)>,
}

impl GameObserver for EventLog {
    fn on_pile_update(&mut self, pile: u32, active: Slot, _name: &str) -> Result<()> {
        self.pile_updates.push((active, pile));
        Ok(())
    }

    fn on_move_taken(&mut self, slot: Slot, _name: &str, taken: u32, remaining: u32) -> Result<()> {
        self.moves.push((slot, taken, remaining));
        Ok(())
    }

    fn on_illegal_move(&mut self, slot: Slot, _name: &str, attempted: u32, pile: u32) -> Result<()> {
        self.illegal.push((slot, attempted, pile));
        Ok(())
    }

    fn on_winner(&mut self, slot: Slot, name: &str) -> Result<()> {
        self.winner = Some((slot, name.to_string()));
        Ok(())
    }
}
