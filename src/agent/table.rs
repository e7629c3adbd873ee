//! Shared strategy table
//!
//! The table is the agent's learned policy: one [`Bag`] per possible
//! remaining-stick count. Agents of the same training lineage alias one
//! table through a shared handle; sharing versus a fresh isolated seed is
//! decided explicitly at construction time, never through hidden global
//! state.

use std::{cell::RefCell, rc::Rc};

use super::bag::Bag;
use crate::{Error, Result};

/// Default number of bags in a fresh table, covering pile sizes well past
/// the recommended 10-100 range.
pub const DEFAULT_TABLE_CAPACITY: u32 = 100;

/// Handle to a strategy table shared by every agent of one lineage.
///
/// Execution is single-threaded (the game blocks on console input at
/// most), so a reference-counted cell is all the sharing needs.
pub type SharedStrategyTable = Rc<RefCell<StrategyTable>>;

/// Learned policy: bags indexed by remaining-stick count, 1..=capacity.
///
/// The bag at index 1 is kept even though the move there is forced;
/// uniform indexing keeps the reinforcement bookkeeping trivial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyTable {
    bags: Vec<Bag>,
}

impl StrategyTable {
    /// Fresh untrained table covering pile sizes 1..=capacity.
    ///
    /// # Errors
    /// Returns an error if `capacity` is zero.
    pub fn untrained(capacity: u32) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidPileSize { size: 0 });
        }
        Ok(StrategyTable {
            bags: (0..capacity).map(|_| Bag::seeded()).collect(),
        })
    }

    /// Largest pile size this table covers.
    pub fn capacity(&self) -> u32 {
        self.bags.len() as u32
    }

    /// The bag for a given remaining-stick count.
    ///
    /// # Errors
    /// Returns an error if `pile` is zero or beyond capacity.
    pub fn bag(&self, pile: u32) -> Result<&Bag> {
        self.index(pile).map(|i| &self.bags[i])
    }

    /// Mutable access to the bag for a given remaining-stick count.
    ///
    /// # Errors
    /// Returns an error if `pile` is zero or beyond capacity.
    pub fn bag_mut(&mut self, pile: u32) -> Result<&mut Bag> {
        self.index(pile).map(|i| &mut self.bags[i])
    }

    /// Total candidate count across all bags. An untrained table holds
    /// exactly `3 * capacity`.
    pub fn total_entries(&self) -> usize {
        self.bags.iter().map(Bag::len).sum()
    }

    /// Reset every bag to the untrained seed.
    pub fn reset(&mut self) {
        for bag in &mut self.bags {
            *bag = Bag::seeded();
        }
    }

    /// Wrap the table in a shareable handle.
    pub fn into_shared(self) -> SharedStrategyTable {
        Rc::new(RefCell::new(self))
    }

    fn index(&self, pile: u32) -> Result<usize> {
        if pile == 0 || pile > self.capacity() {
            return Err(Error::PileOutOfRange {
                pile,
                capacity: self.capacity(),
            });
        }
        Ok((pile - 1) as usize)
    }
}
