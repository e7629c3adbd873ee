//! Candidate bags for the learning agent
//!
//! A bag is an insertion-ordered multiset of take amounts. Order matters:
//! at small pile sizes the agent samples only a prefix of the bag, so the
//! untrained seed always occupies the first three positions until a
//! collapse rewrites them.

use rand::{Rng, prelude::IndexedRandom};

/// Candidate take amounts for one remaining-stick count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag {
    entries: Vec<u32>,
}

impl Bag {
    /// The untrained seed: one candidate each of taking 1, 2, or 3.
    pub fn seeded() -> Self {
        Bag {
            entries: vec![1, 2, 3],
        }
    }

    /// Number of candidates currently in the bag.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All candidates in insertion order.
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// How many occurrences of `value` the bag holds.
    pub fn count_of(&self, value: u32) -> usize {
        self.entries.iter().filter(|&&v| v == value).count()
    }

    /// Draw uniformly from the entire bag.
    pub fn draw(&self, rng: &mut impl Rng) -> Option<u32> {
        self.entries.choose(rng).copied()
    }

    /// Draw uniformly from the first `limit` entries (or the whole bag if
    /// it is shorter). This caps the candidates at small pile sizes to
    /// moves that cannot exceed the remaining pile.
    pub fn draw_prefix(&self, rng: &mut impl Rng, limit: usize) -> Option<u32> {
        let end = limit.min(self.entries.len());
        self.entries[..end].choose(rng).copied()
    }

    /// Add one more occurrence of `value`.
    pub fn reinforce(&mut self, value: u32) {
        self.entries.push(value);
    }

    /// Remove every occurrence of `value`, then put a single one back.
    /// The surviving occurrence sits at the end of the bag.
    pub fn collapse(&mut self, value: u32) {
        self.entries.retain(|&v| v != value);
        self.entries.push(value);
    }
}
