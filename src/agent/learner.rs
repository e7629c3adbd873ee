//! Bag-based learning participant
//!
//! The agent samples its move from the bag for the observed pile size,
//! remembers what it chose where, and updates the shared table once the
//! game's outcome arrives: winning choices are appended back into their
//! bags, losing choices are forgotten or collapsed depending on the
//! configured loss rule.

use std::{fmt, str::FromStr};

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::{builder::LearningAgentBuilder, table::SharedStrategyTable};
use crate::{Error, Result, ports::Participant};

/// How the agent reacts to losing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum LossResponse {
    /// Forget the game: losing choices simply do not get reinforced.
    #[default]
    Forget,
    /// Collapse each losing choice down to a single occurrence in its bag,
    /// keeping the move possible but heavily deprioritized.
    Collapse,
}

impl fmt::Display for LossResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LossResponse::Forget => "forget",
            LossResponse::Collapse => "collapse",
        };
        f.write_str(label)
    }
}

impl FromStr for LossResponse {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forget" => Ok(LossResponse::Forget),
            "collapse" => Ok(LossResponse::Collapse),
            _ => Err(Error::ParseLossResponse {
                input: s.to_string(),
                expected: "forget, collapse".to_string(),
            }),
        }
    }
}

/// Learning participant backed by a (possibly shared) strategy table.
pub struct LearningAgent {
    name: String,
    table: SharedStrategyTable,
    loss_response: LossResponse,
    pile_at_turn: u32,
    /// Choice made at each pile size during the current game. Slot 0 is
    /// unused so the pile size indexes directly.
    pending: Vec<Option<u32>>,
    rng: StdRng,
}

impl fmt::Debug for LearningAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LearningAgent")
            .field("name", &self.name)
            .field("loss_response", &self.loss_response)
            .field("pile_at_turn", &self.pile_at_turn)
            .finish()
    }
}

impl LearningAgent {
    /// Create a new builder for constructing a learning agent.
    ///
    /// # Example
    /// ```
    /// use sticks::agent::{LearningAgent, LossResponse};
    ///
    /// let agent = LearningAgent::builder()
    ///     .name("AI 1")
    ///     .seed(42)
    ///     .loss_response(LossResponse::Collapse)
    ///     .untrained(20)
    ///     .build();
    /// ```
    pub fn builder() -> LearningAgentBuilder {
        LearningAgentBuilder::new()
    }

    pub(crate) fn from_parts(
        name: String,
        table: SharedStrategyTable,
        loss_response: LossResponse,
        rng: StdRng,
    ) -> Self {
        let capacity = table.borrow().capacity() as usize;
        LearningAgent {
            name,
            table,
            loss_response,
            pile_at_turn: 0,
            pending: vec![None; capacity + 1],
            rng,
        }
    }

    /// Handle to the agent's strategy table lineage.
    pub fn table(&self) -> SharedStrategyTable {
        SharedStrategyTable::clone(&self.table)
    }

    pub fn loss_response(&self) -> LossResponse {
        self.loss_response
    }

    /// Set or reset the agent's RNG seed.
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
    }
}

impl Participant for LearningAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn observe_pile(&mut self, pile: u32) {
        self.pile_at_turn = pile;
    }

    fn choose_move(&mut self) -> Result<u32> {
        let pile = self.pile_at_turn;
        if pile == 0 {
            return Err(Error::NoPileObserved);
        }
        // Forced move, nothing to learn.
        if pile == 1 {
            return Ok(1);
        }

        let choice = {
            let table = self.table.borrow();
            let bag = table.bag(pile)?;
            let drawn = if pile > 3 {
                bag.draw(&mut self.rng)
            } else {
                // Cap the candidates to the first `pile` entries so the
                // draw cannot exceed the remaining pile.
                bag.draw_prefix(&mut self.rng, pile as usize)
            };
            drawn.ok_or(Error::EmptyBag { pile })?
        };

        self.pending[pile as usize] = Some(choice);
        Ok(choice)
    }

    fn observe_outcome(&mut self, won: bool) {
        let loss_response = self.loss_response;
        let mut table = self.table.borrow_mut();
        for (pile, held) in self.pending.iter_mut().enumerate().skip(1) {
            let Some(choice) = held.take() else {
                continue;
            };
            let Ok(bag) = table.bag_mut(pile as u32) else {
                continue;
            };
            match (won, loss_response) {
                (true, _) => bag.reinforce(choice),
                (false, LossResponse::Forget) => {}
                (false, LossResponse::Collapse) => bag.collapse(choice),
            }
        }
    }
}
