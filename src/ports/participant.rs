//! Participant port - the capability contract between the engine and players
//!
//! The engine is indifferent to participant kind: a human reading the
//! console and a learning agent sampling its strategy table are driven
//! through the same three capabilities.

use crate::Result;

/// A player in one of the two seats of a game session.
///
/// The engine calls these methods in a fixed rhythm: `observe_pile` before
/// every move request, `choose_move` to obtain the take amount, and
/// `observe_outcome` exactly once when the game ends.
pub trait Participant {
    /// Display name used in notifications.
    fn name(&self) -> &str;

    /// Tell the participant how many sticks remain before its move.
    ///
    /// For a learning agent this is the hook that fixes which strategy bag
    /// the next `choose_move` samples from. The engine guarantees
    /// `pile >= 1`.
    fn observe_pile(&mut self, pile: u32);

    /// Ask the participant how many sticks it takes this turn.
    ///
    /// The engine validates the returned amount against the remaining pile;
    /// implementations are free to return values the engine will reject,
    /// in which case they are asked again.
    fn choose_move(&mut self) -> Result<u32>;

    /// Tell the participant whether it won the finished game.
    ///
    /// Adaptive participants apply their reinforcement update here.
    fn observe_outcome(&mut self, won: bool);
}
