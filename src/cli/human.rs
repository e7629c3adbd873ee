//! Human participant backed by console I/O

use std::io::{BufRead, Write};

use super::io::read_bounded;
use crate::{Result, ports::Participant};

/// A human player prompted on the console for each move.
///
/// The prompt loop guarantees the returned value is an integer in [1, 3];
/// whether it fits the remaining pile is the engine's business.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        HumanPlayer {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Participant for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn observe_pile(&mut self, _pile: u32) {
        // The console observer already renders the pile for everyone.
    }

    fn choose_move(&mut self) -> Result<u32> {
        let prompt = format!("{} how many do you take [1,3]? ", self.name);
        let value = read_bounded(&mut self.input, &mut self.output, &prompt, 1, 3)?;
        Ok(value as u32)
    }

    fn observe_outcome(&mut self, _won: bool) {}
}
