//! Command implementations for the sticks binary

pub mod play;
pub mod train;
