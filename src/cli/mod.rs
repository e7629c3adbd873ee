//! CLI infrastructure for the game of sticks
//!
//! This module provides the console-facing pieces: the bounded prompt
//! loop, the human participant, the event renderer, and the command
//! implementations behind the `sticks` binary.

pub mod commands;
pub mod human;
pub mod io;
pub mod output;

pub use human::HumanPlayer;
pub use output::ConsoleObserver;
