//! Turn engine for the stick pile

pub mod session;

pub use session::{GameSession, Slot};
