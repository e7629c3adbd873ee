//! Console rendering of game events and training progress

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Result, engine::Slot, ports::GameObserver};

/// Renders game notifications in the classic console format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl GameObserver for ConsoleObserver {
    fn on_pile_update(&mut self, pile: u32, _active: Slot, _name: &str) -> Result<()> {
        println!("There are {pile} sticks on the table.");
        Ok(())
    }

    fn on_move_taken(&mut self, _slot: Slot, name: &str, taken: u32, _remaining: u32) -> Result<()> {
        println!("{name} took {taken} sticks.\n");
        Ok(())
    }

    fn on_illegal_move(&mut self, _slot: Slot, _name: &str, _attempted: u32, _pile: u32) -> Result<()> {
        println!("Cannot make this choice.\n");
        Ok(())
    }

    fn on_winner(&mut self, _slot: Slot, name: &str) -> Result<()> {
        println!("{name} has won!\n");
        Ok(())
    }
}

/// Create a progress bar for the training loop
pub fn training_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}
