//! Game of Sticks - console game with a learning opponent
//!
//! Two subcommands:
//! - `play`: the interactive menu-driven game modes
//! - `train`: headless pre-training of the learning agent

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sticks")]
#[command(version, about = "Game of Sticks with a learning opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(sticks::cli::commands::play::PlayArgs),

    /// Pre-train the learning agent in agent-vs-agent games
    Train(sticks::cli::commands::train::TrainArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => sticks::cli::commands::play::execute(args),
        Commands::Train(args) => sticks::cli::commands::train::execute(args),
    }
}
