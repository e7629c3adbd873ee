//! Train command - run quiet agent-vs-agent games and report the outcome

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    agent::LossResponse,
    cli::output::{format_number, print_kv, print_section, training_progress},
    training::{DEFAULT_TRAINING_GAMES, TrainingConfig, TrainingSession},
};

#[derive(Parser, Debug)]
#[command(about = "Pre-train the learning agent")]
pub struct TrainArgs {
    /// Number of training games
    #[arg(long, short = 'g', default_value_t = DEFAULT_TRAINING_GAMES)]
    pub games: usize,

    /// Initial pile size for every training game
    #[arg(long, short = 's', default_value_t = 10)]
    pub sticks: u32,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Loss rule (forget or collapse)
    #[arg(long, default_value = "forget")]
    pub loss_rule: String,

    /// Optional path for a JSON training summary
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let loss_response: LossResponse = args.loss_rule.parse()?;
    let config = TrainingConfig {
        games: args.games,
        pile_size: args.sticks,
        seed: args.seed,
        loss_response,
    };

    let mut session = TrainingSession::new(config)?;
    let report = if args.quiet {
        session.train()?
    } else {
        let bar = training_progress(args.games as u64);
        let report = session.train_observed(|games_played| bar.set_position(games_played as u64))?;
        bar.finish();
        report
    };

    print_section("Training complete");
    print_kv("games", &format_number(report.total_games));
    print_kv("first wins", &format_number(report.first_wins));
    print_kv("second wins", &format_number(report.second_wins));
    print_kv("first win rate", &format!("{:.3}", report.first_win_rate));
    print_kv(
        "table entries",
        &format_number(session.table().borrow().total_entries()),
    );

    if let Some(path) = args.summary {
        report.save(&path)?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}
