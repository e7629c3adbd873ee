//! Play command - the interactive menu-driven game modes

use std::io::{BufRead, BufReader, Write, stdin, stdout};

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};

use crate::{
    agent::{LearningAgent, SharedStrategyTable, StrategyTable},
    cli::{ConsoleObserver, HumanPlayer, io::read_bounded, output},
    engine::GameSession,
    training::{DEFAULT_TRAINING_GAMES, TrainingConfig, TrainingSession},
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Two humans share the console
    HumanHuman,
    /// Human against the learning agent
    HumanAgent,
    /// Two agents play one visible game
    AgentAgent,
}

#[derive(Parser, Debug)]
#[command(about = "Play the Game of Sticks")]
pub struct PlayArgs {
    /// Game mode; shows the menu when omitted
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<Mode>,

    /// Initial pile size (10-100); prompts when omitted
    #[arg(long, short = 's')]
    pub sticks: Option<u32>,

    /// Pre-train the agent before a human-vs-agent game
    #[arg(long, short = 't')]
    pub train: bool,

    /// Random seed for the agent's draws
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    println!("Welcome to the Game of Sticks!");

    let mut input = BufReader::new(stdin());
    let mut output_handle = stdout();

    loop {
        let mode = match args.mode {
            Some(mode) => mode,
            None => prompt_mode(&mut input, &mut output_handle)?,
        };

        let sticks = match args.sticks {
            Some(sticks) if (10..=100).contains(&sticks) => sticks,
            Some(sticks) => bail!("pile size {sticks} is not in range [10, 100]"),
            None => read_bounded(&mut input, &mut output_handle, "How many sticks? ", 10, 100)?
                as u32,
        };

        match mode {
            Mode::HumanHuman => play_human_vs_human(sticks)?,
            Mode::HumanAgent => {
                let train = args.train
                    || (args.mode.is_none()
                        && read_bounded(
                            &mut input,
                            &mut output_handle,
                            "Train AI? 0=no 1=yes ",
                            0,
                            1,
                        )? == 1);
                play_human_vs_agent(sticks, train, args.seed)?;
            }
            Mode::AgentAgent => play_agent_vs_agent(sticks, args.seed)?,
        }

        let again = read_bounded(&mut input, &mut output_handle, "Play again? 0=no 1=yes ", 0, 1)?;
        if again == 0 {
            break;
        }
    }

    Ok(())
}

fn prompt_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Mode> {
    writeln!(output, "MENU")?;
    writeln!(output, "  1) Human VS Human")?;
    writeln!(output, "  2) Human VS AI")?;
    writeln!(output, "  3) AI VS AI")?;
    let mode = match read_bounded(input, output, "Which mode do you choose? ", 1, 3)? {
        1 => Mode::HumanHuman,
        2 => Mode::HumanAgent,
        _ => Mode::AgentAgent,
    };
    Ok(mode)
}

fn play_human_vs_human(sticks: u32) -> Result<()> {
    let mut one = HumanPlayer::new("Player 1", BufReader::new(stdin()), stdout());
    let mut two = HumanPlayer::new("Player 2", BufReader::new(stdin()), stdout());

    GameSession::new(sticks, &mut one, &mut two)?.run(&mut ConsoleObserver)?;
    Ok(())
}

fn play_human_vs_agent(sticks: u32, train: bool, seed: Option<u64>) -> Result<()> {
    let table = if train {
        pretrained_table(sticks, seed)?
    } else {
        StrategyTable::untrained(sticks)?.into_shared()
    };

    let mut agent = lineage_agent("AI 1", table, seed)?;
    let mut human = HumanPlayer::new("Player 1", BufReader::new(stdin()), stdout());

    GameSession::new(sticks, &mut human, &mut agent)?.run(&mut ConsoleObserver)?;
    Ok(())
}

fn play_agent_vs_agent(sticks: u32, seed: Option<u64>) -> Result<()> {
    let table = StrategyTable::untrained(sticks)?.into_shared();
    let mut one = lineage_agent("AI 1", table.clone(), seed)?;
    let mut two = lineage_agent("AI 2", table, seed.map(|s| s.wrapping_add(1)))?;

    GameSession::new(sticks, &mut one, &mut two)?.run(&mut ConsoleObserver)?;
    Ok(())
}

/// Run the quiet pre-training games and hand back the trained lineage.
fn pretrained_table(sticks: u32, seed: Option<u64>) -> Result<SharedStrategyTable> {
    println!(
        "Training AI with {} games, please wait...",
        output::format_number(DEFAULT_TRAINING_GAMES)
    );

    let config = TrainingConfig {
        games: DEFAULT_TRAINING_GAMES,
        pile_size: sticks,
        seed,
        ..TrainingConfig::default()
    };
    let mut session = TrainingSession::new(config)?;

    let bar = output::training_progress(DEFAULT_TRAINING_GAMES as u64);
    session.train_observed(|games_played| bar.set_position(games_played as u64))?;
    bar.finish();

    Ok(session.table())
}

fn lineage_agent(
    name: &str,
    table: SharedStrategyTable,
    seed: Option<u64>,
) -> Result<LearningAgent> {
    let mut builder = LearningAgent::builder().name(name).shared_table(table);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    Ok(builder.build()?)
}
