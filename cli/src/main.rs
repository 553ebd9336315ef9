use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use minas_cli::{GameResult, Move, play};
use minas_core::{GameConfig, GameEngine};
use std::io::{self, Write};
use std::process::ExitCode;

/// Replay a list of moves on a seeded Minesweeper board.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Rightmost column letter
    #[arg(long, default_value_t = 'Z')]
    last_col: char,

    /// Bottom row number
    #[arg(long, default_value_t = 5)]
    last_row: u16,

    #[arg(long, default_value_t = 6)]
    mines: u32,

    /// Seed for mine placement, must be non-zero when there are mines
    #[arg(long, default_value_t = 2)]
    seed: u32,

    /// Print the final game state as JSON after the transcript
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Moves like `M03:L` to reveal or `V01:M` to toggle a flag
    #[arg(default_values = ["M03:L", "V01:M", "W01:L"])]
    moves: Vec<Move>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let config = GameConfig::new(cli.last_col, cli.last_row, cli.mines, cli.seed)
        .context("Invalid game configuration")?;
    log::info!("Starting game {:?} with {} moves", config, cli.moves.len());

    let mut engine = GameEngine::new(config)?;
    let mut stdout = io::stdout().lock();
    let result = play(&mut engine, &cli.moves, &mut stdout).context("Could not write board")?;

    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &engine)?;
        writeln!(stdout)?;
    }

    Ok(match result {
        GameResult::Won | GameResult::Unfinished => ExitCode::SUCCESS,
        GameResult::Lost => ExitCode::from(1),
    })
}
