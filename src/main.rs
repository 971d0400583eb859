//! Noughts - Unified CLI
//!
//! Console play and batch simulation for N×N tic-tac-toe.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{
    Board, Cli, Command, GameEvent, GameRecord, Mark, Match, MatchArgs, MatchConfig,
    OutcomeSummary, SharedStdin, Simulation, ask_play_again, build_player,
};
use std::io::Write;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout only carries the game
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { settings } => run_play(settings),
        Command::Simulate {
            settings,
            games,
            show_games,
            json,
        } => run_simulate(settings, games, show_games, json),
    }
}

/// Play interactive games until the user declines another
#[instrument]
fn run_play(settings: MatchArgs) -> Result<()> {
    let config = settings.resolve(MatchConfig::interactive(), None)?;
    config.validate(false)?;

    println!("= = = = = = = = = = Tic-tac-toe = = = = = = = = = =\n");
    println!("- Player 1: {}", config.player_one());
    println!("- Player 2: {}", config.player_two());
    println!("- (0, 0) is the top left corner");
    println!(
        "- ({last}, {last}) is the bottom right corner\n",
        last = config.dim() - 1
    );

    let mut stdin = SharedStdin::new();
    let mut stdout = std::io::stdout();
    let mut game_number: u64 = 1;
    loop {
        println!("= = = = = = = = = = Game {} = = = = = = = = = =\n", game_number);

        // Fresh players each game so seeded agents vary between games
        let seed = config.seed().map(|seed| seed.wrapping_add(game_number));
        let mut game = Match::new(
            Board::with_dim(*config.dim())?,
            build_player(*config.player_one(), Mark::One, seed),
            build_player(*config.player_two(), Mark::Two, seed),
        )?;
        game.play_observed(print_event)?;

        if !ask_play_again(&mut stdin, &mut stdout)? {
            break;
        }
        game_number += 1;
    }

    Ok(())
}

/// Prints turn banners, boards and the final result
fn print_event(event: GameEvent<'_>) {
    match event {
        GameEvent::TurnStarted {
            player, mark, board, ..
        } => {
            println!("- - - - - - - - - - {} ({}) - - - - - - - - - -\n", mark, player);
            println!("{}", board);
        }
        GameEvent::MoveMade { played, .. } => {
            println!("{} placed at {}\n", played.player, played.position);
        }
        GameEvent::GameOver { outcome, board } => {
            println!("{}", board);
            println!("Final Outcome: {}\n", outcome);
        }
    }
}

/// Run a batch of unattended games and print the tally
#[instrument]
fn run_simulate(
    settings: MatchArgs,
    games: Option<usize>,
    show_games: bool,
    json: bool,
) -> Result<()> {
    let config = settings.resolve(MatchConfig::default(), games)?;
    let dim = *config.dim();

    info!(
        player_one = %config.player_one(),
        player_two = %config.player_two(),
        games = config.games(),
        "Running simulation"
    );
    let mut simulation = Simulation::new(config)?;
    let records = simulation.run()?;

    if show_games {
        for (trial, record) in records.iter().enumerate() {
            print_record(trial + 1, record, dim)?;
        }
    }

    let summary = OutcomeSummary::from_records(&records);
    if json {
        let rendered =
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", rendered);
    } else {
        println!("Number of Player 1 Wins: {}", summary.player_one_wins);
        println!("Number of Player 2 Wins: {}", summary.player_two_wins);
        println!("Number of Ties: {}", summary.draws);
    }

    Ok(())
}

/// Replays one trial move by move
fn print_record(trial: usize, record: &GameRecord, dim: usize) -> Result<()> {
    let boards = record.replay(dim)?;
    let mut out = std::io::stdout().lock();

    writeln!(out, "= = = = = = = = = = Trial {} = = = = = = = = = =", trial)?;
    for (played, board) in record.moves.iter().zip(&boards) {
        writeln!(out, "- - - - - - - - - - Round {} - - - - - - - - - -", played.turn)?;
        writeln!(out, "Position Placed: {}", played.position)?;
        writeln!(out, "{}", board)?;
    }
    writeln!(out, "Trial Outcome: {}\n", record.outcome)?;
    Ok(())
}
