//! Command-line interface for noughts.

use crate::config::{ConfigOverrides, ConfigError, MatchConfig};
use crate::players::PlayerKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - N×N tic-tac-toe against random, heuristic and game-tree search players
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "N×N tic-tac-toe with minimax and alpha-beta players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play games at the console, printing the board every turn
    Play {
        /// Match settings
        #[command(flatten)]
        settings: MatchArgs,
    },

    /// Run unattended games and tally the outcomes
    Simulate {
        /// Match settings
        #[command(flatten)]
        settings: MatchArgs,

        /// Number of games to play
        #[arg(short, long)]
        games: Option<usize>,

        /// Print every game move by move
        #[arg(long)]
        show_games: bool,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct MatchArgs {
    /// Path to a TOML match config (defaults to $NOUGHTS_CONFIG)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length
    #[arg(short, long)]
    pub dim: Option<usize>,

    /// Player one (crosses, moves first)
    #[arg(long, value_enum)]
    pub player_one: Option<PlayerKind>,

    /// Player two (noughts)
    #[arg(long, value_enum)]
    pub player_two: Option<PlayerKind>,

    /// Seed for reproducible random players
    #[arg(long)]
    pub seed: Option<u64>,
}

impl MatchArgs {
    /// Loads the config file, if any, and applies the flags over it.
    pub fn resolve(&self, fallback: MatchConfig, games: Option<usize>) -> Result<MatchConfig, ConfigError> {
        let overrides = ConfigOverrides {
            dim: self.dim,
            player_one: self.player_one,
            player_two: self.player_two,
            games,
            seed: self.seed,
        };
        Ok(MatchConfig::resolve(self.config.as_deref(), fallback)?.with_overrides(&overrides))
    }
}
