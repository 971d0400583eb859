//! Noughts library - console play and simulation for N×N tic-tac-toe
//!
//! Game rules and the search agents live in `noughts_core`; this crate wires
//! them into complete games.
//!
//! # Architecture
//!
//! - **Config**: match settings from TOML files and command-line flags
//! - **Players**: AI players backed by core agents and console humans
//! - **Driver**: alternates turns, applies moves, stops on wins and draws
//! - **Simulation**: batches of unattended games with outcome tallies
//!
//! # Example
//!
//! ```
//! use noughts::{MatchConfig, OutcomeSummary, PlayerKind, Simulation};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = MatchConfig::default();
//! assert_eq!(*config.player_one(), PlayerKind::AlphaBeta);
//!
//! let mut simulation = Simulation::new(config)?;
//! let records = simulation.run()?;
//! let summary = OutcomeSummary::from_records(&records);
//! assert_eq!(summary.player_two_wins, 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod driver;
mod players;
mod simulation;

// Crate-level exports - Command line
pub use cli::{Cli, Command, MatchArgs};

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV, ConfigError, ConfigOverrides, MatchConfig};

// Crate-level exports - Turn driver
pub use driver::{GameEvent, GameRecord, Match, PlayedMove, is_game_over};

// Crate-level exports - Players
pub use players::{
    AiPlayer, ConsolePlayer, LineSource, Player, PlayerKind, SharedStdin, ask_play_again,
    build_player,
};

// Crate-level exports - Simulation
pub use simulation::{OutcomeSummary, Simulation};

// Crate-level exports - Game types
pub use noughts_core::{Board, Outcome, Player as Mark, Position};
