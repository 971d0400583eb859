//! Batch simulation of unattended games and outcome tallies.

use crate::config::MatchConfig;
use crate::driver::{GameRecord, Match};
use crate::players::build_player;
use anyhow::{Context, Result};
use noughts_core::{Board, Outcome, Player as Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Plays a number of games between the same two players.
///
/// Players persist across trials, so seeded random agents produce a
/// reproducible but varied sequence of games.
pub struct Simulation {
    config: MatchConfig,
    game: Match,
}

impl Simulation {
    /// Validates the config and builds both players.
    #[instrument(skip_all, fields(dim = config.dim(), games = config.games()))]
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate(true)?;

        let board = Board::with_dim(*config.dim())?;
        let player_one = build_player(*config.player_one(), Mark::One, *config.seed());
        let player_two = build_player(*config.player_two(), Mark::Two, *config.seed());
        let game = Match::new(board, player_one, player_two)?;

        Ok(Self { config, game })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Plays every trial on a freshly cleared board.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Vec<GameRecord>> {
        let games = *self.config.games();
        info!(games, "Starting simulation");

        let mut records = Vec::with_capacity(games);
        for trial in 1..=games {
            self.game.reset();
            let record = self
                .game
                .play()
                .with_context(|| format!("Trial {} failed", trial))?;
            debug!(trial, outcome = %record.outcome, "Trial finished");
            records.push(record);
        }

        info!(summary = %OutcomeSummary::from_records(&records), "Simulation finished");
        Ok(records)
    }
}

/// Count of each outcome over a set of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeSummary {
    /// Games won by player one.
    pub player_one_wins: usize,
    /// Games won by player two.
    pub player_two_wins: usize,
    /// Games without a winner.
    pub draws: usize,
}

impl OutcomeSummary {
    /// Tallies the outcomes of `records`.
    pub fn from_records(records: &[GameRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut summary, record| {
                summary.add(record.outcome);
                summary
            })
    }

    /// Counts one more outcome.
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerOneWin => self.player_one_wins += 1,
            Outcome::PlayerTwoWin => self.player_two_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total number of games counted.
    pub fn total(&self) -> usize {
        self.player_one_wins + self.player_two_wins + self.draws
    }
}

impl std::fmt::Display for OutcomeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player 1 wins: {}, Player 2 wins: {}, Draws: {}",
            self.player_one_wins, self.player_two_wins, self.draws
        )
    }
}
