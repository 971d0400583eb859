//! Agent that wins when it can and blocks when it must.

use super::{AgentError, SearchAgent, rng_from};
use crate::{Board, Player, Position};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// One-ply lookahead agent.
///
/// Takes a random immediate win if one exists, otherwise a random cell that
/// stops the opponent's immediate win, otherwise any random open cell.
#[derive(Debug, Clone)]
pub struct HeuristicAgent {
    player: Player,
    rng: StdRng,
}

impl HeuristicAgent {
    /// Creates a heuristic agent, seeded for reproducible play when `seed` is given.
    pub fn new(player: Player, seed: Option<u64>) -> Self {
        Self::with_rng(player, rng_from(seed))
    }

    /// Creates a heuristic agent drawing from `rng`.
    pub fn with_rng(player: Player, rng: StdRng) -> Self {
        Self { player, rng }
    }
}

impl SearchAgent for HeuristicAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "Heuristic Agent"
    }

    #[instrument(skip(self, board), fields(player = %self.player))]
    fn choose_move(&mut self, board: &Board, turn_index: usize) -> Result<Position, AgentError> {
        AgentError::check_playable(board)?;
        let wins = board.winning_moves(self.player);
        let (reason, candidates) = if !wins.is_empty() {
            ("win", wins)
        } else {
            let blocks = board.blocking_moves(self.player);
            if !blocks.is_empty() {
                ("block", blocks)
            } else {
                ("random", board.open_positions())
            }
        };

        let position = *candidates
            .choose(&mut self.rng)
            .ok_or(AgentError::NoOpenPositions)?;
        debug!(%position, reason, "Heuristic agent chose move");
        Ok(position)
    }
}
