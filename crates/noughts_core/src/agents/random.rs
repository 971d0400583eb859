//! Agent that plays any open position.

use super::{AgentError, SearchAgent, rng_from};
use crate::{Board, Player, Position};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks uniformly among the open positions. Baseline for the other agents.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    player: Player,
    rng: StdRng,
}

impl RandomAgent {
    /// Creates a random agent, seeded for reproducible play when `seed` is given.
    pub fn new(player: Player, seed: Option<u64>) -> Self {
        Self::with_rng(player, rng_from(seed))
    }

    /// Creates a random agent drawing from `rng`.
    pub fn with_rng(player: Player, rng: StdRng) -> Self {
        Self { player, rng }
    }
}

impl SearchAgent for RandomAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "Random Agent"
    }

    #[instrument(skip(self, board), fields(player = %self.player))]
    fn choose_move(&mut self, board: &Board, turn_index: usize) -> Result<Position, AgentError> {
        AgentError::check_playable(board)?;
        let open = board.open_positions();
        let position = *open.choose(&mut self.rng).ok_or(AgentError::NoOpenPositions)?;
        debug!(%position, "Random agent chose move");
        Ok(position)
    }
}
