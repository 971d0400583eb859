//! AI player backed by a `noughts_core` agent.

use super::Player;
use anyhow::{Context, Result};
use noughts_core::{Agent, AgentKind, Board, Player as Mark, Position, SearchAgent, SearchStats};
use tracing::debug;

/// Player that delegates every move to an [`Agent`].
#[derive(Debug, Clone)]
pub struct AiPlayer {
    agent: Agent,
}

impl AiPlayer {
    /// Creates an AI player.
    pub fn new(kind: AgentKind, mark: Mark, seed: Option<u64>) -> Self {
        Self {
            agent: Agent::new(kind, mark, seed),
        }
    }

    /// Search counters from the last move, for search agents.
    pub fn last_stats(&self) -> Option<SearchStats> {
        self.agent.last_stats()
    }
}

impl Player for AiPlayer {
    fn get_move(&mut self, board: &Board, turn_index: usize) -> Result<Position> {
        debug!(ai = %self.agent.name(), turn = turn_index, "AI making move");

        let position = self
            .agent
            .choose_move(board, turn_index)
            .with_context(|| format!("{} could not choose a move", self.agent.name()))?;

        if let Some(stats) = self.last_stats() {
            debug!(ai = %self.agent.name(), nodes = stats.nodes, cutoffs = stats.cutoffs, "Search finished");
        }
        Ok(position)
    }

    fn name(&self) -> &str {
        self.agent.name()
    }

    fn mark(&self) -> Mark {
        self.agent.player()
    }
}
