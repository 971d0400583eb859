//! Exhaustive minimax search.

use super::{Evaluation, NEG_INF, POS_INF, SearchStats, depth_budget, evaluate, is_leaf, mover};
use crate::agents::{AgentError, SearchAgent};
use crate::{Board, MoveError, Player, Position};
use tracing::{debug, instrument};

/// Full-depth minimax search.
///
/// `maximizing` is true when `me` is to place a token and false on the
/// simulated reply. Ties keep the earliest position in row-major order, and
/// the first open position is the answer until a child beats the sentinel.
pub fn minimax(
    board: Board,
    depth: usize,
    maximizing: bool,
    me: Player,
    stats: &mut SearchStats,
) -> Result<Evaluation, MoveError> {
    stats.nodes += 1;

    let open = board.open_positions();
    if is_leaf(&board, depth, &open) {
        return Ok(Evaluation::leaf(evaluate(&board, me)));
    }

    let token = mover(me, maximizing);
    let mut best = Evaluation {
        score: if maximizing { NEG_INF } else { POS_INF },
        position: open.first().copied(),
    };

    for pos in open {
        let mut child = board.clone();
        child.place(token, pos)?;
        let reply = minimax(child, depth - 1, !maximizing, me, stats)?;

        let improves = if maximizing {
            reply.score > best.score
        } else {
            reply.score < best.score
        };
        if improves {
            best = Evaluation {
                score: reply.score,
                position: Some(pos),
            };
        }
    }

    Ok(best)
}

/// Agent that plays the minimax move, searching to the end of the game.
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    player: Player,
    last_stats: SearchStats,
}

impl MinimaxAgent {
    /// Creates a minimax agent for `player`.
    pub fn new(player: Player) -> Self {
        Self {
            player,
            last_stats: SearchStats::default(),
        }
    }

    /// Counters from the most recent [`SearchAgent::choose_move`] call.
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }
}

impl SearchAgent for MinimaxAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "Minimax Agent"
    }

    #[instrument(skip(self, board), fields(player = %self.player, dim = board.dim()))]
    fn choose_move(&mut self, board: &Board, turn_index: usize) -> Result<Position, AgentError> {
        AgentError::check_playable(board)?;

        let depth = depth_budget(board, turn_index);
        let mut stats = SearchStats::default();
        let best = minimax(board.clone(), depth, true, self.player, &mut stats)?;
        self.last_stats = stats;

        let position = best.position.ok_or(AgentError::NoOpenPositions)?;
        debug!(%position, score = best.score, depth, nodes = stats.nodes, "Minimax chose move");
        Ok(position)
    }
}
