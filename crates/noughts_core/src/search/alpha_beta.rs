//! Minimax with alpha-beta pruning.

use super::{
    Evaluation, NEG_INF, POS_INF, Score, SearchStats, depth_budget, evaluate, is_leaf, mover,
};
use crate::agents::{AgentError, SearchAgent};
use crate::{Board, MoveError, Player, Position};
use tracing::{debug, instrument};

/// Minimax search that skips siblings once `beta <= alpha`.
///
/// Same move order and tie-break as [`minimax`](super::minimax). Call with
/// `alpha = NEG_INF` and `beta = POS_INF` at the root; the root score and
/// move then match the unpruned search while visiting no more nodes.
pub fn alpha_beta(
    board: Board,
    depth: usize,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
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
    let remaining = open.len();

    for (explored, pos) in open.into_iter().enumerate() {
        let mut child = board.clone();
        child.place(token, pos)?;
        let reply = alpha_beta(child, depth - 1, !maximizing, alpha, beta, me, stats)?;

        if maximizing {
            if reply.score > best.score {
                best = Evaluation {
                    score: reply.score,
                    position: Some(pos),
                };
            }
            alpha = alpha.max(best.score);
        } else {
            if reply.score < best.score {
                best = Evaluation {
                    score: reply.score,
                    position: Some(pos),
                };
            }
            beta = beta.min(best.score);
        }

        if beta <= alpha {
            if explored + 1 < remaining {
                stats.cutoffs += 1;
            }
            break;
        }
    }

    Ok(best)
}

/// Agent that plays the alpha-beta move, searching to the end of the game.
#[derive(Debug, Clone)]
pub struct AlphaBetaAgent {
    player: Player,
    last_stats: SearchStats,
}

impl AlphaBetaAgent {
    /// Creates an alpha-beta agent for `player`.
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

impl SearchAgent for AlphaBetaAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "Alpha-Beta Agent"
    }

    #[instrument(skip(self, board), fields(player = %self.player, dim = board.dim()))]
    fn choose_move(&mut self, board: &Board, turn_index: usize) -> Result<Position, AgentError> {
        AgentError::check_playable(board)?;

        let depth = depth_budget(board, turn_index);
        let mut stats = SearchStats::default();
        let best = alpha_beta(
            board.clone(),
            depth,
            true,
            NEG_INF,
            POS_INF,
            self.player,
            &mut stats,
        )?;
        self.last_stats = stats;

        let position = best.position.ok_or(AgentError::NoOpenPositions)?;
        debug!(
            %position,
            score = best.score,
            depth,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "Alpha-beta chose move"
        );
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{DRAW, WIN, minimax};

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut stats = SearchStats::default();
        let best = alpha_beta(Board::new(), 9, true, NEG_INF, POS_INF, Player::One, &mut stats)
            .unwrap();
        assert_eq!(best.score, DRAW);
        assert!(stats.cutoffs > 0);
    }

    #[test]
    fn test_prunes_relative_to_minimax() {
        let mut board = Board::new();
        board.place(Player::One, Position::new(1, 1)).unwrap();

        let mut full = SearchStats::default();
        let mut pruned = SearchStats::default();
        let expected = minimax(board.clone(), 8, false, Player::One, &mut full).unwrap();
        let actual =
            alpha_beta(board, 8, false, NEG_INF, POS_INF, Player::One, &mut pruned).unwrap();

        assert_eq!(actual, expected);
        assert!(pruned.nodes < full.nodes);
        assert_eq!(full.cutoffs, 0);
    }

    #[test]
    fn test_forced_win_prunes_remaining_replies() {
        // x x _ / o o _ / _ _ _ : the first move already wins, so every later
        // sibling is refuted by its first reply
        let mut board = Board::new();
        for (turn, (row, col)) in [(0, 0), (1, 0), (0, 1), (1, 1)].into_iter().enumerate() {
            board
                .place(Player::for_turn(turn + 1), Position::new(row, col))
                .unwrap();
        }

        let mut full = SearchStats::default();
        let mut pruned = SearchStats::default();
        let expected = minimax(board.clone(), 5, true, Player::One, &mut full).unwrap();
        let actual =
            alpha_beta(board, 5, true, NEG_INF, POS_INF, Player::One, &mut pruned).unwrap();

        assert_eq!(actual, expected);
        assert_eq!(actual.score, WIN);
        assert_eq!(actual.position, Some(Position::new(0, 2)));
        assert!(pruned.cutoffs > 0);
        assert!(pruned.nodes < full.nodes);
    }
}
