//! Adversarial game-tree search.
//!
//! Both searches score a board from the searching player's point of view and
//! explore every open position in row-major order. Each explored move works
//! on its own copy of the board, so sibling branches never see each other's
//! placements and no undo step is needed.
//!
//! The leaf evaluation looks at the board handed to the call, not at the
//! board after the next placement, so a win is credited on the call after
//! the move that completed the line.

mod alpha_beta;
mod minimax;

pub use alpha_beta::{AlphaBetaAgent, alpha_beta};
pub use minimax::{MinimaxAgent, minimax};

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// Search score from the searching player's perspective.
pub type Score = i32;

/// The searching player has won.
pub const WIN: Score = 1;
/// Nothing decided.
pub const DRAW: Score = 0;
/// The opponent has won.
pub const LOSS: Score = -1;
/// Below every attainable score.
pub const NEG_INF: Score = -2;
/// Above every attainable score.
pub const POS_INF: Score = 2;

/// Result of searching one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Best score reachable from this node.
    pub score: Score,
    /// Move achieving `score`; `None` at leaves.
    pub position: Option<Position>,
}

impl Evaluation {
    fn leaf(score: Score) -> Self {
        Self {
            score,
            position: None,
        }
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, leaves included.
    pub nodes: u64,
    /// Times remaining siblings were skipped because `beta <= alpha`.
    pub cutoffs: u64,
}

/// Scores the board as it stands for `me`.
pub fn evaluate(board: &Board, me: Player) -> Score {
    match board.outcome().winner() {
        Some(winner) if winner == me => WIN,
        Some(_) => LOSS,
        None => DRAW,
    }
}

/// Plies left in the game counting the move about to be made.
///
/// With `turn_index` the 1-based ply number this is `dim² − turn_index + 1`,
/// so the search always runs to the natural end of the game. Never less than
/// one, so a search asked with an inconsistent turn still picks a move.
pub fn depth_budget(board: &Board, turn_index: usize) -> usize {
    let cells = board.dim() * board.dim();
    (cells + 1).saturating_sub(turn_index).max(1)
}

/// Shared leaf test: depth exhausted, someone has won, or nowhere to play.
fn is_leaf(board: &Board, depth: usize, open: &[Position]) -> bool {
    depth == 0 || board.is_terminal() || open.is_empty()
}

/// Player whose token is placed at this node.
fn mover(me: Player, maximizing: bool) -> Player {
    if maximizing { me } else { me.opponent() }
}
