//! Immediate wins and forced blocks.

use super::win::check_winner;
use crate::{Board, Player, Position};

/// Open positions that complete a line for `player` right away.
pub fn winning_moves(board: &Board, player: Player) -> Vec<Position> {
    completing_moves(board, player)
}

/// Open positions that would complete a line for `player`'s opponent.
///
/// These are the cells `player` has to take to avoid losing next turn.
pub fn blocking_moves(board: &Board, player: Player) -> Vec<Position> {
    completing_moves(board, player.opponent())
}

fn completing_moves(board: &Board, mover: Player) -> Vec<Position> {
    board
        .open_positions()
        .into_iter()
        .filter(|&pos| {
            let mut hypothetical = board.clone();
            hypothetical.place(mover, pos).is_ok() && check_winner(&hypothetical) == Some(mover)
        })
        .collect()
}
