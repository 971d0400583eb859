//! Draw detection for N×N tic-tac-toe.

use super::lines;
use super::win::holds;
use crate::{Board, Player};

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// Checks if no line can still be completed by a single player.
///
/// A line is dead once it holds both tokens. When every line is dead the
/// game is drawn even though empty cells may remain, so this fires no later
/// than [`is_full`] on any board without a winner.
pub fn is_dead_draw(board: &Board) -> bool {
    lines(board.dim()).all(|line| {
        let has = |player: Player| line.iter().any(|&pos| holds(board.get(pos), player));
        has(Player::One) && has(Player::Two)
    })
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::Position;

    fn board_from(moves: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for (turn, &(row, col)) in moves.iter().enumerate() {
            board
                .place(Player::for_turn(turn + 1), Position::new(row, col))
                .unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_dead_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from(&[(1, 1)]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_draw() {
        // x o x / x o o / o x x
        let board = board_from(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        assert!(is_full(&board));
        assert!(is_dead_draw(&board));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_dead_draw_before_full() {
        // x o x / x o o / o x _
        let board = board_from(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
        ]);
        assert!(!is_full(&board));
        assert!(is_dead_draw(&board));
    }

    #[test]
    fn test_single_open_line_is_not_dead() {
        // x o x / x o o / _ x _ : the left column is still open for x
        let board = board_from(&[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1)]);
        assert!(!is_dead_draw(&board));
    }
}
