//! Win detection for N×N tic-tac-toe.

use super::lines;
use crate::{Board, Cell, Player, Position};
use tracing::warn;

/// Returns the owner of `line` if all its cells hold the same token.
pub fn line_owner(board: &Board, line: &[Position]) -> Option<Player> {
    let first = board.get(*line.first()?)?.owner()?;
    line.iter()
        .all(|&pos| board.get(pos) == Some(first.token()))
        .then_some(first)
}

/// Checks if there is a winner on the board.
///
/// Every line is scanned. Two different winners can only occur on a board
/// that was not built one move at a time; that case is logged and the first
/// winner in scan order is reported.
pub fn check_winner(board: &Board) -> Option<Player> {
    let mut winner = None;
    for line in lines(board.dim()) {
        match (winner, line_owner(board, &line)) {
            (None, Some(player)) => winner = Some(player),
            (Some(first), Some(other)) if first != other => {
                warn!(%first, %other, "Board has complete lines for both players");
            }
            _ => {}
        }
    }
    winner
}

/// Returns true if the cell holds `player`'s token.
pub(crate) fn holds(cell: Option<Cell>, player: Player) -> bool {
    cell == Some(player.token())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut Board, player: Player, line: &[Position]) {
        for &pos in line {
            board.place(player, pos).unwrap();
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_every_player() {
        for dim in 3..7 {
            for line in lines(dim) {
                for player in [Player::One, Player::Two] {
                    let mut board = Board::with_dim(dim).unwrap();
                    fill(&mut board, player, &line);
                    assert_eq!(check_winner(&board), Some(player), "dim {dim} line {line:?}");
                }
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::with_dim(4).unwrap();
        fill(
            &mut board,
            Player::One,
            &[Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
        );
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        fill(&mut board, Player::One, &[Position::new(0, 0), Position::new(0, 1)]);
        fill(&mut board, Player::Two, &[Position::new(0, 2)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_two_winners_does_not_panic() {
        let mut board = Board::new();
        fill(
            &mut board,
            Player::Two,
            &[Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
        );
        fill(
            &mut board,
            Player::One,
            &[Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
        );
        assert_eq!(check_winner(&board), Some(Player::One));
    }
}
