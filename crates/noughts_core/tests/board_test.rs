//! Tests for board placement and terminal-state queries.

use noughts_core::{Board, Cell, MoveError, Outcome, Player, Position};

/// Plays `moves` alternately starting with player one.
fn board_from(dim: usize, moves: &[(usize, usize)]) -> Board {
    let mut board = Board::with_dim(dim).expect("Valid dimension");
    for (turn, &(row, col)) in moves.iter().enumerate() {
        board
            .place(Player::for_turn(turn + 1), Position::new(row, col))
            .expect("Legal move");
    }
    board
}

#[test]
fn test_new_board_is_empty() {
    for dim in 3..11 {
        let board = Board::with_dim(dim).unwrap();
        assert_eq!(board.cells().len(), dim * dim);
        assert!(board.cells().iter().all(|&cell| cell == Cell::Empty));
        assert_eq!(board.open_positions().len(), dim * dim);
        assert_eq!(board.outcome(), Outcome::Draw);
        assert!(!board.is_full());
    }
}

#[test]
fn test_open_positions_row_major() {
    let board = board_from(3, &[(0, 1), (2, 2)]);
    let expected: Vec<Position> = [(0, 0), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1)]
        .into_iter()
        .map(|(row, col)| Position::new(row, col))
        .collect();
    assert_eq!(board.open_positions(), expected);
}

#[test]
fn test_place_shrinks_open_positions_by_one() {
    for dim in 3..6 {
        let mut board = Board::with_dim(dim).unwrap();
        let mut turn = 1;
        while let Some(&pos) = board.open_positions().last() {
            let before = board.open_positions().len();
            board.place(Player::for_turn(turn), pos).unwrap();
            let after = board.open_positions();
            assert_eq!(after.len(), before - 1);
            assert!(!after.contains(&pos));
            turn += 1;
        }
        assert!(board.is_full());
        assert!(board.open_positions().is_empty());
    }
}

#[test]
fn test_place_on_occupied_leaves_board_unchanged() {
    let mut board = board_from(3, &[(1, 1)]);
    let snapshot = board.clone();

    let result = board.place(Player::Two, Position::new(1, 1));
    assert_eq!(result, Err(MoveError::Occupied(Position::new(1, 1))));
    assert_eq!(board, snapshot);
    assert!(result.unwrap_err().to_string().contains("occupied"));
}

#[test]
fn test_place_out_of_range_leaves_board_unchanged() {
    let mut board = board_from(4, &[(0, 0)]);
    let snapshot = board.clone();

    for pos in [Position::new(4, 0), Position::new(0, 4), Position::new(9, 9)] {
        assert!(matches!(
            board.place(Player::One, pos),
            Err(MoveError::OutOfRange { dim: 4, .. })
        ));
    }
    assert_eq!(board, snapshot);
}

#[test]
fn test_clear_resets_every_cell() {
    let mut board = board_from(3, &[(0, 0), (1, 1), (0, 1), (2, 0), (0, 2)]);
    assert!(board.is_terminal());

    board.clear();
    assert_eq!(board, Board::new());
    assert!(!board.is_terminal());
}

#[test]
fn test_outcome_on_complete_lines() {
    // column win for player two on a 4x4 board
    let board = board_from(
        4,
        &[(0, 0), (0, 3), (1, 0), (1, 3), (2, 1), (2, 3), (3, 1), (3, 3)],
    );
    assert_eq!(board.outcome(), Outcome::PlayerTwoWin);
    assert!(board.is_terminal());

    // anti-diagonal win for player one on a 3x3 board
    let board = board_from(3, &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
    assert_eq!(board.outcome(), Outcome::PlayerOneWin);
}

#[test]
fn test_mixed_full_board_is_draw() {
    // x o x / x o o / o x x
    let board = board_from(
        3,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert!(board.is_full());
    assert!(!board.is_terminal());
    assert_eq!(board.outcome(), Outcome::Draw);
}

#[test]
fn test_read_queries_are_idempotent() {
    let board = board_from(3, &[(0, 0), (1, 1), (0, 1), (2, 0)]);
    let snapshot = board.clone();
    for _ in 0..3 {
        assert_eq!(board.outcome(), snapshot.outcome());
        assert_eq!(board.is_full(), snapshot.is_full());
        assert_eq!(board.winning_moves(Player::Two), vec![Position::new(0, 2)]);
        assert_eq!(board.blocking_moves(Player::One), vec![Position::new(0, 2)]);
    }
    assert_eq!(board, snapshot);
}

#[test]
fn test_scenario_threats() {
    let board = board_from(3, &[(0, 0), (1, 1), (0, 1), (2, 0)]);
    assert_eq!(board.winning_moves(Player::Two), vec![Position::new(0, 2)]);
    assert_eq!(board.blocking_moves(Player::One), vec![Position::new(0, 2)]);
    assert_eq!(board.winning_moves(Player::One), vec![Position::new(0, 2)]);
}

#[test]
fn test_dead_draw_precedes_full_board() {
    // x o x / x o o / o x _
    let mut board = board_from(
        3,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0)],
    );
    assert!(board.is_dead_draw());
    assert!(!board.is_full());
    assert_eq!(board.open_positions(), vec![Position::new(2, 2)]);

    board.place(Player::One, Position::new(2, 2)).unwrap();
    assert!(board.is_dead_draw());
    assert!(board.is_full());
}

#[test]
fn test_board_display_four_by_four() {
    let board = board_from(4, &[(3, 3)]);
    let rendered = board.to_string();
    assert_eq!(rendered.lines().count(), 7);
    assert_eq!(rendered.lines().last(), Some("  |   |   | x"));
}
