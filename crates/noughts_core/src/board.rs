//! The game board: cell storage, placement and terminal-state queries.

use crate::rules;
use crate::{Cell, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Smallest supported board side.
pub const MIN_DIM: usize = 3;

/// Error returned by [`Board::place`] when the target cell cannot be written.
///
/// Search agents only place on positions taken from
/// [`Board::open_positions`], so seeing this from an agent means a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position lies outside the board.
    #[display("Illegal move: {} is outside the {}x{} board", position, dim, dim)]
    OutOfRange {
        /// Requested position.
        position: Position,
        /// Side of the board.
        dim: usize,
    },

    /// The cell already holds a token.
    #[display("Illegal move: {} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveError {}

/// Error returned when asking for a board smaller than [`MIN_DIM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Board dimension must be at least {}, got {}", MIN_DIM, dim)]
pub struct DimensionError {
    /// Rejected dimension.
    pub dim: usize,
}

impl std::error::Error for DimensionError {}

/// Error returned when a serialized board does not describe an N×N grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardShapeError {
    /// The side is below [`MIN_DIM`].
    #[display("{}", _0)]
    Dimension(DimensionError),

    /// The cell list does not hold `dim * dim` cells.
    #[display("Board of side {} needs {} cells, got {}", dim, expected, found)]
    CellCount {
        /// Side of the board.
        dim: usize,
        /// Cells required for that side.
        expected: usize,
        /// Cells present.
        found: usize,
    },
}

impl std::error::Error for BoardShapeError {}

/// Square N×N tic-tac-toe board.
///
/// Cells are written exactly once through [`Board::place`]; the only other
/// mutation is [`Board::clear`], which resets every cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    dim: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

/// Serialized board before its shape is checked.
#[derive(Deserialize)]
struct RawBoard {
    dim: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardShapeError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.dim < MIN_DIM {
            return Err(BoardShapeError::Dimension(DimensionError { dim: raw.dim }));
        }
        let expected = raw.dim.saturating_mul(raw.dim);
        if raw.cells.len() != expected {
            return Err(BoardShapeError::CellCount {
                dim: raw.dim,
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            dim: raw.dim,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Creates an empty 3×3 board.
    pub fn new() -> Self {
        Self {
            dim: MIN_DIM,
            cells: vec![Cell::Empty; MIN_DIM * MIN_DIM],
        }
    }

    /// Creates an empty board of side `dim`.
    #[instrument]
    pub fn with_dim(dim: usize) -> Result<Self, DimensionError> {
        if dim < MIN_DIM {
            return Err(DimensionError { dim });
        }
        Ok(Self {
            dim,
            cells: vec![Cell::Empty; dim * dim],
        })
    }

    /// Returns the side length.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Gets the cell at a position, or `None` when out of range.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !pos.in_bounds(self.dim) {
            return None;
        }
        self.cells.get(pos.index(self.dim)).copied()
    }

    /// Checks if the cell at `pos` is on the board and empty.
    pub fn is_open(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Number of cells holding a token.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// All empty positions in row-major order.
    pub fn open_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| Position::from_index(index, self.dim))
            .collect()
    }

    /// Writes `player`'s token into `pos`.
    ///
    /// Leaves the board untouched when `pos` is out of range or occupied.
    pub fn place(&mut self, player: Player, pos: Position) -> Result<(), MoveError> {
        match self.get(pos) {
            None => Err(MoveError::OutOfRange {
                position: pos,
                dim: self.dim,
            }),
            Some(Cell::Empty) => {
                let index = pos.index(self.dim);
                self.cells[index] = player.token();
                trace!(%player, position = %pos, "Placed token");
                Ok(())
            }
            Some(_) => Err(MoveError::Occupied(pos)),
        }
    }

    /// Resets every cell to empty.
    #[instrument(skip(self), fields(dim = self.dim))]
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Evaluates the board. Never stored, always recomputed from the cells.
    pub fn outcome(&self) -> Outcome {
        match rules::check_winner(self) {
            Some(player) => Outcome::for_player(player),
            None => Outcome::Draw,
        }
    }

    /// Checks if a player has completed a line.
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_win()
    }

    /// Checks if every line already holds both tokens, so nobody can win.
    pub fn is_dead_draw(&self) -> bool {
        rules::is_dead_draw(self)
    }

    /// Open positions where `player` would win immediately.
    pub fn winning_moves(&self, player: Player) -> Vec<Position> {
        rules::winning_moves(self, player)
    }

    /// Open positions the opponent of `player` would win on, i.e. where
    /// `player` must play to avoid losing on the next move.
    pub fn blocking_moves(&self, player: Player) -> Vec<Position> {
        rules::blocking_moves(self, player)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "-".repeat(4 * self.dim - 3);
        for (row, cells) in self.cells.chunks(self.dim).enumerate() {
            if row > 0 {
                writeln!(f, "{rule}")?;
            }
            let line: Vec<String> = cells.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_dim_rejects_small_boards() {
        assert_eq!(Board::with_dim(2), Err(DimensionError { dim: 2 }));
        assert!(Board::with_dim(3).is_ok());
    }

    #[test]
    fn test_deserialize_keeps_played_board() {
        let mut board = Board::with_dim(4).unwrap();
        board.place(Player::One, Position::new(2, 3)).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn test_deserialize_rejects_bad_shapes() {
        let err = serde_json::from_str::<Board>(r#"{"dim":3,"cells":[]}"#).unwrap_err();
        assert!(err.to_string().contains("needs 9 cells, got 0"), "{err}");

        let err = serde_json::from_str::<Board>(r#"{"dim":0,"cells":[]}"#).unwrap_err();
        assert!(err.to_string().contains("at least 3"), "{err}");
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();
        let pos = Position::new(3, 0);
        assert_eq!(
            board.place(Player::One, pos),
            Err(MoveError::OutOfRange { position: pos, dim: 3 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_renders_grid() {
        let mut board = Board::new();
        board.place(Player::One, Position::new(0, 0)).unwrap();
        board.place(Player::Two, Position::new(1, 1)).unwrap();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, ["x |   |  ", "---------", "  | o |  ", "---------", "  |   |  "]);
    }
}
