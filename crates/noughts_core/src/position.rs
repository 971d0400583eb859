//! Board coordinates.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A 0-indexed `(row, col)` coordinate on the board.
///
/// A position only means something relative to a board: it is valid when
/// both coordinates are below the board's dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a new position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (0 is the top).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column (0 is the left).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Checks that both coordinates fit a board of side `dim`.
    pub fn in_bounds(&self, dim: usize) -> bool {
        self.row < dim && self.col < dim
    }

    /// Row-major cell index on a board of side `dim`.
    pub(crate) fn index(&self, dim: usize) -> usize {
        self.row * dim + self.col
    }

    /// Inverse of [`Position::index`].
    pub(crate) fn from_index(index: usize, dim: usize) -> Self {
        Self::new(index / dim, index % dim)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Input that could not be read as a position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Cannot parse {:?} as a position, expected (row, col)", input)]
pub struct ParsePositionError {
    /// The rejected input.
    pub input: String,
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Accepts `r,c`, `(r,c)` and `(r, c)`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let mut parts = inner.split(',');
        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(err());
        };

        let row = row.trim().parse::<usize>().map_err(|_| err())?;
        let col = col.trim().parse::<usize>().map_err(|_| err())?;
        Ok(Self::new(row, col))
    }
}
