//! Enumeration of the lines that can win a game.

use crate::Position;

/// Every winning line of a board of side `dim`.
///
/// Yielded in scan order: rows top to bottom, columns left to right, the
/// main diagonal, then the anti-diagonal. A board has `2 * dim + 2` lines.
pub fn lines(dim: usize) -> impl Iterator<Item = Vec<Position>> {
    let rows = (0..dim).map(move |row| {
        (0..dim)
            .map(|col| Position::new(row, col))
            .collect::<Vec<_>>()
    });
    let cols = (0..dim).map(move |col| {
        (0..dim)
            .map(|row| Position::new(row, col))
            .collect::<Vec<_>>()
    });
    let main = std::iter::once((0..dim).map(|i| Position::new(i, i)).collect::<Vec<_>>());
    let anti = std::iter::once(
        (0..dim)
            .map(|i| Position::new(i, dim - 1 - i))
            .collect::<Vec<_>>(),
    );
    rows.chain(cols).chain(main).chain(anti)
}
