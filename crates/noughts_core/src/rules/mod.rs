//! Rules for N×N tic-tac-toe.
//!
//! Pure functions over [`Board`](crate::Board) for evaluating game state.
//! Rules are kept apart from board storage so the board only owns cells.

pub mod draw;
pub mod lines;
pub mod threats;
pub mod win;

pub use draw::{is_dead_draw, is_full};
pub use lines::lines;
pub use threats::{blocking_moves, winning_moves};
pub use win::check_winner;
