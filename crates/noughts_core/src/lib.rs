//! Noughts core - N×N tic-tac-toe rules and game-tree search
//!
//! This crate holds the pure game logic with no I/O:
//!
//! - **Board**: cell storage, placement, and terminal-state queries
//!   (wins, full boards, dead draws, immediate wins and blocks)
//! - **Rules**: line enumeration and the pure functions behind the board queries
//! - **Agents**: random, heuristic, minimax and alpha-beta players behind
//!   one [`SearchAgent`] capability
//! - **Search**: the recursive minimax and alpha-beta routines
//!
//! # Example
//!
//! ```
//! use noughts_core::{Agent, AgentKind, Board, Player, SearchAgent};
//!
//! let board = Board::new();
//! let mut agent = Agent::new(AgentKind::AlphaBeta, Player::One, None);
//! let position = agent.choose_move(&board, 1).unwrap();
//! assert!(board.is_open(position));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod agents;
mod board;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use agents::{
    Agent, AgentError, AgentKind, HeuristicAgent, RandomAgent, SearchAgent,
};
pub use board::{Board, BoardShapeError, DimensionError, MIN_DIM, MoveError};
pub use position::{ParsePositionError, Position};
pub use search::{AlphaBetaAgent, Evaluation, MinimaxAgent, SearchStats};
pub use types::{Cell, Outcome, Player};
