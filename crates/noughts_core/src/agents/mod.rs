//! Move-choosing agents.
//!
//! Every agent answers the same question: given a board and the 1-based
//! turn number, which open position should its player take? The closed set
//! of agents is [`Agent`], which dispatches to the variant behind it.

mod heuristic;
mod random;

pub use heuristic::HeuristicAgent;
pub use random::RandomAgent;

use crate::search::{AlphaBetaAgent, MinimaxAgent, SearchStats};
use crate::{Board, MoveError, Player, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Capability shared by all agents.
pub trait SearchAgent {
    /// The player this agent moves for.
    fn player(&self) -> Player;

    /// Display name.
    fn name(&self) -> &str;

    /// Picks one of `board.open_positions()`.
    ///
    /// `turn_index` is the 1-based ply of the whole game. Search agents use
    /// it to size their depth; it is not read from the board.
    fn choose_move(&mut self, board: &Board, turn_index: usize) -> Result<Position, AgentError>;
}

/// Error raised when an agent cannot produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AgentError {
    /// The board has no empty cell.
    #[display("No open positions left to play")]
    NoOpenPositions,

    /// A player already completed a line.
    #[display("Game is already over")]
    GameOver,

    /// A hypothetical placement was rejected by the board.
    #[display("{}", _0)]
    IllegalMove(MoveError),
}

impl AgentError {
    /// Fails unless the board can still take a move.
    pub(crate) fn check_playable(board: &Board) -> Result<(), Self> {
        if board.is_terminal() {
            Err(AgentError::GameOver)
        } else if board.is_full() {
            Err(AgentError::NoOpenPositions)
        } else {
            Ok(())
        }
    }
}

impl std::error::Error for AgentError {}

impl From<MoveError> for AgentError {
    fn from(err: MoveError) -> Self {
        AgentError::IllegalMove(err)
    }
}

/// Which agent to build.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AgentKind {
    /// Uniformly random open position.
    Random,
    /// Win if possible, else block, else random.
    Heuristic,
    /// Exhaustive minimax.
    Minimax,
    /// Minimax with alpha-beta pruning.
    AlphaBeta,
}

impl AgentKind {
    /// Checks if the agent searches the game tree.
    pub fn is_search(self) -> bool {
        matches!(self, AgentKind::Minimax | AgentKind::AlphaBeta)
    }
}

/// The closed set of agents.
#[derive(Debug, Clone)]
pub enum Agent {
    /// See [`RandomAgent`].
    Random(RandomAgent),
    /// See [`HeuristicAgent`].
    Heuristic(HeuristicAgent),
    /// See [`MinimaxAgent`].
    Minimax(MinimaxAgent),
    /// See [`AlphaBetaAgent`].
    AlphaBeta(AlphaBetaAgent),
}

impl Agent {
    /// Builds an agent of `kind` for `player`.
    ///
    /// `seed` makes random choices reproducible; without it the generator is
    /// seeded from the operating system. Search agents ignore it.
    #[instrument]
    pub fn new(kind: AgentKind, player: Player, seed: Option<u64>) -> Self {
        match kind {
            AgentKind::Random => Agent::Random(RandomAgent::with_rng(player, rng_from(seed))),
            AgentKind::Heuristic => {
                Agent::Heuristic(HeuristicAgent::with_rng(player, rng_from(seed)))
            }
            AgentKind::Minimax => Agent::Minimax(MinimaxAgent::new(player)),
            AgentKind::AlphaBeta => Agent::AlphaBeta(AlphaBetaAgent::new(player)),
        }
    }

    /// Returns which kind of agent this is.
    pub fn kind(&self) -> AgentKind {
        match self {
            Agent::Random(_) => AgentKind::Random,
            Agent::Heuristic(_) => AgentKind::Heuristic,
            Agent::Minimax(_) => AgentKind::Minimax,
            Agent::AlphaBeta(_) => AgentKind::AlphaBeta,
        }
    }

    /// Search counters from the last decision, for search agents.
    pub fn last_stats(&self) -> Option<SearchStats> {
        match self {
            Agent::Minimax(agent) => Some(agent.last_stats()),
            Agent::AlphaBeta(agent) => Some(agent.last_stats()),
            Agent::Random(_) | Agent::Heuristic(_) => None,
        }
    }

    fn as_dyn(&self) -> &dyn SearchAgent {
        match self {
            Agent::Random(agent) => agent,
            Agent::Heuristic(agent) => agent,
            Agent::Minimax(agent) => agent,
            Agent::AlphaBeta(agent) => agent,
        }
    }
}

impl SearchAgent for Agent {
    fn player(&self) -> Player {
        self.as_dyn().player()
    }

    fn name(&self) -> &str {
        self.as_dyn().name()
    }

    fn choose_move(&mut self, board: &Board, turn_index: usize) -> Result<Position, AgentError> {
        match self {
            Agent::Random(agent) => agent.choose_move(board, turn_index),
            Agent::Heuristic(agent) => agent.choose_move(board, turn_index),
            Agent::Minimax(agent) => agent.choose_move(board, turn_index),
            Agent::AlphaBeta(agent) => agent.choose_move(board, turn_index),
        }
    }
}

/// Seeded generator when a seed is given, OS-seeded otherwise.
pub(crate) fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
