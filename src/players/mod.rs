//! Player trait and implementations.
//!
//! The driver talks to players through [`Player`]; agents from
//! `noughts_core` and console humans both implement it.

mod ai;
mod console;

pub use ai::AiPlayer;
pub use console::{ConsolePlayer, LineSource, SharedStdin, ask_play_again};

use anyhow::Result;
use noughts_core::{AgentKind, Board, Player as Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns one of `board.open_positions()` for the 1-based turn.
    fn get_move(&mut self, board: &Board, turn_index: usize) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns the mark this player places.
    fn mark(&self) -> Mark;
}

/// Kind of player selectable from config or the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum PlayerKind {
    /// Reads moves from the console.
    Human,
    /// Plays a random open position.
    Random,
    /// Wins, else blocks, else plays randomly.
    Heuristic,
    /// Exhaustive minimax search.
    Minimax,
    /// Minimax search with alpha-beta pruning.
    AlphaBeta,
}

impl PlayerKind {
    /// The agent behind this kind, `None` for humans.
    pub fn agent_kind(self) -> Option<AgentKind> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Random => Some(AgentKind::Random),
            PlayerKind::Heuristic => Some(AgentKind::Heuristic),
            PlayerKind::Minimax => Some(AgentKind::Minimax),
            PlayerKind::AlphaBeta => Some(AgentKind::AlphaBeta),
        }
    }

    /// Checks if moves come from the console.
    pub fn is_human(self) -> bool {
        self == PlayerKind::Human
    }

    /// Checks if the player searches the game tree.
    pub fn is_search(self) -> bool {
        self.agent_kind().is_some_and(AgentKind::is_search)
    }
}

/// Builds a player of `kind` for `mark`.
///
/// Humans read from stdin and write prompts to stdout. The seed is offset by
/// the player number so two random players with one seed still differ.
#[instrument]
pub fn build_player(kind: PlayerKind, mark: Mark, seed: Option<u64>) -> Box<dyn Player> {
    match kind.agent_kind() {
        Some(agent) => {
            let seed = seed.map(|seed| seed.wrapping_add(u64::from(mark.number())));
            Box::new(AiPlayer::new(agent, mark, seed))
        }
        None => Box::new(ConsolePlayer::stdio(mark)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_names_match_agent_kinds() {
        for kind in PlayerKind::iter() {
            match kind.agent_kind() {
                Some(agent) => assert_eq!(kind.to_string(), agent.to_string()),
                None => assert_eq!(kind.to_string(), "human"),
            }
        }
    }

    #[test]
    fn test_two_console_players_share_stdin() {
        let (done, finished) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let one = build_player(PlayerKind::Human, Mark::One, None);
            let two = build_player(PlayerKind::Human, Mark::Two, None);
            let marks = (one.mark(), two.mark());
            drop((one, two));
            let _ = done.send(marks);
        });
        let marks = finished
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("building two console players blocked");
        assert_eq!(marks, (Mark::One, Mark::Two));
    }

    #[test]
    fn test_search_kinds() {
        assert!(PlayerKind::Minimax.is_search());
        assert!(PlayerKind::AlphaBeta.is_search());
        assert!(!PlayerKind::Heuristic.is_search());
        assert!(!PlayerKind::Human.is_search());
    }
}
