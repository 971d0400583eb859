//! Turn-by-turn play between two players.

use crate::players::Player;
use anyhow::{Context, Result, ensure};
use derive_new::new;
use noughts_core::{Board, Outcome, Player as Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Notifications emitted while a game is played.
#[derive(Debug, Clone, Copy)]
pub enum GameEvent<'a> {
    /// A player is about to move.
    TurnStarted {
        /// 1-based ply.
        turn: usize,
        /// Name of the player to move.
        player: &'a str,
        /// Mark of the player to move.
        mark: Mark,
        /// Board before the move.
        board: &'a Board,
    },
    /// A move was applied.
    MoveMade {
        /// The move.
        played: PlayedMove,
        /// Board after the move.
        board: &'a Board,
    },
    /// The game ended.
    GameOver {
        /// Final result.
        outcome: Outcome,
        /// Final board.
        board: &'a Board,
    },
}

/// One applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct PlayedMove {
    /// 1-based ply.
    pub turn: usize,
    /// Who moved.
    pub player: Mark,
    /// Where.
    pub position: Position,
}

/// Result and move list of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct GameRecord {
    /// How the game ended.
    pub outcome: Outcome,
    /// Moves in the order they were played.
    pub moves: Vec<PlayedMove>,
}

impl GameRecord {
    /// Rebuilds the board after every move on an empty board of side `dim`.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn replay(&self, dim: usize) -> Result<Vec<Board>> {
        let mut board = Board::with_dim(dim)?;
        let mut boards = Vec::with_capacity(self.moves.len());
        for played in &self.moves {
            board
                .place(played.player, played.position)
                .with_context(|| format!("Replay failed at turn {}", played.turn))?;
            boards.push(board.clone());
        }
        Ok(boards)
    }
}

/// Checks if play should stop: a win, a dead draw, or a full board.
pub fn is_game_over(board: &Board) -> bool {
    board.is_terminal() || board.is_dead_draw() || board.is_full()
}

/// Drives a game between two players on one board.
///
/// Player one moves on odd turns and player two on even turns. The driver
/// owns the authoritative board; players only ever see it by reference.
pub struct Match {
    board: Board,
    players: [Box<dyn Player>; 2],
}

impl Match {
    /// Creates a match on `board`.
    ///
    /// Fails unless `player_one` places crosses and `player_two` noughts.
    #[instrument(skip_all, fields(dim = board.dim()))]
    pub fn new(board: Board, player_one: Box<dyn Player>, player_two: Box<dyn Player>) -> Result<Self> {
        ensure!(
            player_one.mark() == Mark::One,
            "{} must play as {}",
            player_one.name(),
            Mark::One
        );
        ensure!(
            player_two.mark() == Mark::Two,
            "{} must play as {}",
            player_two.name(),
            Mark::Two
        );
        Ok(Self {
            board,
            players: [player_one, player_two],
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player moving with `mark`.
    pub fn player(&self, mark: Mark) -> &dyn Player {
        &*self.players[Self::seat(mark)]
    }

    /// Clears the board for another game with the same players.
    pub fn reset(&mut self) {
        self.board.clear();
    }

    /// Plays until the game is over without reporting events.
    pub fn play(&mut self) -> Result<GameRecord> {
        self.play_observed(|_| {})
    }

    /// Plays until the game is over, calling `observer` on every event.
    ///
    /// An illegal move from a player is a hard error.
    #[instrument(skip_all, fields(dim = self.board.dim()))]
    pub fn play_observed(&mut self, mut observer: impl FnMut(GameEvent<'_>)) -> Result<GameRecord> {
        info!(
            player_one = %self.players[0].name(),
            player_two = %self.players[1].name(),
            "Starting game"
        );

        let mut moves = Vec::new();
        let mut turn = self.board.occupied_count() + 1;

        while !is_game_over(&self.board) {
            let mark = Mark::for_turn(turn);
            let seat = Self::seat(mark);

            observer(GameEvent::TurnStarted {
                turn,
                player: self.players[seat].name(),
                mark,
                board: &self.board,
            });

            debug!(turn, %mark, "Waiting for move");
            let position = self.players[seat].get_move(&self.board, turn)?;
            self.board.place(mark, position).with_context(|| {
                format!("{} returned an illegal move", self.players[seat].name())
            })?;

            let played = PlayedMove::new(turn, mark, position);
            moves.push(played);
            observer(GameEvent::MoveMade {
                played,
                board: &self.board,
            });
            turn += 1;
        }

        let outcome = self.board.outcome();
        info!(%outcome, moves = moves.len(), "Game over");
        observer(GameEvent::GameOver {
            outcome,
            board: &self.board,
        });

        Ok(GameRecord::new(outcome, moves))
    }

    fn seat(mark: Mark) -> usize {
        match mark {
            Mark::One => 0,
            Mark::Two => 1,
        }
    }
}
