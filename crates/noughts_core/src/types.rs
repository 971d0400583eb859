//! Core value types for N×N tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
pub enum Player {
    /// Player one (plays crosses, moves on odd turns).
    #[display("Player 1")]
    One,
    /// Player two (plays noughts, moves on even turns).
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the player number (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Returns the player whose turn it is at the given 1-based ply.
    pub fn for_turn(turn_index: usize) -> Self {
        if turn_index % 2 == 1 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Returns the token this player places on the board.
    pub fn token(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

/// State of a single board cell.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    #[display(" ")]
    Empty,
    /// Cross placed by player one.
    #[display("x")]
    PlayerOne,
    /// Nought placed by player two.
    #[display("o")]
    PlayerTwo,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    /// Checks if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.token()
    }
}

/// Result of evaluating a board.
///
/// Derived from the cells every time it is asked for. `Draw` covers both
/// undecided boards and boards that can no longer be won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Player one completed a line.
    #[display("Player 1 wins")]
    PlayerOneWin,
    /// Player two completed a line.
    #[display("Player 2 wins")]
    PlayerTwoWin,
    /// No completed line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winning outcome for a player.
    pub fn for_player(player: Player) -> Self {
        match player {
            Player::One => Outcome::PlayerOneWin,
            Player::Two => Outcome::PlayerTwoWin,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::PlayerOneWin => Some(Player::One),
            Outcome::PlayerTwoWin => Some(Player::Two),
            Outcome::Draw => None,
        }
    }

    /// Returns true if a player has won.
    pub fn is_win(self) -> bool {
        self.winner().is_some()
    }

    /// Score from player one's perspective: 1 for a win, -1 for a loss, 0 otherwise.
    pub fn score(self) -> i8 {
        match self {
            Outcome::PlayerOneWin => 1,
            Outcome::PlayerTwoWin => -1,
            Outcome::Draw => 0,
        }
    }
}
