//! Core contract shared by the board game engines.
//!
//! Every game in the collection is the same conceptual machine: a fixed-size
//! grid, two alternating players, a legal-move predicate and a terminal-state
//! detector. The [`GameState`] trait captures that shape so the session
//! controller, the move selectors and the terminal frontend can drive any of
//! the games through one interface.
//!
//! States are immutable values: applying a move produces a fresh state and
//! leaves the input untouched, so a board captured before a move can never be
//! aliased by the board after it.

pub mod ai;
pub mod game_controller;
pub mod game_wrapper;
pub mod games;

use std::fmt;
use std::hash::Hash;

/// One of the two sides of a game. What the sides are called (marks, colors)
/// is up to each game; turn order always starts with [`Player::One`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the other side.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Outcome of a game, computed fresh from the board on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The game has not ended.
    InProgress,
    /// The given player has won.
    Win(Player),
    /// The game ended with no winner.
    Draw,
}

impl GameResult {
    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

/// Why a move could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The move names a coordinate outside the board. Callers are expected
    /// to stay in bounds; this is reported instead of reading out of range.
    OutOfBounds { row: usize, col: usize },
    /// The move violates the rules in the current position.
    Illegal,
    /// The move belongs to a different game than the state it was sent to.
    MismatchedMove,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the board", row, col)
            }
            MoveError::Illegal => write!(f, "move is not legal in this position"),
            MoveError::MismatchedMove => write!(f, "move type does not match the game"),
        }
    }
}

impl std::error::Error for MoveError {}

/// The state of a two-player board game: a grid snapshot plus the player to
/// act. Implementations are cheap to clone; every transition goes through
/// [`GameState::try_apply`], which copies rather than mutates.
pub trait GameState: Clone {
    /// The type of a move in the game.
    type Move: Clone + Eq + Hash + fmt::Debug;

    /// Returns the player whose turn it is to move.
    fn current_player(&self) -> Player;

    /// Returns every move the current player may legally make.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Applies a move to a copy of this state and returns the successor.
    /// The input state is never modified.
    fn try_apply(&self, mv: &Self::Move) -> Result<Self, MoveError>;

    /// Computes the outcome from the current board alone.
    fn result(&self) -> GameResult;

    /// Returns true if `mv` is in the current legal move set.
    fn is_legal(&self, mv: &Self::Move) -> bool {
        self.legal_moves().contains(mv)
    }

    /// Returns true if the game has ended.
    fn is_over(&self) -> bool {
        self.result().is_over()
    }
}
