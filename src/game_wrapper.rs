//! # Game Wrapper Module - Unified Game Interface
//!
//! The abstraction layer that lets the session controller and the terminal
//! frontend work with any of the two-player games through a single type.
//! An enum rather than a trait object keeps dispatch static: each game
//! keeps its specific state and move types, and mismatched game/move pairs
//! are rejected as values instead of panicking.

use crate::games::checkers::{CheckersMove, CheckersState};
use crate::games::connect4::{Connect4Move, Connect4State};
use crate::games::reversi::{ReversiMove, ReversiState};
use crate::games::tictactoe::{TicTacToeMove, TicTacToeState};
use crate::{GameResult, GameState, MoveError, Player};
use std::fmt;

/// Wrapper enum for all supported two-player game types
///
/// Each variant contains the complete game state for its game. 2048 is
/// single-player and lives outside the wrapper.
#[derive(Debug, Clone)]
pub enum GameWrapper {
    /// Tic-tac-toe: 3x3 marks game
    TicTacToe(TicTacToeState),
    /// Checkers: 8x8 draughts with mandatory captures
    Checkers(CheckersState),
    /// Reversi (Othello): 8x8 piece-flipping territory game
    Reversi(ReversiState),
    /// Connect Four: gravity-based 4-in-a-row on a 6x7 grid
    Connect4(Connect4State),
}

/// Wrapper enum for all supported move types
///
/// Moves implement `Eq` and `Hash` so they can key move tables and be
/// compared against the legal move set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoveWrapper {
    /// Tic-tac-toe move: cell index 0-8
    TicTacToe(TicTacToeMove),
    /// Checkers move: origin, destination and captured squares
    Checkers(CheckersMove),
    /// Reversi move: (row, col) placement with automatic flips
    Reversi(ReversiMove),
    /// Connect Four move: column selection with gravity
    Connect4(Connect4Move),
}

impl fmt::Display for MoveWrapper {
    /// Formats moves compactly for prompts and move history.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveWrapper::TicTacToe(m) => write!(f, "T({})", m.0),
            MoveWrapper::Checkers(m) => write!(
                f,
                "K({},{}->{},{})",
                m.from.0, m.from.1, m.to.0, m.to.1
            ),
            MoveWrapper::Reversi(m) => write!(f, "R({},{})", m.0, m.1),
            MoveWrapper::Connect4(m) => write!(f, "C4({})", m.0),
        }
    }
}

impl fmt::Display for GameWrapper {
    /// Delegates to the specific game's board rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameWrapper::TicTacToe(g) => write!(f, "{}", g),
            GameWrapper::Checkers(g) => write!(f, "{}", g),
            GameWrapper::Reversi(g) => write!(f, "{}", g),
            GameWrapper::Connect4(g) => write!(f, "{}", g),
        }
    }
}

macro_rules! impl_game_dispatch {
    ($($variant:ident),*) => {
        impl GameState for GameWrapper {
            type Move = MoveWrapper;

            fn current_player(&self) -> Player {
                match self {
                    $(GameWrapper::$variant(g) => g.current_player(),)*
                }
            }

            fn legal_moves(&self) -> Vec<Self::Move> {
                match self {
                    $(GameWrapper::$variant(g) => g
                        .legal_moves()
                        .into_iter()
                        .map(MoveWrapper::$variant)
                        .collect(),)*
                }
            }

            fn is_legal(&self, mv: &Self::Move) -> bool {
                match (self, mv) {
                    $((GameWrapper::$variant(g), MoveWrapper::$variant(m)) => g.is_legal(m),)*
                    _ => false,
                }
            }

            fn try_apply(&self, mv: &Self::Move) -> Result<Self, MoveError> {
                match (self, mv) {
                    $((GameWrapper::$variant(g), MoveWrapper::$variant(m)) => {
                        Ok(GameWrapper::$variant(g.try_apply(m)?))
                    })*
                    _ => Err(MoveError::MismatchedMove),
                }
            }

            fn result(&self) -> GameResult {
                match self {
                    $(GameWrapper::$variant(g) => g.result(),)*
                }
            }
        }
    };
}

impl_game_dispatch!(TicTacToe, Checkers, Reversi, Connect4);

impl GameWrapper {
    /// Short name of the game, used in prompts and the move history header.
    pub fn game_name(&self) -> &'static str {
        match self {
            GameWrapper::TicTacToe(_) => "Tic-tac-toe",
            GameWrapper::Checkers(_) => "Checkers",
            GameWrapper::Reversi(_) => "Reversi",
            GameWrapper::Connect4(_) => "Connect Four",
        }
    }

    /// Human-readable name of a side in this game.
    pub fn player_name(&self, player: Player) -> &'static str {
        match (self, player) {
            (GameWrapper::TicTacToe(_), Player::One) => "X",
            (GameWrapper::TicTacToe(_), Player::Two) => "O",
            (GameWrapper::Checkers(_), Player::One) => "Red",
            (GameWrapper::Checkers(_), Player::Two) => "Black",
            (GameWrapper::Reversi(_), Player::One) => "Black",
            (GameWrapper::Reversi(_), Player::Two) => "White",
            (GameWrapper::Connect4(_), Player::One) => "Red",
            (GameWrapper::Connect4(_), Player::Two) => "Yellow",
        }
    }
}
