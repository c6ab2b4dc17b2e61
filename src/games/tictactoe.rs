//! # Tic-tac-toe Game Implementation
//!
//! The 3x3 marks game. Cells are addressed by a single row-major index
//! 0-8, matching how the board is laid out on screen.
//!
//! ## Rules
//! - Players alternate placing their mark on an empty cell
//! - Three equal marks along a row, column or diagonal win
//! - A full board with no winner is a draw

use crate::{GameResult, GameState, MoveError, Player};
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
const CELLS: usize = 9;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Represents a move in tic-tac-toe
///
/// Contains the row-major cell index (0-8) where the player wants to
/// place their mark.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TicTacToeMove(pub usize);

/// Represents the complete state of a tic-tac-toe game
///
/// [`Player::One`] plays X and moves first; [`Player::Two`] plays O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeState {
    board: [Option<Player>; CELLS],
    current_player: Player,
}

impl TicTacToeState {
    /// Creates a new game with an empty board, X to move.
    pub fn new() -> Self {
        TicTacToeState {
            board: [None; CELLS],
            current_player: Player::One,
        }
    }

    /// Returns the mark occupying `index`, if any.
    pub fn cell(&self, index: usize) -> Option<Player> {
        self.board.get(index).copied().flatten()
    }

    fn winner(&self) -> Option<Player> {
        for [a, b, c] in LINES {
            if let Some(mark) = self.board[a] {
                if self.board[b] == Some(mark) && self.board[c] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for TicTacToeState {
    type Move = TicTacToeMove;

    fn current_player(&self) -> Player {
        self.current_player
    }

    fn legal_moves(&self) -> Vec<Self::Move> {
        (0..CELLS)
            .filter(|&i| self.board[i].is_none())
            .map(TicTacToeMove)
            .collect()
    }

    fn is_legal(&self, mv: &Self::Move) -> bool {
        mv.0 < CELLS && self.board[mv.0].is_none()
    }

    fn try_apply(&self, mv: &Self::Move) -> Result<Self, MoveError> {
        if mv.0 >= CELLS {
            return Err(MoveError::OutOfBounds {
                row: mv.0 / 3,
                col: mv.0 % 3,
            });
        }
        if self.board[mv.0].is_some() {
            return Err(MoveError::Illegal);
        }
        let mut next = self.clone();
        next.board[mv.0] = Some(self.current_player);
        next.current_player = self.current_player.opponent();
        Ok(next)
    }

    fn result(&self) -> GameResult {
        if let Some(winner) = self.winner() {
            return GameResult::Win(winner);
        }
        if self.board.iter().all(|cell| cell.is_some()) {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..3 {
            for c in 0..3 {
                let symbol = match self.board[r * 3 + c] {
                    Some(Player::One) => "X",
                    Some(Player::Two) => "O",
                    None => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for TicTacToeMove {
    type Err = String;

    /// Parses a cell index, e.g. "4" for the center.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index = s.trim().parse::<usize>().map_err(|e| e.to_string())?;
        Ok(TicTacToeMove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = TicTacToeState::new();
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.legal_moves().len(), 9);
        assert_eq!(game.result(), GameResult::InProgress);
    }

    #[test]
    fn test_apply_is_pure() {
        let game = TicTacToeState::new();
        let before = game.clone();
        let next = game.try_apply(&TicTacToeMove(4)).unwrap();
        assert_eq!(game, before);
        assert_eq!(next.cell(4), Some(Player::One));
        assert_eq!(next.current_player(), Player::Two);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let game = TicTacToeState::new().try_apply(&TicTacToeMove(4)).unwrap();
        assert!(!game.is_legal(&TicTacToeMove(4)));
        assert_eq!(game.try_apply(&TicTacToeMove(4)), Err(MoveError::Illegal));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let game = TicTacToeState::new();
        assert_eq!(
            game.try_apply(&TicTacToeMove(9)),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_row_win() {
        let mut game = TicTacToeState::new();
        // X: 0, 1, 2; O: 3, 4
        for &i in &[0, 3, 1, 4, 2] {
            game = game.try_apply(&TicTacToeMove(i)).unwrap();
        }
        assert_eq!(game.result(), GameResult::Win(Player::One));
        assert!(game.is_over());
    }

    #[test]
    fn test_column_win() {
        let mut game = TicTacToeState::new();
        // X: 1, 4; O: 2, 5, 8
        for &i in &[1, 2, 4, 5, 0, 8] {
            game = game.try_apply(&TicTacToeMove(i)).unwrap();
        }
        assert_eq!(game.result(), GameResult::Win(Player::Two));
    }

    #[test]
    fn test_diagonal_win() {
        let mut game = TicTacToeState::new();
        // X: 0, 4, 8
        for &i in &[0, 1, 4, 2, 8] {
            game = game.try_apply(&TicTacToeMove(i)).unwrap();
        }
        assert_eq!(game.result(), GameResult::Win(Player::One));
    }

    #[test]
    fn test_draw() {
        let mut game = TicTacToeState::new();
        // X X O / O O X / X O X with no three in a row
        for &i in &[0, 2, 1, 4, 5, 3, 6, 7, 8] {
            game = game.try_apply(&TicTacToeMove(i)).unwrap();
        }
        assert_eq!(game.result(), GameResult::Draw);
        assert!(game.legal_moves().is_empty());
    }
}
