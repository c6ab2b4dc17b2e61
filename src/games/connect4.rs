//! # Connect Four Game Implementation
//!
//! This module implements the classic Connect Four board game.
//! Players take turns dropping discs into columns, trying to get 4 discs
//! in a row (horizontally, vertically, or diagonally).
//!
//! ## Rules
//! - Players alternate dropping discs into columns
//! - Discs fall to the lowest available spot in the column due to gravity
//! - First player to get 4 discs in a row wins
//! - Game is a draw if the board fills up with no winner

use crate::{GameResult, GameState, MoveError, Player};
use grid_scan::{run_through, LINE_AXES};
use std::fmt;
use std::str::FromStr;

/// Board width (number of columns).
pub const WIDTH: usize = 7;
/// Board height (number of rows).
pub const HEIGHT: usize = 6;
/// Number of discs needed in a row to win.
const CONNECT: usize = 4;

/// Represents a move in Connect Four
///
/// Contains the column number where a player wants to drop their disc.
/// The destination row is computed by gravity, not chosen.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Connect4Move(pub usize);

/// Represents the complete state of a Connect Four game
///
/// The board is stored row-major with row 0 at the top. [`Player::One`]
/// plays Red and moves first; [`Player::Two`] plays Yellow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connect4State {
    board: [Option<Player>; WIDTH * HEIGHT],
    current_player: Player,
    /// Last disc placed, if any (row, column).
    last_move: Option<(usize, usize)>,
}

impl Connect4State {
    /// Creates a new game with an empty board, Red to move.
    pub fn new() -> Self {
        Connect4State {
            board: [None; WIDTH * HEIGHT],
            current_player: Player::One,
            last_move: None,
        }
    }

    /// Returns the disc at `(row, col)`, if any. Row 0 is the top row.
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.board.get(row * WIDTH + col).copied().flatten()
    }

    fn winner(&self) -> Option<Player> {
        let (r, c) = self.last_move?;
        let player = self.board[r * WIDTH + c]?;
        for axis in LINE_AXES {
            let run = run_through(r as i32, c as i32, axis, HEIGHT, WIDTH, |rr, cc| {
                self.board[rr as usize * WIDTH + cc as usize] == Some(player)
            });
            if run >= CONNECT {
                return Some(player);
            }
        }
        None
    }
}

impl Default for Connect4State {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for Connect4State {
    type Move = Connect4Move;

    fn current_player(&self) -> Player {
        self.current_player
    }

    fn legal_moves(&self) -> Vec<Self::Move> {
        (0..WIDTH)
            .filter(|&c| self.board[c].is_none())
            .map(Connect4Move)
            .collect()
    }

    /// A move is legal if the column is in bounds and its top cell is empty.
    fn is_legal(&self, mv: &Self::Move) -> bool {
        mv.0 < WIDTH && self.board[mv.0].is_none()
    }

    fn try_apply(&self, mv: &Self::Move) -> Result<Self, MoveError> {
        if mv.0 >= WIDTH {
            return Err(MoveError::OutOfBounds { row: 0, col: mv.0 });
        }
        for r in (0..HEIGHT).rev() {
            let idx = r * WIDTH + mv.0;
            if self.board[idx].is_none() {
                let mut next = self.clone();
                next.board[idx] = Some(self.current_player);
                next.last_move = Some((r, mv.0));
                next.current_player = self.current_player.opponent();
                return Ok(next);
            }
        }
        // Column is full.
        Err(MoveError::Illegal)
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

impl fmt::Display for Connect4State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..HEIGHT {
            for c in 0..WIDTH {
                let symbol = match self.board[r * WIDTH + c] {
                    Some(Player::One) => "R",
                    Some(Player::Two) => "Y",
                    None => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Connect4Move {
    type Err = String;

    /// Parses a column number, e.g. "3".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = s.trim().parse::<usize>().map_err(|e| e.to_string())?;
        Ok(Connect4Move(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> Connect4State {
        let mut game = Connect4State::new();
        for &c in moves {
            game = game.try_apply(&Connect4Move(c)).unwrap();
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = Connect4State::new();
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.legal_moves().len(), 7);
        assert_eq!(game.result(), GameResult::InProgress);
    }

    #[test]
    fn test_gravity_drop() {
        let game = play(&[3, 3]);
        assert_eq!(game.cell(5, 3), Some(Player::One));
        assert_eq!(game.cell(4, 3), Some(Player::Two));
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn test_apply_is_pure() {
        let game = Connect4State::new();
        let before = game.clone();
        let _ = game.try_apply(&Connect4Move(0)).unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn test_full_column_rejected() {
        let game = play(&[2, 2, 2, 2, 2, 2]);
        assert!(!game.is_legal(&Connect4Move(2)));
        assert_eq!(game.try_apply(&Connect4Move(2)), Err(MoveError::Illegal));
        assert_eq!(game.legal_moves().len(), 6);
    }

    #[test]
    fn test_out_of_bounds_column() {
        let game = Connect4State::new();
        assert_eq!(
            game.try_apply(&Connect4Move(7)),
            Err(MoveError::OutOfBounds { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_win_condition_horizontal() {
        // Red: 0, 1, 2, 3; Yellow: 0, 1, 2
        let game = play(&[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(game.result(), GameResult::Win(Player::One));
        assert!(game.is_over());
    }

    #[test]
    fn test_win_condition_vertical() {
        // Red: 0, 0, 0, 0; Yellow: 1, 1, 1
        let game = play(&[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(game.result(), GameResult::Win(Player::One));
    }

    #[test]
    fn test_win_condition_diagonal() {
        // Red builds the rising diagonal from column 0 to column 3.
        let prefix = play(&[0, 1, 1, 2, 2, 3, 2, 3, 3, 6]);
        assert_eq!(prefix.result(), GameResult::InProgress);
        let game = prefix.try_apply(&Connect4Move(3)).unwrap();
        assert_eq!(game.result(), GameResult::Win(Player::One));
    }

    #[test]
    fn test_win_condition_falling_diagonal() {
        // Red builds the falling diagonal from column 0 down to column 3.
        let prefix = play(&[3, 2, 2, 1, 1, 0, 1, 0, 0, 6]);
        assert_eq!(prefix.result(), GameResult::InProgress);
        let game = prefix.try_apply(&Connect4Move(0)).unwrap();
        assert_eq!(game.result(), GameResult::Win(Player::One));
    }

    #[test]
    fn test_no_win_before_fourth_disc() {
        // Three in a row is not enough.
        let game = play(&[0, 0, 1, 1, 2, 2]);
        assert_eq!(game.result(), GameResult::InProgress);
    }

    #[test]
    fn test_alternating_same_column_never_wins() {
        let mut game = Connect4State::new();
        for _ in 0..HEIGHT {
            game = game.try_apply(&Connect4Move(3)).unwrap();
            assert_eq!(game.result(), GameResult::InProgress);
        }
        assert!(!game.is_legal(&Connect4Move(3)));
    }
}
