//! # Reversi (Othello) Game Implementation
//!
//! This module implements the classic Reversi board game.
//! Players take turns placing discs on an 8x8 board, with the goal of
//! having the most discs of their color when neither side can move.
//!
//! ## Rules
//! - A disc must "sandwich" one or more opponent discs between the new
//!   disc and an existing disc of the same color
//! - All sandwiched discs are flipped to the current player's color
//! - If a player has no legal moves, their turn is skipped
//! - Game ends when neither player can make a move
//! - Winner is determined by who has more discs on the board

use crate::{GameResult, GameState, MoveError, Player};
use grid_scan::{in_bounds, DIRECTIONS_8};
use std::fmt;
use std::str::FromStr;

/// Size of the board (8x8).
pub const SIZE: usize = 8;

/// Represents a move in Reversi
///
/// Contains the row and column coordinates where a player wants to place
/// their disc. Both coordinates are 0-based indices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ReversiMove(pub usize, pub usize);

/// Represents the complete state of a Reversi game
///
/// [`Player::One`] plays Black and moves first; [`Player::Two`] plays White.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReversiState {
    board: [[Option<Player>; SIZE]; SIZE],
    current_player: Player,
}

impl ReversiState {
    /// Creates a new game with the standard starting position: four discs
    /// in the center, Black to move.
    pub fn new() -> Self {
        let mut board = [[None; SIZE]; SIZE];
        board[3][3] = Some(Player::Two); // White
        board[3][4] = Some(Player::One); // Black
        board[4][3] = Some(Player::One); // Black
        board[4][4] = Some(Player::Two); // White
        ReversiState {
            board,
            current_player: Player::One,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_board(
        board: [[Option<Player>; SIZE]; SIZE],
        current_player: Player,
    ) -> Self {
        ReversiState {
            board,
            current_player,
        }
    }

    /// Returns the disc at `(row, col)`, if any.
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.board
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .flatten()
    }

    /// Returns the number of (Black, White) discs on the board.
    pub fn disc_counts(&self) -> (usize, usize) {
        let mut black = 0;
        let mut white = 0;
        for row in &self.board {
            for cell in row {
                match cell {
                    Some(Player::One) => black += 1,
                    Some(Player::Two) => white += 1,
                    None => {}
                }
            }
        }
        (black, white)
    }

    /// Returns every legal move for `player`, in row-major scan order.
    pub fn moves_for(&self, player: Player) -> Vec<ReversiMove> {
        let mut moves = Vec::new();
        for r in 0..SIZE {
            for c in 0..SIZE {
                if !self.flips_from(r, c, player).is_empty() {
                    moves.push(ReversiMove(r, c));
                }
            }
        }
        moves
    }

    /// Returns every opponent disc that placing at `mv` would flip for the
    /// current player. An empty result means the move is illegal.
    pub fn flips_for(&self, mv: &ReversiMove) -> Vec<(usize, usize)> {
        self.flips_from(mv.0, mv.1, self.current_player)
    }

    /// Walks all 8 directions from `(row, col)` and collects the opponent
    /// discs bracketed between the placement and an own disc.
    fn flips_from(&self, row: usize, col: usize, player: Player) -> Vec<(usize, usize)> {
        let mut flips = Vec::new();
        if row >= SIZE || col >= SIZE || self.board[row][col].is_some() {
            return flips;
        }
        let opponent = player.opponent();

        for (dr, dc) in DIRECTIONS_8 {
            let mut line = Vec::new();
            let mut nr = row as i32 + dr;
            let mut nc = col as i32 + dc;

            while in_bounds(nr, nc, SIZE, SIZE) {
                match self.board[nr as usize][nc as usize] {
                    Some(p) if p == opponent => line.push((nr as usize, nc as usize)),
                    Some(_) => {
                        flips.extend(line);
                        break;
                    }
                    None => break,
                }
                nr += dr;
                nc += dc;
            }
        }
        flips
    }
}

impl Default for ReversiState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for ReversiState {
    type Move = ReversiMove;

    fn current_player(&self) -> Player {
        self.current_player
    }

    fn legal_moves(&self) -> Vec<Self::Move> {
        self.moves_for(self.current_player)
    }

    fn is_legal(&self, mv: &Self::Move) -> bool {
        !self.flips_for(mv).is_empty()
    }

    fn try_apply(&self, mv: &Self::Move) -> Result<Self, MoveError> {
        let (r, c) = (mv.0, mv.1);
        if r >= SIZE || c >= SIZE {
            return Err(MoveError::OutOfBounds { row: r, col: c });
        }
        let flips = self.flips_for(mv);
        if flips.is_empty() {
            return Err(MoveError::Illegal);
        }

        let mut next = self.clone();
        next.board[r][c] = Some(self.current_player);
        for (fr, fc) in flips {
            next.board[fr][fc] = Some(self.current_player);
        }
        next.current_player = self.current_player.opponent();

        // If the new player has no moves, their turn is skipped.
        if next.legal_moves().is_empty() {
            next.current_player = self.current_player;
        }
        Ok(next)
    }

    fn result(&self) -> GameResult {
        if !self.moves_for(self.current_player).is_empty()
            || !self.moves_for(self.current_player.opponent()).is_empty()
        {
            return GameResult::InProgress;
        }
        let (black, white) = self.disc_counts();
        if black > white {
            GameResult::Win(Player::One)
        } else if white > black {
            GameResult::Win(Player::Two)
        } else {
            GameResult::Draw
        }
    }
}

impl fmt::Display for ReversiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..SIZE {
            for c in 0..SIZE {
                let symbol = match self.board[r][c] {
                    Some(Player::One) => "B",
                    Some(Player::Two) => "W",
                    None => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for ReversiMove {
    type Err = String;

    /// Parses "row,col", e.g. "2,3".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(|p| p.trim()).collect();
        if parts.len() != 2 {
            return Err("Expected format: row,col".to_string());
        }
        let r = parts[0].parse::<usize>().map_err(|e| e.to_string())?;
        let c = parts[1].parse::<usize>().map_err(|e| e.to_string())?;
        Ok(ReversiMove(r, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position() {
        let game = ReversiState::new();
        assert_eq!(game.cell(3, 3), Some(Player::Two));
        assert_eq!(game.cell(3, 4), Some(Player::One));
        assert_eq!(game.cell(4, 3), Some(Player::One));
        assert_eq!(game.cell(4, 4), Some(Player::Two));
        assert_eq!(game.disc_counts(), (2, 2));
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn test_initial_legal_moves() {
        let game = ReversiState::new();
        let moves = game.legal_moves();
        assert_eq!(moves.len(), 4);
        for mv in [
            ReversiMove(2, 3),
            ReversiMove(3, 2),
            ReversiMove(4, 5),
            ReversiMove(5, 4),
        ] {
            assert!(moves.contains(&mv), "missing {:?}", mv);
        }
    }

    #[test]
    fn test_opening_flip() {
        let game = ReversiState::new();
        let next = game.try_apply(&ReversiMove(2, 3)).unwrap();
        // Exactly the white disc at (3,3) flips.
        assert_eq!(next.cell(2, 3), Some(Player::One));
        assert_eq!(next.cell(3, 3), Some(Player::One));
        assert_eq!(next.disc_counts(), (4, 1));
        assert_eq!(next.current_player(), Player::Two);
    }

    #[test]
    fn test_apply_is_pure() {
        let game = ReversiState::new();
        let before = game.clone();
        let _ = game.try_apply(&ReversiMove(2, 3)).unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_without_flips_rejected() {
        let game = ReversiState::new();
        assert_eq!(game.try_apply(&ReversiMove(0, 0)), Err(MoveError::Illegal));
        assert_eq!(
            game.try_apply(&ReversiMove(8, 0)),
            Err(MoveError::OutOfBounds { row: 8, col: 0 })
        );
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let game = ReversiState::new();
        assert!(!game.is_legal(&ReversiMove(3, 3)));
        assert_eq!(game.try_apply(&ReversiMove(3, 3)), Err(MoveError::Illegal));
    }

    #[test]
    fn test_forced_pass() {
        // After Black plays (0,3) and flips the two white discs in row 0,
        // White's only disc at (7,5) has no capturing line, so the turn
        // passes straight back to Black.
        let mut board = [[None; SIZE]; SIZE];
        board[0][4] = Some(Player::Two);
        board[0][5] = Some(Player::Two);
        board[0][6] = Some(Player::One);
        board[0][7] = Some(Player::One);
        board[7][5] = Some(Player::Two);
        board[7][6] = Some(Player::One);
        board[7][7] = Some(Player::One);
        let game = ReversiState::with_board(board, Player::One);

        let next = game.try_apply(&ReversiMove(0, 3)).unwrap();
        assert!(next.moves_for(Player::Two).is_empty());
        assert_eq!(next.current_player(), Player::One);
        assert_eq!(next.result(), GameResult::InProgress);
    }

    #[test]
    fn test_flips_land_own_color() {
        // Walk a few plies and check the flip contract at every position:
        // the placed disc and every flipped disc end up the mover's color,
        // and every flipped disc belonged to the opponent beforehand.
        let mut game = ReversiState::new();
        for _ in 0..6 {
            let mover = game.current_player();
            let mv = match game.legal_moves().into_iter().next() {
                Some(mv) => mv,
                None => break,
            };
            let flips = game.flips_for(&mv);
            assert!(!flips.is_empty());
            let next = game.try_apply(&mv).unwrap();
            assert_eq!(next.cell(mv.0, mv.1), Some(mover));
            for (r, c) in flips {
                assert_eq!(game.cell(r, c), Some(mover.opponent()));
                assert_eq!(next.cell(r, c), Some(mover));
            }
            game = next;
        }
    }

    #[test]
    fn test_game_over_counts_discs() {
        // Black wipes out White's last disc; neither side can move.
        let mut board = [[None; SIZE]; SIZE];
        board[0][0] = Some(Player::One);
        board[0][1] = Some(Player::Two);
        let game = ReversiState::with_board(board, Player::One);

        let next = game.try_apply(&ReversiMove(0, 2)).unwrap();
        assert_eq!(next.disc_counts(), (3, 0));
        assert_eq!(next.result(), GameResult::Win(Player::One));
    }
}
