//! # Checkers Game Implementation
//!
//! 8x8 draughts on the dark squares (where row + col is odd). Red sits on
//! the top three rows and moves down the board; Black sits on the bottom
//! three rows and moves up. Kings move both ways.
//!
//! ## Rules
//! - Men step one diagonal toward the opponent's edge; kings step either way
//! - A piece jumps an adjacent enemy piece when the square beyond is empty,
//!   removing it; jumps are single-step (no chained multi-jumps)
//! - Capturing is mandatory: if any piece of the mover can jump, only
//!   jumping moves are legal
//! - A man reaching the far rank is promoted to king in place
//! - A player with no pieces or no legal moves loses

use crate::{GameResult, GameState, MoveError, Player};
use grid_scan::in_bounds;
use std::fmt;
use std::str::FromStr;

/// Size of the board (8x8).
pub const SIZE: usize = 8;

/// Rank of a piece. Promotion upgrades a man to king in place; it never
/// creates a new piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

/// A piece on the board, owned by the square holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Player,
    pub rank: Rank,
}

/// Represents a move in checkers
///
/// A move with a non-empty capture list is a capturing move; the listed
/// squares are cleared when the move is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckersMove {
    pub from: (usize, usize),
    pub to: (usize, usize),
    /// Squares of the pieces removed by this move.
    pub captures: Vec<(usize, usize)>,
}

impl CheckersMove {
    /// Returns true if this move captures at least one piece.
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

/// The far rank `player`'s men promote on: row 7 for Red, row 0 for Black.
pub fn promotion_row(player: Player) -> usize {
    match player {
        Player::One => SIZE - 1,
        Player::Two => 0,
    }
}

/// Row directions a piece may move in. Men only move toward the opponent's
/// edge; kings move both ways.
fn row_dirs(piece: Piece) -> &'static [i32] {
    match (piece.rank, piece.owner) {
        (Rank::Man, Player::One) => &[1],
        (Rank::Man, Player::Two) => &[-1],
        (Rank::King, _) => &[1, -1],
    }
}

/// Represents the complete state of a checkers game
///
/// [`Player::One`] plays Red and moves first; [`Player::Two`] plays Black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckersState {
    board: [[Option<Piece>; SIZE]; SIZE],
    current_player: Player,
}

impl CheckersState {
    /// Creates a new game with both sides' men on the dark squares of
    /// their first three rows, Red to move.
    pub fn new() -> Self {
        let mut board = [[None; SIZE]; SIZE];
        for row in 0..3 {
            for col in 0..SIZE {
                if (row + col) % 2 == 1 {
                    board[row][col] = Some(Piece {
                        owner: Player::One,
                        rank: Rank::Man,
                    });
                }
            }
        }
        for row in 5..SIZE {
            for col in 0..SIZE {
                if (row + col) % 2 == 1 {
                    board[row][col] = Some(Piece {
                        owner: Player::Two,
                        rank: Rank::Man,
                    });
                }
            }
        }
        CheckersState {
            board,
            current_player: Player::One,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_board(
        board: [[Option<Piece>; SIZE]; SIZE],
        current_player: Player,
    ) -> Self {
        CheckersState {
            board,
            current_player,
        }
    }

    /// Returns the piece at `(row, col)`, if any.
    pub fn piece_at(&self, row: usize, col: usize) -> Option<Piece> {
        self.board
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .flatten()
    }

    /// Returns the number of pieces `player` has left.
    pub fn piece_count(&self, player: Player) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|cell| cell.map(|p| p.owner) == Some(player))
            .count()
    }

    /// Returns every legal move for `player` under the mandatory-capture
    /// rule: if any piece of `player` can jump, only jumping moves are
    /// returned.
    pub fn moves_for(&self, player: Player) -> Vec<CheckersMove> {
        let mut jumps = Vec::new();
        let mut steps = Vec::new();

        for row in 0..SIZE {
            for col in 0..SIZE {
                let piece = match self.board[row][col] {
                    Some(p) if p.owner == player => p,
                    _ => continue,
                };
                for &dr in row_dirs(piece) {
                    for dc in [-1i32, 1] {
                        let jr = row as i32 + dr;
                        let jc = col as i32 + dc;
                        let lr = row as i32 + 2 * dr;
                        let lc = col as i32 + 2 * dc;

                        if in_bounds(lr, lc, SIZE, SIZE)
                            && self.board[lr as usize][lc as usize].is_none()
                            && self.board[jr as usize][jc as usize]
                                .map(|p| p.owner == player.opponent())
                                .unwrap_or(false)
                        {
                            jumps.push(CheckersMove {
                                from: (row, col),
                                to: (lr as usize, lc as usize),
                                captures: vec![(jr as usize, jc as usize)],
                            });
                        } else if in_bounds(jr, jc, SIZE, SIZE)
                            && self.board[jr as usize][jc as usize].is_none()
                        {
                            steps.push(CheckersMove {
                                from: (row, col),
                                to: (jr as usize, jc as usize),
                                captures: Vec::new(),
                            });
                        }
                    }
                }
            }
        }

        if jumps.is_empty() {
            steps
        } else {
            jumps
        }
    }

    /// Returns the legal moves of the current player's piece at `(row, col)`.
    /// Respects the player-wide mandatory-capture rule, so a piece with only
    /// quiet moves has none while another piece can jump.
    pub fn moves_for_piece(&self, row: usize, col: usize) -> Vec<CheckersMove> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.from == (row, col))
            .collect()
    }
}

impl Default for CheckersState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for CheckersState {
    type Move = CheckersMove;

    fn current_player(&self) -> Player {
        self.current_player
    }

    fn legal_moves(&self) -> Vec<Self::Move> {
        self.moves_for(self.current_player)
    }

    fn try_apply(&self, mv: &Self::Move) -> Result<Self, MoveError> {
        for &(row, col) in [&mv.from, &mv.to] {
            if row >= SIZE || col >= SIZE {
                return Err(MoveError::OutOfBounds { row, col });
            }
        }
        if !self.is_legal(mv) {
            return Err(MoveError::Illegal);
        }

        let mut next = self.clone();
        let mut piece = next.board[mv.from.0][mv.from.1]
            .take()
            .ok_or(MoveError::Illegal)?;
        for &(cr, cc) in &mv.captures {
            next.board[cr][cc] = None;
        }
        if piece.rank == Rank::Man && mv.to.0 == promotion_row(piece.owner) {
            piece.rank = Rank::King;
        }
        next.board[mv.to.0][mv.to.1] = Some(piece);
        next.current_player = self.current_player.opponent();
        Ok(next)
    }

    /// The player to move loses immediately with no pieces or no legal
    /// moves; checkers has no draw rule here.
    fn result(&self) -> GameResult {
        if self.piece_count(self.current_player) == 0 || self.legal_moves().is_empty() {
            GameResult::Win(self.current_player.opponent())
        } else {
            GameResult::InProgress
        }
    }
}

impl fmt::Display for CheckersState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..SIZE {
            for c in 0..SIZE {
                let symbol = match self.board[r][c] {
                    Some(Piece {
                        owner: Player::One,
                        rank: Rank::Man,
                    }) => "r",
                    Some(Piece {
                        owner: Player::One,
                        rank: Rank::King,
                    }) => "R",
                    Some(Piece {
                        owner: Player::Two,
                        rank: Rank::Man,
                    }) => "b",
                    Some(Piece {
                        owner: Player::Two,
                        rank: Rank::King,
                    }) => "B",
                    None => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for CheckersMove {
    type Err = String;

    /// Parses "from_row,from_col->to_row,to_col", e.g. "5,0->4,1". The
    /// capture list is left empty; callers resolve the parsed endpoints
    /// against the legal move set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once("->")
            .ok_or_else(|| "Expected format: r,c->r,c".to_string())?;
        let parse_pos = |part: &str| -> Result<(usize, usize), String> {
            let (r, c) = part
                .split_once(',')
                .ok_or_else(|| "Expected format: r,c".to_string())?;
            Ok((
                r.trim().parse::<usize>().map_err(|e| e.to_string())?,
                c.trim().parse::<usize>().map_err(|e| e.to_string())?,
            ))
        };
        Ok(CheckersMove {
            from: parse_pos(from)?,
            to: parse_pos(to)?,
            captures: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn man(owner: Player) -> Option<Piece> {
        Some(Piece {
            owner,
            rank: Rank::Man,
        })
    }

    fn king(owner: Player) -> Option<Piece> {
        Some(Piece {
            owner,
            rank: Rank::King,
        })
    }

    #[test]
    fn test_initial_setup() {
        let game = CheckersState::new();
        assert_eq!(game.piece_count(Player::One), 12);
        assert_eq!(game.piece_count(Player::Two), 12);
        assert_eq!(game.current_player(), Player::One);
        // Pieces sit on dark squares only.
        for r in 0..SIZE {
            for c in 0..SIZE {
                if game.piece_at(r, c).is_some() {
                    assert_eq!((r + c) % 2, 1);
                }
            }
        }
    }

    #[test]
    fn test_opening_moves() {
        let game = CheckersState::new();
        let moves = game.legal_moves();
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|mv| !mv.is_capture()));
        assert!(moves.iter().all(|mv| mv.from.0 == 2 && mv.to.0 == 3));
    }

    #[test]
    fn test_mandatory_capture() {
        let mut board = [[None; SIZE]; SIZE];
        board[2][1] = man(Player::One);
        board[3][2] = man(Player::Two);
        board[0][1] = man(Player::One); // has quiet moves only
        let game = CheckersState::with_board(board, Player::One);

        let moves = game.legal_moves();
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_capture());
        assert_eq!(moves[0].from, (2, 1));
        assert_eq!(moves[0].to, (4, 3));
        assert_eq!(moves[0].captures, vec![(3, 2)]);
    }

    #[test]
    fn test_capture_removes_piece() {
        let mut board = [[None; SIZE]; SIZE];
        board[2][1] = man(Player::One);
        board[3][2] = man(Player::Two);
        let game = CheckersState::with_board(board, Player::One);
        let before = game.clone();

        let mv = game.legal_moves().into_iter().next().unwrap();
        let next = game.try_apply(&mv).unwrap();
        assert_eq!(game, before);
        assert_eq!(next.piece_at(3, 2), None);
        assert_eq!(next.piece_at(2, 1), None);
        assert_eq!(next.piece_at(4, 3).map(|p| p.owner), Some(Player::One));
        assert_eq!(next.current_player(), Player::Two);
    }

    #[test]
    fn test_quiet_move_rejected_when_capture_exists() {
        let mut board = [[None; SIZE]; SIZE];
        board[2][1] = man(Player::One);
        board[3][2] = man(Player::Two);
        let game = CheckersState::with_board(board, Player::One);

        let quiet = CheckersMove {
            from: (2, 1),
            to: (3, 0),
            captures: Vec::new(),
        };
        assert_eq!(game.try_apply(&quiet), Err(MoveError::Illegal));
    }

    #[test]
    fn test_promotion_on_far_rank() {
        let mut board = [[None; SIZE]; SIZE];
        board[6][1] = man(Player::One);
        let game = CheckersState::with_board(board, Player::One);

        let mv = CheckersMove {
            from: (6, 1),
            to: (7, 0),
            captures: Vec::new(),
        };
        let next = game.try_apply(&mv).unwrap();
        assert_eq!(next.piece_at(7, 0).map(|p| p.rank), Some(Rank::King));
    }

    #[test]
    fn test_king_moves_both_ways() {
        let mut board = [[None; SIZE]; SIZE];
        board[4][3] = king(Player::One);
        let game = CheckersState::with_board(board, Player::One);

        let moves = game.legal_moves();
        assert_eq!(moves.len(), 4);
        let destinations: Vec<_> = moves.iter().map(|mv| mv.to).collect();
        for to in [(3, 2), (3, 4), (5, 2), (5, 4)] {
            assert!(destinations.contains(&to));
        }
    }

    #[test]
    fn test_man_cannot_move_backward() {
        let mut board = [[None; SIZE]; SIZE];
        board[4][3] = man(Player::Two);
        let game = CheckersState::with_board(board, Player::Two);

        let moves = game.legal_moves();
        assert!(moves.iter().all(|mv| mv.to.0 == 3));
    }

    #[test]
    fn test_no_pieces_loses() {
        let mut board = [[None; SIZE]; SIZE];
        board[0][1] = man(Player::One);
        let game = CheckersState::with_board(board, Player::Two);
        assert_eq!(game.result(), GameResult::Win(Player::One));
    }

    #[test]
    fn test_no_moves_loses() {
        // Black's lone man on the edge is boxed in by red pieces it cannot
        // jump (the landing squares are occupied).
        let mut board = [[None; SIZE]; SIZE];
        board[7][0] = man(Player::Two);
        board[6][1] = man(Player::One);
        board[5][2] = man(Player::One);
        let game = CheckersState::with_board(board, Player::Two);

        assert!(game.legal_moves().is_empty());
        assert_eq!(game.result(), GameResult::Win(Player::One));
    }

    #[test]
    fn test_moves_for_piece_respects_global_captures() {
        let mut board = [[None; SIZE]; SIZE];
        board[2][1] = man(Player::One);
        board[3][2] = man(Player::Two);
        board[0][1] = man(Player::One);
        let game = CheckersState::with_board(board, Player::One);

        // The piece at (0,1) only has quiet moves, so while (2,1) can jump
        // it has nothing to play.
        assert!(game.moves_for_piece(0, 1).is_empty());
        assert_eq!(game.moves_for_piece(2, 1).len(), 1);
    }
}
