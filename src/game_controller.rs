//! # Game Controller Module - Central Game State Management
//!
//! The `GameController` owns the authoritative game state for one session.
//! All moves go through it: legal moves are applied and recorded, illegal
//! requests are rejected as values and leave the state untouched, so the
//! frontend can treat a rejected click as a silent no-op.
//!
//! The controller never caches the game outcome; [`GameController::result`]
//! recomputes it from the board on every call, keeping the grid the sole
//! source of truth.

use crate::game_wrapper::{GameWrapper, MoveWrapper};
use crate::{GameResult, GameState, MoveError, Player};
use std::time::SystemTime;

/// Result of attempting to apply a move
#[derive(Debug, Clone)]
pub enum MoveResult {
    /// Move was successfully applied
    Applied {
        /// The applied move
        move_made: MoveWrapper,
        /// Player who made the move
        player: Player,
        /// Outcome after the move
        result: GameResult,
    },
    /// Move was rejected; the state is unchanged
    Rejected {
        /// Why the move was rejected
        reason: MoveError,
    },
    /// Game is already over, no more moves allowed
    GameOver,
}

/// A single entry in the move history
#[derive(Debug, Clone)]
pub struct MoveHistoryEntry {
    /// When the move was made
    pub timestamp: SystemTime,
    /// Player who made the move
    pub player: Player,
    /// The move that was made
    pub move_made: MoveWrapper,
    /// Move number (1-indexed)
    pub move_number: usize,
}

impl MoveHistoryEntry {
    fn new(player: Player, move_made: MoveWrapper, move_number: usize) -> Self {
        Self {
            timestamp: SystemTime::now(),
            player,
            move_made,
            move_number,
        }
    }
}

/// The central game controller that owns the authoritative game state
///
/// # Usage
/// ```rust,ignore
/// let mut controller = GameController::new(GameWrapper::TicTacToe(...));
///
/// match controller.try_make_move(mv) {
///     MoveResult::Applied { result, .. } => { /* re-render */ }
///     MoveResult::Rejected { .. } => { /* silent no-op */ }
///     MoveResult::GameOver => { /* prompt for restart */ }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GameController {
    /// The authoritative game state
    game_state: GameWrapper,
    /// Complete history of moves made
    move_history: Vec<MoveHistoryEntry>,
}

impl GameController {
    /// Create a new game controller with the given initial state
    pub fn new(initial_state: GameWrapper) -> Self {
        Self {
            game_state: initial_state,
            move_history: Vec::new(),
        }
    }

    /// Attempt to make a move
    ///
    /// Applies the move if it is legal and records it in the history.
    /// A rejected move changes nothing.
    pub fn try_make_move(&mut self, mv: MoveWrapper) -> MoveResult {
        if self.game_state.is_over() {
            return MoveResult::GameOver;
        }

        let player = self.game_state.current_player();
        match self.game_state.try_apply(&mv) {
            Ok(next) => {
                self.game_state = next;
                let move_number = self.move_history.len() + 1;
                self.move_history
                    .push(MoveHistoryEntry::new(player, mv.clone(), move_number));
                MoveResult::Applied {
                    move_made: mv,
                    player,
                    result: self.game_state.result(),
                }
            }
            Err(reason) => MoveResult::Rejected { reason },
        }
    }

    /// Get a reference to the game state for rendering
    pub fn render_state(&self) -> &GameWrapper {
        &self.game_state
    }

    /// Get the current player
    pub fn current_player(&self) -> Player {
        self.game_state.current_player()
    }

    /// Compute the current game outcome from the board
    pub fn result(&self) -> GameResult {
        self.game_state.result()
    }

    /// Check if the game is over
    pub fn is_game_over(&self) -> bool {
        self.game_state.is_over()
    }

    /// Get legal moves for the current player
    pub fn legal_moves(&self) -> Vec<MoveWrapper> {
        if self.is_game_over() {
            Vec::new()
        } else {
            self.game_state.legal_moves()
        }
    }

    /// Get the complete move history
    pub fn move_history(&self) -> &[MoveHistoryEntry] {
        &self.move_history
    }

    /// Get the number of moves made
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    /// Get the last move made, if any
    pub fn last_move(&self) -> Option<&MoveHistoryEntry> {
        self.move_history.last()
    }

    /// Reset the session to a fresh state, clearing the history
    pub fn reset(&mut self, new_state: GameWrapper) {
        self.game_state = new_state;
        self.move_history.clear();
    }

    /// Format the move history as a printable transcript
    pub fn format_history(&self) -> String {
        if self.move_history.is_empty() {
            return String::from("No moves made yet.");
        }

        let mut output = format!("=== {} Game History ===\n\n", self.game_state.game_name());
        for entry in &self.move_history {
            output.push_str(&format!(
                "{}. {} - {}\n",
                entry.move_number,
                self.game_state.player_name(entry.player),
                entry.move_made
            ));
        }

        match self.result() {
            GameResult::Win(winner) => {
                output.push_str(&format!(
                    "\nResult: {} wins!\n",
                    self.game_state.player_name(winner)
                ));
            }
            GameResult::Draw => output.push_str("\nResult: Draw\n"),
            GameResult::InProgress => {
                output.push_str(&format!(
                    "\n(Game in progress - {} to move)\n",
                    self.game_state.player_name(self.current_player())
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{TicTacToeMove, TicTacToeState};

    fn new_tictactoe() -> GameController {
        GameController::new(GameWrapper::TicTacToe(TicTacToeState::new()))
    }

    #[test]
    fn test_valid_move() {
        let mut controller = new_tictactoe();
        match controller.try_make_move(MoveWrapper::TicTacToe(TicTacToeMove(4))) {
            MoveResult::Applied { player, result, .. } => {
                assert_eq!(player, Player::One);
                assert_eq!(result, GameResult::InProgress);
            }
            other => panic!("Expected applied move, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_move_is_a_no_op() {
        let mut controller = new_tictactoe();
        controller.try_make_move(MoveWrapper::TicTacToe(TicTacToeMove(4)));

        match controller.try_make_move(MoveWrapper::TicTacToe(TicTacToeMove(4))) {
            MoveResult::Rejected {
                reason: MoveError::Illegal,
            } => {}
            other => panic!("Expected rejection, got {:?}", other),
        }
        // Nothing changed: still O's turn, one move in the history.
        assert_eq!(controller.current_player(), Player::Two);
        assert_eq!(controller.move_count(), 1);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut controller = new_tictactoe();
        // X wins on the top row.
        for &i in &[0, 3, 1, 4, 2] {
            controller.try_make_move(MoveWrapper::TicTacToe(TicTacToeMove(i)));
        }
        assert!(controller.is_game_over());
        assert_eq!(controller.result(), GameResult::Win(Player::One));
        assert!(controller.legal_moves().is_empty());
        assert!(matches!(
            controller.try_make_move(MoveWrapper::TicTacToe(TicTacToeMove(8))),
            MoveResult::GameOver
        ));
    }

    #[test]
    fn test_move_history() {
        let mut controller = new_tictactoe();
        controller.try_make_move(MoveWrapper::TicTacToe(TicTacToeMove(0)));
        controller.try_make_move(MoveWrapper::TicTacToe(TicTacToeMove(4)));

        assert_eq!(controller.move_count(), 2);
        assert_eq!(controller.move_history()[0].player, Player::One);
        assert_eq!(controller.move_history()[0].move_number, 1);
        assert_eq!(controller.move_history()[1].player, Player::Two);
    }

    #[test]
    fn test_reset() {
        let mut controller = new_tictactoe();
        controller.try_make_move(MoveWrapper::TicTacToe(TicTacToeMove(4)));
        assert_eq!(controller.move_count(), 1);

        controller.reset(GameWrapper::TicTacToe(TicTacToeState::new()));
        assert_eq!(controller.move_count(), 0);
        assert_eq!(controller.result(), GameResult::InProgress);
        assert_eq!(controller.current_player(), Player::One);
    }

    #[test]
    fn test_format_history() {
        let mut controller = new_tictactoe();
        controller.try_make_move(MoveWrapper::TicTacToe(TicTacToeMove(4)));

        let history = controller.format_history();
        assert!(history.contains("Tic-tac-toe Game History"));
        assert!(history.contains("1. X - T(4)"));
        assert!(history.contains("O to move"));
    }
}
