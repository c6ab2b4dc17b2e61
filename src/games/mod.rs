//! # Game Implementations Module
//!
//! One module per game in the collection. Each two-player game implements
//! the [`crate::GameState`] trait so the session controller, the move
//! selectors and the frontend can drive it generically.
//!
//! ## Supported Games
//! - **Tic-tac-toe**: 3x3 marks game with an exhaustive minimax opponent
//! - **Checkers**: 8x8 draughts with mandatory captures and a heuristic AI
//! - **Reversi (Othello)**: classic 8x8 piece-flipping strategy game
//! - **Connect Four**: gravity-based 4-in-a-row on a 6x7 grid
//! - **2048**: single-player 4x4 sliding-merge game (does not use the
//!   two-player trait; see [`game2048`])
//!
//! ## Adding New Games
//! To add a two-player game, create a new module and implement:
//! 1. A move type (typically a struct with coordinates)
//! 2. A state type with the `GameState` trait
//! 3. Display and parsing implementations for moves
//! 4. Game-specific rules and win conditions

pub mod checkers;
pub mod connect4;
pub mod game2048;
pub mod reversi;
pub mod tictactoe;
