//! # Move Selection Module
//!
//! One selector per game that had an opponent or a hint feature. All
//! randomized selectors draw from an injected [`Rng`] so callers control
//! seeding; given a fixed random source every selector is deterministic.
//!
//! - Tic-tac-toe: exhaustive minimax on hard, uniform random on easy
//! - Checkers: single-ply heuristic (captures first, then promotion
//!   distance), plus a deterministic hint variant
//! - Reversi: greedy most-flips, also used for hints
//! - Any game: [`random_move`] over the legal move set

use crate::games::checkers::{promotion_row, CheckersMove, CheckersState, Rank};
use crate::games::reversi::{ReversiMove, ReversiState};
use crate::games::tictactoe::{TicTacToeMove, TicTacToeState};
use crate::{GameResult, GameState, Player};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Strength of the tic-tac-toe opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Hard,
}

/// Picks a uniformly random legal move. Returns `None` when the player to
/// move has no legal moves.
pub fn random_move<S: GameState, R: Rng>(state: &S, rng: &mut R) -> Option<S::Move> {
    state.legal_moves().choose(rng).cloned()
}

/// Selects a tic-tac-toe move at the given difficulty.
pub fn select_tictactoe_move<R: Rng>(
    state: &TicTacToeState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<TicTacToeMove> {
    match difficulty {
        Difficulty::Easy => random_move(state, rng),
        Difficulty::Hard => best_tictactoe_move(state),
    }
}

/// Exhaustive minimax over the remaining empty cells, no pruning, no
/// transposition cache; the board never exceeds 9 cells. Ties among
/// equally-scored root moves resolve to the first in cell-index order.
pub fn best_tictactoe_move(state: &TicTacToeState) -> Option<TicTacToeMove> {
    let ai = state.current_player();
    let mut best_score = i32::MIN;
    let mut best = None;
    for mv in state.legal_moves() {
        let next = state.try_apply(&mv).ok()?;
        let score = minimax(&next, ai, 0, false);
        if score > best_score {
            best_score = score;
            best = Some(mv);
        }
    }
    best
}

/// Scores a position for `ai`: `+(10 - depth)` for an AI win, `-(10 - depth)`
/// for an opponent win, 0 for a draw, recursing to exhaustion.
fn minimax(state: &TicTacToeState, ai: Player, depth: i32, maximizing: bool) -> i32 {
    match state.result() {
        GameResult::Win(winner) if winner == ai => return 10 - depth,
        GameResult::Win(_) => return depth - 10,
        GameResult::Draw => return 0,
        GameResult::InProgress => {}
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in state.legal_moves() {
        if let Ok(next) = state.try_apply(&mv) {
            let score = minimax(&next, ai, depth + 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
    }
    best
}

/// Rows between `row` and `player`'s promotion rank.
fn promotion_distance(player: Player, row: usize) -> usize {
    row.abs_diff(promotion_row(player))
}

/// Returns true if `mv` moves a man (not a king) of the current player.
fn moves_a_man(state: &CheckersState, mv: &CheckersMove) -> bool {
    state
        .piece_at(mv.from.0, mv.from.1)
        .map(|p| p.rank == Rank::Man)
        .unwrap_or(false)
}

/// Returns true if `mv` promotes a man to king.
fn promotes(state: &CheckersState, mv: &CheckersMove) -> bool {
    moves_a_man(state, mv) && mv.to.0 == promotion_row(state.current_player())
}

/// Single-ply heuristic checkers opponent, no look-ahead. Priority order:
/// 1. capturing moves that promote, uniformly at random;
/// 2. any capturing move, uniformly at random;
/// 3. the man move whose origin is closest to the promotion rank
///    (stable first on ties);
/// 4. uniformly random among all legal moves.
pub fn select_checkers_move<R: Rng>(state: &CheckersState, rng: &mut R) -> Option<CheckersMove> {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return None;
    }
    let player = state.current_player();

    let captures: Vec<&CheckersMove> = moves.iter().filter(|mv| mv.is_capture()).collect();
    if !captures.is_empty() {
        let promoting: Vec<&CheckersMove> = captures
            .iter()
            .copied()
            .filter(|mv| promotes(state, mv))
            .collect();
        if !promoting.is_empty() {
            return promoting.choose(rng).map(|mv| (*mv).clone());
        }
        return captures.choose(rng).map(|mv| (*mv).clone());
    }

    let man_moves: Vec<&CheckersMove> = moves
        .iter()
        .filter(|mv| moves_a_man(state, mv))
        .collect();
    if let Some(mv) = man_moves
        .iter()
        .min_by_key(|mv| promotion_distance(player, mv.from.0))
    {
        return Some((*mv).clone());
    }
    moves.choose(rng).cloned()
}

/// Deterministic variant of the checkers heuristic used for hints: the same
/// priority order, taking the first candidate at every tier.
pub fn suggest_checkers_move(state: &CheckersState) -> Option<CheckersMove> {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return None;
    }
    let player = state.current_player();

    let captures: Vec<&CheckersMove> = moves.iter().filter(|mv| mv.is_capture()).collect();
    if !captures.is_empty() {
        if let Some(mv) = captures.iter().find(|mv| promotes(state, mv)) {
            return Some((*mv).clone());
        }
        return Some(captures[0].clone());
    }

    let man_moves: Vec<&CheckersMove> = moves
        .iter()
        .filter(|mv| moves_a_man(state, mv))
        .collect();
    if let Some(mv) = man_moves
        .iter()
        .min_by_key(|mv| promotion_distance(player, mv.from.0))
    {
        return Some((*mv).clone());
    }
    Some(moves[0].clone())
}

/// Greedy reversi selector: the legal move flipping the most discs, stable
/// on the first in row-major scan order. Doubles as the hint move.
pub fn select_reversi_move(state: &ReversiState) -> Option<ReversiMove> {
    let mut best: Option<(usize, ReversiMove)> = None;
    for mv in state.legal_moves() {
        let flips = state.flips_for(&mv).len();
        if best.as_ref().map_or(true, |(most, _)| flips > *most) {
            best = Some((flips, mv));
        }
    }
    best.map(|(_, mv)| mv)
}
