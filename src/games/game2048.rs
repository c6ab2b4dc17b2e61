//! # 2048 Game Implementation
//!
//! Single-player 4x4 sliding-merge game. Unlike the board games this has
//! no opponent, so it does not implement the two-player trait; it exposes
//! the same pure-transition shape as inherent methods, with the random
//! tile spawner driven by an injected RNG.
//!
//! ## Rules
//! - A slide compresses every row/column toward the chosen edge
//! - Equal neighbors merge once per slide, scoring the merged value
//! - After a slide that moved something, a new tile spawns on a random
//!   empty cell: 2 with probability 0.9, else 4
//! - The game is over when no direction produces movement

use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Size of the grid (4x4).
pub const SIZE: usize = 4;

/// Direction of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SlideDirection {
    /// All four directions, used by the stuck-grid check.
    pub const ALL: [SlideDirection; 4] = [
        SlideDirection::Up,
        SlideDirection::Down,
        SlideDirection::Left,
        SlideDirection::Right,
    ];
}

/// Represents the complete state of a 2048 game
///
/// The grid holds tile face values, 0 meaning empty. The score is the
/// running sum of merged tile values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game2048 {
    grid: [[u32; SIZE]; SIZE],
    score: u32,
}

impl Game2048 {
    /// Creates a new game: an empty grid with two spawned tiles.
    pub fn new(rng: &mut impl Rng) -> Self {
        let game = Game2048 {
            grid: [[0; SIZE]; SIZE],
            score: 0,
        };
        game.spawn_tile(rng).spawn_tile(rng)
    }

    #[cfg(test)]
    pub(crate) fn with_grid(grid: [[u32; SIZE]; SIZE], score: u32) -> Self {
        Game2048 { grid, score }
    }

    /// Returns the tile value at `(row, col)`; 0 means empty.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.grid[row][col]
    }

    /// Returns the running score.
    pub fn score(&self) -> u32 {
        self.score
    }

    fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for r in 0..SIZE {
            for c in 0..SIZE {
                if self.grid[r][c] == 0 {
                    empty.push((r, c));
                }
            }
        }
        empty
    }

    /// Returns a copy with a tile spawned on a random empty cell, or an
    /// unchanged copy if the grid is full.
    pub fn spawn_tile(&self, rng: &mut impl Rng) -> Self {
        let empty = self.empty_cells();
        let mut next = self.clone();
        if empty.is_empty() {
            return next;
        }
        let (r, c) = empty[rng.random_range(0..empty.len())];
        next.grid[r][c] = if rng.random_bool(0.9) { 2 } else { 4 };
        next
    }

    /// Slides the grid in `direction`. Returns the successor state with the
    /// merge score added, or `None` if nothing moved (a no-op slide).
    pub fn slide(&self, direction: SlideDirection) -> Option<Self> {
        let rotations = match direction {
            SlideDirection::Left => 0,
            SlideDirection::Down => 1,
            SlideDirection::Right => 2,
            SlideDirection::Up => 3,
        };

        let mut grid = self.grid;
        for _ in 0..rotations {
            grid = rotate(grid);
        }

        let mut moved = false;
        let mut gained = 0;
        for row in &mut grid {
            let (new_row, score) = slide_row(*row);
            if new_row != *row {
                moved = true;
            }
            gained += score;
            *row = new_row;
        }

        for _ in 0..(4 - rotations) % 4 {
            grid = rotate(grid);
        }

        if !moved {
            return None;
        }
        Some(Game2048 {
            grid,
            score: self.score + gained,
        })
    }

    /// Performs one full turn: slide, then spawn on movement. A slide that
    /// moves nothing spawns nothing and returns `None`.
    pub fn step(&self, direction: SlideDirection, rng: &mut impl Rng) -> Option<Self> {
        self.slide(direction).map(|next| next.spawn_tile(rng))
    }

    /// Returns true when no direction produces movement.
    pub fn is_over(&self) -> bool {
        if !self.empty_cells().is_empty() {
            return false;
        }
        SlideDirection::ALL
            .iter()
            .all(|&dir| self.slide(dir).is_none())
    }
}

/// Rotates the grid a quarter turn clockwise.
fn rotate(grid: [[u32; SIZE]; SIZE]) -> [[u32; SIZE]; SIZE] {
    let mut rotated = [[0; SIZE]; SIZE];
    for (y, row) in grid.iter().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            rotated[x][SIZE - 1 - y] = value;
        }
    }
    rotated
}

/// Compresses one row toward index 0, merging each pair of equal neighbors
/// at most once. Returns the new row and the score gained.
fn slide_row(row: [u32; SIZE]) -> ([u32; SIZE], u32) {
    let mut tiles: Vec<u32> = row.iter().copied().filter(|&v| v != 0).collect();
    let mut gained = 0;
    for i in 0..tiles.len().saturating_sub(1) {
        if tiles[i] != 0 && tiles[i] == tiles[i + 1] {
            tiles[i] *= 2;
            gained += tiles[i];
            tiles[i + 1] = 0;
        }
    }
    let mut out = [0; SIZE];
    for (slot, value) in out.iter_mut().zip(tiles.into_iter().filter(|&v| v != 0)) {
        *slot = value;
    }
    (out, gained)
}

impl fmt::Display for Game2048 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for &value in row {
                if value == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{:>6}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for SlideDirection {
    type Err = String;

    /// Parses a direction name or its WASD key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" => Ok(SlideDirection::Up),
            "down" | "s" => Ok(SlideDirection::Down),
            "left" | "a" => Ok(SlideDirection::Left),
            "right" | "d" => Ok(SlideDirection::Right),
            other => Err(format!("unknown direction: {}", other)),
        }
    }
}
