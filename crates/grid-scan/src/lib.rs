#![no_std]

/// The 8 compass directions as (row, col) deltas, row-major scan order.
pub const DIRECTIONS_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The 4 line axes of an N-in-a-row check: horizontal, vertical and the
/// two diagonals. Each axis is walked in both signed directions.
pub const LINE_AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Returns true if `(row, col)` lies inside a `height` x `width` grid.
pub fn in_bounds(row: i32, col: i32, height: usize, width: usize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < height && (col as usize) < width
}

/// Counts the contiguous run of cells satisfying `occupied` along one axis
/// through `(row, col)`, the anchor cell included.
///
/// # Arguments
/// * `row`, `col` - Anchor cell, assumed in bounds and satisfying `occupied`
/// * `axis` - (row, col) delta of the axis to walk; both signed directions
///   are counted
/// * `height`, `width` - Grid dimensions
/// * `occupied` - Predicate over in-bounds (row, col) coordinates
pub fn run_through<F>(
    row: i32,
    col: i32,
    axis: (i32, i32),
    height: usize,
    width: usize,
    occupied: F,
) -> usize
where
    F: Fn(i32, i32) -> bool,
{
    let (dr, dc) = axis;
    let mut count = 1;
    for sign in [-1, 1] {
        let mut r = row + sign * dr;
        let mut c = col + sign * dc;
        while in_bounds(r, c, height, width) && occupied(r, c) {
            count += 1;
            r += sign * dr;
            c += sign * dc;
        }
    }
    count
}
