// rules.rs - Neighbor counting and the birth/survival rule

use crate::grid::{Grid, Matrix, Row};

// The 8 surrounding offsets; the center is never part of the scan
#[rustfmt::skip]
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Counts the live cells around `(row, col)`.
///
/// With wrap the coordinates are taken modulo the grid size, so row 0 sees
/// row `height - 1`. Without wrap anything outside the grid counts as dead.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let cells = grid.matrix();
    let height = grid.height() as isize;
    let width = grid.width() as isize;
    let mut count = 0;

    for &(dr, dc) in &NEIGHBORS {
        let mut nr = row as isize + dr;
        let mut nc = col as isize + dc;
        if grid.wrap() {
            nr = nr.rem_euclid(height);
            nc = nc.rem_euclid(width);
        } else if nr < 0 || nr >= height || nc < 0 || nc >= width {
            continue;
        }
        if cells[nr as usize][nc as usize] {
            count += 1;
        }
    }
    count
}

/// Conway's B3/S23 rule.
#[rustfmt::skip]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Computes one row of the next generation.
fn next_row(grid: &Grid, row: usize, current: &Row) -> Row {
    current
        .iter()
        .enumerate()
        .map(|(col, &alive)| next_state(alive, live_neighbors(grid, row, col)))
        .collect()
}

/// Computes the generation after `grid` into a fresh buffer without touching
/// the grid itself.
pub fn next_generation(grid: &Grid) -> Matrix {
    let mut next = grid.clone_matrix();
    for (row, cells) in grid.matrix().iter().enumerate() {
        next[row] = next_row(grid, row, cells);
    }
    next
}
