// grid.rs - Cell matrix for Conway's Game of Life

use crate::error::{LifeError, Result};
use crate::patterns::Pattern;

pub type Row = Vec<bool>;                 // One row of cells, `true` is alive
pub type Matrix = Vec<Row>;               // `height` rows of `width` cells

/// A fixed-size grid of dead/alive cells.
///
/// `wrap` selects the edge policy used when counting neighbors: with wrap the
/// grid is a torus, without it everything past the edge is permanently dead.
/// Placement is bounds-checked under both policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    wrap: bool,
    cells: Matrix,
}

impl Grid {
    /// Creates an all-dead `height` x `width` grid.
    pub fn new(width: usize, height: usize, wrap: bool) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            wrap,
            cells: vec![vec![false; width]; height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    /// Kills every cell without reallocating.
    pub fn reset(&mut self) {
        for row in &mut self.cells {
            row.fill(false);
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.check(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        self.check(row, col)?;
        self.cells[row][col] = alive;
        Ok(())
    }

    /// Copies `pattern` into the grid with its top-left corner at column `x`,
    /// row `y`, overwriting whatever was there (dead pattern cells clear live
    /// grid cells).
    ///
    /// The whole pattern must fit. On error the grid is left untouched.
    pub fn place(&mut self, pattern: &Pattern, x: usize, y: usize) -> Result<()> {
        let last_row = y.checked_add(pattern.height() - 1);
        let last_col = x.checked_add(pattern.width() - 1);
        match (last_row, last_col) {
            (Some(row), Some(col)) if row < self.height && col < self.width => {}
            (row, col) => {
                return Err(LifeError::OutOfBounds {
                    row: row.unwrap_or(usize::MAX),
                    col: col.unwrap_or(usize::MAX),
                    height: self.height,
                    width: self.width,
                });
            }
        }

        for (dy, src) in pattern.rows().iter().enumerate() {
            self.cells[y + dy][x..x + src.len()].copy_from_slice(src);
        }
        Ok(())
    }

    /// Read-only view of the current cells.
    pub fn matrix(&self) -> &Matrix {
        &self.cells
    }

    /// Deep copy of the current cells.
    pub fn clone_matrix(&self) -> Matrix {
        self.cells.clone()
    }

    /// Swaps in a freshly computed generation in one move.
    pub(crate) fn replace(&mut self, next: Matrix) {
        debug_assert_eq!(next.len(), self.height);
        debug_assert!(next.iter().all(|row| row.len() == self.width));
        self.cells = next;
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&alive| alive).count())
            .sum()
    }

    /// The cells as 0/1 values.
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&alive| u8::from(alive)).collect())
            .collect()
    }

    fn check(&self, row: usize, col: usize) -> Result<()> {
        if row < self.height && col < self.width {
            Ok(())
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }
}
