//! Board module - the grid of settled cells
//!
//! The board is a 10x23 grid of booleans, `true` meaning a settled block.
//! Uses a flat row-major array for cache locality and zero allocation.
//! Coordinates: (x, y) where x is the column 0..9 (left to right) and y is
//! the row 0..22 (top to bottom).
//!
//! Only two operations write to the grid: imprinting a locked piece and
//! removing filled rows.

use arrayvec::ArrayVec;

use crate::piece::Tetromino;
use crate::types::{BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_COLS * BOARD_ROWS;

/// Row indices collected by a single line-clear pass
pub type ClearedRows = ArrayVec<usize, BOARD_ROWS>;

/// The settled-cell grid - 10 columns x 23 rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * COLS + x)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x as usize >= BOARD_COLS || y < 0 || y as usize >= BOARD_ROWS {
            return None;
        }
        Some((y as usize) * BOARD_COLS + (x as usize))
    }

    pub fn cols(&self) -> usize {
        BOARD_COLS
    }

    pub fn rows(&self) -> usize {
        BOARD_ROWS
    }

    /// Whether the cell at (row, col) holds a settled block
    ///
    /// Out-of-range coordinates read as unoccupied.
    pub fn cell_occupied(&self, row: usize, col: usize) -> bool {
        row < BOARD_ROWS && col < BOARD_COLS && self.cells[row * BOARD_COLS + col]
    }

    /// Get cell at position (x, y), `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, occupied: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    #[inline]
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(false))
    }

    /// Iterate every cell as `(row, col, occupied)`, top to bottom
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &occupied)| (i / BOARD_COLS, i % BOARD_COLS, occupied))
    }

    /// Borrow one row
    pub fn row(&self, y: usize) -> &[bool] {
        let start = y * BOARD_COLS;
        &self.cells[start..start + BOARD_COLS]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_ROWS {
            return false;
        }
        self.row(y).iter().all(|&c| c)
    }

    /// Indices of all filled rows, top to bottom
    pub fn full_rows(&self) -> ClearedRows {
        (0..BOARD_ROWS).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove row `y`: every row above moves down by one and row 0 becomes empty
    pub fn clear_row(&mut self, y: usize) {
        if y >= BOARD_ROWS {
            return;
        }

        for row in (1..=y).rev() {
            let src = (row - 1) * BOARD_COLS;
            self.cells.copy_within(src..src + BOARD_COLS, row * BOARD_COLS);
        }

        self.cells[..BOARD_COLS].fill(false);
    }

    /// Remove every filled row and return their original indices (top to bottom)
    ///
    /// The indices are collected before any row moves. Clearing them in
    /// ascending order keeps each pending index valid: a clear only shifts
    /// rows at or above itself, and every later index is further down.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let filled = self.full_rows();
        for &y in &filled {
            self.clear_row(y);
        }
        filled
    }

    /// Write every set cell of `piece` into the grid
    ///
    /// Cells that fall outside the board are skipped.
    pub fn imprint(&mut self, piece: &Tetromino) {
        for (x, y) in piece.board_cells() {
            self.set(x, y, true);
        }
    }

    /// Number of settled blocks
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Empty the whole board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Build a board from text rows, bottom-aligned
    ///
    /// `#` is a settled block, anything else is empty. Rows shorter than the
    /// board are padded with empty cells; missing top rows stay empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadris_core::Board;
    ///
    /// let board = Board::from_ascii(&["#.........", "##########"]);
    /// assert!(board.cell_occupied(21, 0));
    /// assert!(board.is_row_full(22));
    /// ```
    pub fn from_ascii(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let top = BOARD_ROWS.saturating_sub(rows.len());
        for (i, line) in rows.iter().rev().take(BOARD_ROWS).rev().enumerate() {
            for (x, ch) in line.chars().take(BOARD_COLS).enumerate() {
                if ch == '#' {
                    board.cells[(top + i) * BOARD_COLS + x] = true;
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
