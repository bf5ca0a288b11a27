//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell can be empty or filled
//! with a piece kind. Uses a flat row-major array (`y * width + x`) allocated
//! once at construction.
//!
//! Coordinates: (x, y) where x counts columns from the left and y counts rows
//! from the bottom. Rows at `y >= height` are above the visible board; they are
//! never stored and always read as empty.

use crate::types::{
    Cell, PieceKind, MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH,
};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Dimensions are clamped into the supported range; validated
    /// configurations never hit the clamp.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.clamp(MIN_BOARD_WIDTH, MAX_BOARD_WIDTH);
        let height = height.clamp(MIN_BOARD_HEIGHT, MAX_BOARD_HEIGHT);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at a visible position (x, y).
    /// Returns None outside the stored grid, including above the top row.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Occupancy query used by collision.
    ///
    /// - `None`: out of bounds (`x` outside `[0, width)` or `y < 0`)
    /// - `Some(false)`: empty, which includes every row at or above `height`
    /// - `Some(true)`: a locked fragment
    pub fn is_occupied(&self, x: i8, y: i8) -> Option<bool> {
        if x < 0 || x >= self.width as i8 || y < 0 {
            return None;
        }
        if y >= self.height as i8 {
            return Some(false);
        }
        self.get(x, y).map(|cell| cell.is_some())
    }

    /// Set cell at position (x, y)
    /// Returns false (and writes nothing) outside the visible board
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Mark a cell empty. Returns false outside the visible board.
    pub fn clear_cell(&mut self, x: i8, y: i8) -> bool {
        self.set(x, y, None)
    }

    /// Borrow one row, bottom row first.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Empty every cell of a row.
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.height as usize {
            return;
        }
        let width = self.width as usize;
        let start = y * width;
        self.cells[start..start + width].fill(None);
    }

    /// Shift every row above `cleared_row` down by one, overwriting
    /// `cleared_row`. The top row is empty afterwards.
    pub fn compact_from(&mut self, cleared_row: usize) {
        let height = self.height as usize;
        if cleared_row >= height {
            return;
        }
        let width = self.width as usize;

        // Rows (cleared_row + 1)..height move down as one block.
        let src_start = (cleared_row + 1) * width;
        let dst_start = cleared_row * width;
        self.cells.copy_within(src_start..height * width, dst_start);

        let top_start = (height - 1) * width;
        self.cells[top_start..].fill(None);
    }

    /// Iterate locked fragments as `(x, y, kind)`, bottom row first.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|kind| ((idx % width) as i8, (idx / width) as i8, kind))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Fill a whole row with one kind (for testing)
    #[cfg(test)]
    pub fn fill_row(&mut self, y: i8, kind: PieceKind) {
        for x in 0..self.width as i8 {
            self.set(x, y, Some(kind));
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            crate::types::DEFAULT_BOARD_WIDTH,
            crate::types::DEFAULT_BOARD_HEIGHT,
        )
    }
}
