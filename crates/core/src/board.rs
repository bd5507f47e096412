//! Board module - manages the game grid
//!
//! The board is a `height x width` grid where each cell is empty or holds the kind
//! of the piece that was locked there. Storage is a single flat row-major vector,
//! allocated once at construction; the dimensions never change afterwards.
//! Coordinates are `(row, col)`, with row 0 at the top.

use crate::config::ConfigError;
use crate::shape::Shape;
use crate::types::{
    Cell, PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH,
};

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the given size
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        validate_size(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        })
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if self.is_out_of_bounds(row, col) {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i16, col: i16) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i16, col: i16, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i16, col: i16) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check all four directions; a negative row is out of bounds too.
    pub fn is_out_of_bounds(&self, row: i16, col: i16) -> bool {
        row < 0 || row >= self.height as i16 || col < 0 || col >= self.width as i16
    }

    /// Whether `shape` placed with its top-left cell at `at` would leave the
    /// board or overlap a locked cell.
    ///
    /// Spawns happen at row 0 and pieces only ever move down, so the
    /// negative-row branch never fires during play.
    /// A cell whose coordinates overflow `i16` is off the board too.
    pub fn collides(&self, shape: &Shape, at: Position) -> bool {
        shape.cells().iter().any(|&(dr, dc)| {
            match at.checked_offset(dr as i16, dc as i16) {
                Some(cell) => !self.is_free(cell.row, cell.col),
                None => true,
            }
        })
    }

    /// Cells of row `row`, or None if out of range.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = row * width;
        Some(&self.cells[start..start + width])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    /// Remove every full row, shift the rows above down, and return how many
    /// rows were removed.
    ///
    /// Two-pointer compaction from the bottom: surviving rows keep their
    /// relative order and the vacated rows at the top become empty.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut cleared = 0;
        let mut write_row = height;

        for read_row in (0..height).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_row * width);
                }
            }
        }

        self.cells[..write_row * width].fill(None);
        cleared
    }

    /// Write `shape` into the board at `at` with the given kind.
    /// Returns false (and writes nothing) if any cell is out of bounds or occupied.
    pub fn lock_piece(&mut self, shape: &Shape, at: Position, kind: PieceKind) -> bool {
        if self.collides(shape, at) {
            return false;
        }

        for &(dr, dc) in shape.cells().iter() {
            if let Some(cell) = at.checked_offset(dr as i16, dc as i16) {
                self.set(cell.row, cell.col, Some(kind));
            }
        }

        true
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cells: vec![None; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
        }
    }
}

pub(crate) fn validate_size(width: u8, height: u8) -> Result<(), ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::ZeroSize { width, height });
    }
    if width < MIN_BOARD_WIDTH {
        return Err(ConfigError::TooNarrow {
            width,
            min: MIN_BOARD_WIDTH,
        });
    }
    if height < MIN_BOARD_HEIGHT {
        return Err(ConfigError::TooShort {
            height,
            min: MIN_BOARD_HEIGHT,
        });
    }
    Ok(())
}
