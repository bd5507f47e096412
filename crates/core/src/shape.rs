//! Shape module - immutable polyomino matrices and clockwise rotation
//!
//! A shape is the filled/empty matrix of a piece's bounding box, at most 4x4.
//! It is stored as a 16-bit mask with a fixed row stride of 4, which keeps it
//! `Copy` and lets the seven canonical shapes live in `const` items.
//! Rotation never mutates: it returns a new shape.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest supported bounding-box side.
pub const MAX_SHAPE_DIM: u8 = 4;

/// Upper bound on the number of filled cells in a shape.
pub const MAX_SHAPE_CELLS: usize = (MAX_SHAPE_DIM as usize) * (MAX_SHAPE_DIM as usize);

/// Offset of a single filled cell from the shape's top-left corner: (row, col).
pub type CellOffset = (u8, u8);

/// Filled cells of a shape in row-major order.
pub type ShapeCells = ArrayVec<CellOffset, MAX_SHAPE_CELLS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    mask: u16,
}

/// Build a shape from a 0/1 literal. Only used for the canonical constants.
const fn pattern<const R: usize, const C: usize>(cells: [[u8; C]; R]) -> Shape {
    let mut mask = 0u16;
    let mut r = 0;
    while r < R {
        let mut c = 0;
        while c < C {
            if cells[r][c] != 0 {
                mask |= 1u16 << (r * MAX_SHAPE_DIM as usize + c);
            }
            c += 1;
        }
        r += 1;
    }
    Shape {
        rows: R as u8,
        cols: C as u8,
        mask,
    }
}

pub const I_SHAPE: Shape = pattern([[1, 1, 1, 1]]);
pub const L_SHAPE: Shape = pattern([[1, 1, 1], [0, 0, 1]]);
pub const J_SHAPE: Shape = pattern([[1, 1, 1], [1, 0, 0]]);
pub const O_SHAPE: Shape = pattern([[1, 1], [1, 1]]);
pub const S_SHAPE: Shape = pattern([[0, 1, 1], [1, 1, 0]]);
pub const T_SHAPE: Shape = pattern([[1, 1, 1], [0, 1, 0]]);
pub const Z_SHAPE: Shape = pattern([[1, 1, 0], [0, 1, 1]]);

/// Spawn orientation of a canonical piece kind.
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

impl Shape {
    #[inline(always)]
    const fn bit(row: u8, col: u8) -> u16 {
        1u16 << (row as u32 * MAX_SHAPE_DIM as u32 + col as u32)
    }

    /// Build a custom polyomino from boolean rows.
    ///
    /// Helper for collision queries and tests. The engine itself only ever
    /// spawns the canonical shapes from [`get_shape`]; a custom shape can be
    /// checked against a board with [`GameState::collision`](crate::GameState::collision)
    /// or [`Board::collides`](crate::Board::collides).
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let corner = Shape::from_rows(&[[true, false], [true, true]]).unwrap();
    /// assert_eq!(corner.rows(), 2);
    /// assert_eq!(corner.cell_count(), 3);
    /// ```
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let Some(first) = rows.first() else {
            return Err(ShapeError::Empty);
        };
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(ShapeError::Empty);
        }
        if rows.len() > MAX_SHAPE_DIM as usize || cols > MAX_SHAPE_DIM as usize {
            return Err(ShapeError::TooLarge {
                rows: rows.len(),
                cols,
            });
        }

        let mut mask = 0u16;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(ShapeError::Ragged { row: r });
            }
            for (c, &filled) in row.iter().enumerate() {
                if filled {
                    mask |= Self::bit(r as u8, c as u8);
                }
            }
        }

        if mask == 0 {
            return Err(ShapeError::NoFilledCells);
        }

        Ok(Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            mask,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether `(row, col)` of the bounding box is filled. Out-of-box is empty.
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols && self.mask & Self::bit(row, col) != 0
    }

    pub fn cell_count(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Filled cells in row-major order (no allocation).
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.is_filled(row, col) {
                    out.push((row, col));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise: the transpose of the row-reversed matrix.
    ///
    /// Cell `(r, c)` of the result is cell `(rows - 1 - c, r)` of `self`, and
    /// the bounding box swaps to `cols x rows`.
    pub fn rotate_cw(&self) -> Shape {
        let rows = self.cols;
        let cols = self.rows;
        let mut mask = 0u16;
        for r in 0..rows {
            for c in 0..cols {
                if self.is_filled(self.rows - 1 - c, r) {
                    mask |= Self::bit(r, c);
                }
            }
        }
        Shape { rows, cols, mask }
    }

    /// Boolean rows, mostly useful for assertions and debugging.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|r| (0..self.cols).map(|c| self.is_filled(r, c)).collect())
            .collect()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols {
                f.write_str(if self.is_filled(r, c) { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Rejected custom shape input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// No rows, or rows with no columns.
    Empty,
    /// Bounding box exceeds 4x4.
    TooLarge { rows: usize, cols: usize },
    /// A row's length differs from the first row.
    Ragged { row: usize },
    /// Every cell is empty.
    NoFilledCells,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "shape has no rows or columns"),
            ShapeError::TooLarge { rows, cols } => write!(
                f,
                "shape is {rows}x{cols}, larger than {MAX_SHAPE_DIM}x{MAX_SHAPE_DIM}"
            ),
            ShapeError::Ragged { row } => write!(f, "shape row {row} has a different length"),
            ShapeError::NoFilledCells => write!(f, "shape has no filled cells"),
        }
    }
}

impl std::error::Error for ShapeError {}
