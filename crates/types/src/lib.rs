//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the terminal view and the input mapping alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Host Timing Defaults
//!
//! The engine owns no clock. These are the defaults the terminal host uses to
//! pace gravity:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 10 | Polling iterations per second |
//! | `DEFAULT_GRAVITY_FRAMES` | 10 | Frames between two gravity ticks |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_index(5).unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color(), blockfall_types::Rgb::new(128, 0, 128));
//!
//! assert_eq!(Position::new(0, 3).offset(1, -1), Position::new(1, 2));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Narrowest board that still fits every canonical piece at spawn.
pub const MIN_BOARD_WIDTH: u8 = 4;

/// Shortest board that still fits every canonical piece at spawn.
pub const MIN_BOARD_HEIGHT: u8 = 2;

/// Default host polling rate (frames per second).
pub const DEFAULT_FPS: u32 = 10;

/// Default number of frames between gravity ticks.
pub const DEFAULT_GRAVITY_FRAMES: u32 = 10;

/// Line clear reward table, indexed by the number of rows cleared at once.
///
/// Clearing more than four rows at once scores nothing.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven canonical piece kinds
///
/// Each piece has a distinct shape and a fixed color:
/// - **I**: Cyan, horizontal bar
/// - **L**: Orange
/// - **J**: Blue (mirror of L)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green
/// - **T**: Purple
/// - **Z**: Red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    L,
    J,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in random-selection order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::L => 1,
            PieceKind::J => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Fixed display color of this kind.
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0, 255, 255),
            PieceKind::L => Rgb::new(255, 165, 0),
            PieceKind::J => Rgb::new(0, 0, 255),
            PieceKind::O => Rgb::new(255, 255, 0),
            PieceKind::S => Rgb::new(0, 255, 0),
            PieceKind::T => Rgb::new(128, 0, 128),
            PieceKind::Z => Rgb::new(255, 0, 0),
        }
    }
}

/// Logical inputs a host can forward to the engine
///
/// Each action maps to one engine operation. `Pause` is interpreted by the
/// host loop only; the engine ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it when it cannot fall
    SoftDrop,
    /// Drop piece to the lowest free position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause (host-side)
    Pause,
    /// Start a fresh game
    Restart,
}

/// Grid coordinate of a piece's bounding-box origin (top-left cell).
///
/// Signed so that proposed positions left of the board can be represented and
/// rejected by collision checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i16,
    pub col: i16,
}

impl Position {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// Same position shifted by `(d_row, d_col)`.
    pub fn offset(self, d_row: i16, d_col: i16) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Same position shifted by `(d_row, d_col)`, or `None` if either
    /// coordinate leaves the `i16` range.
    pub fn checked_offset(self, d_row: i16, d_col: i16) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(d_row)?,
            col: self.col.checked_add(d_col)?,
        })
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
