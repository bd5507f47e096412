use crate::game_state::ActivePiece;
use crate::shape::Shape;
use crate::types::{Cell, PieceKind, Position, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// A filled cell ready to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilledCell {
    pub row: i16,
    pub col: i16,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: Rgb,
    pub position: Position,
    pub shape: Shape,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            color: value.kind.color(),
            position: value.position,
            shape: value.shape,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute board cells covered by the piece. Cells whose coordinates
    /// would overflow `i16` are skipped.
    pub fn cells(&self) -> impl Iterator<Item = FilledCell> + '_ {
        self.shape.cells().into_iter().filter_map(move |(dr, dc)| {
            let at = self.position.checked_offset(dr as i16, dc as i16)?;
            Some(FilledCell {
                row: at.row,
                col: at.col,
                color: self.color,
            })
        })
    }
}

/// Owned, read-only copy of everything a host needs to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major copy of the locked grid.
    pub board: Vec<Cell>,
    /// `None` once the engine has halted on game over.
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
    pub restarts: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board.clear();
        self.board
            .resize(self.width as usize * self.height as usize, None);
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.game_over = false;
        self.restarts = 0;
    }

    /// Locked cell at (row, col); `None` when empty or out of range.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.height as usize || col >= self.width as usize {
            return None;
        }
        self.board
            .get(row * self.width as usize + col)
            .copied()
            .flatten()
    }

    /// Locked cells with their colors, row-major.
    pub fn locked_cells(&self) -> impl Iterator<Item = FilledCell> + '_ {
        let width = self.width.max(1) as usize;
        self.board.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|kind| FilledCell {
                row: (i / width) as i16,
                col: (i % width) as i16,
                color: kind.color(),
            })
        })
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: Vec::new(),
            active: None,
            score: 0,
            lines: 0,
            game_over: false,
            restarts: 0,
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::O_SHAPE;

    #[test]
    fn default_snapshot_is_empty_standard_board() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.board.len(), 200);
        assert_eq!(snap.locked_cells().count(), 0);
        assert!(snap.playable());
    }

    #[test]
    fn locked_cells_report_position_and_color() {
        let mut snap = GameSnapshot::default();
        snap.board[19 * 10 + 3] = Some(PieceKind::Z);

        let cells: Vec<_> = snap.locked_cells().collect();
        assert_eq!(
            cells,
            vec![FilledCell {
                row: 19,
                col: 3,
                color: Rgb::new(255, 0, 0)
            }]
        );
        assert_eq!(snap.cell(19, 3), Some(PieceKind::Z));
        assert_eq!(snap.cell(20, 3), None);
    }

    #[test]
    fn active_cells_are_absolute() {
        let active = ActiveSnapshot {
            kind: PieceKind::O,
            color: PieceKind::O.color(),
            position: Position::new(5, 4),
            shape: O_SHAPE,
        };
        let coords: Vec<_> = active.cells().map(|c| (c.row, c.col)).collect();
        assert_eq!(coords, vec![(5, 4), (5, 5), (6, 4), (6, 5)]);
    }

    #[test]
    fn active_cells_skip_overflowing_coordinates() {
        let active = ActiveSnapshot {
            kind: PieceKind::S,
            color: PieceKind::S.color(),
            position: Position::new(0, i16::MAX),
            shape: crate::shape::S_SHAPE,
        };
        // Only the column-0 cell of the bottom row stays in range.
        let coords: Vec<_> = active.cells().map(|c| (c.row, c.col)).collect();
        assert_eq!(coords, vec![(1, i16::MAX)]);
    }
}
