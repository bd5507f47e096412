//! Game state module - the board engine
//!
//! Ties together board, shapes, the random index source and scoring. The engine
//! is a synchronous state machine: every call runs to completion and there is
//! no clock inside. Hosts call [`GameState::soft_drop`] on their own gravity
//! cadence and forward player input to [`GameState::move_piece`] and
//! [`GameState::rotate`] as it arrives.

use log::{debug, trace, warn};

use crate::config::{ConfigError, EngineConfig, GameOverPolicy};
use crate::rng::{RandomIndex, SimpleRng};
use crate::scoring::score_for;
use crate::shape::{get_shape, Shape};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceKind, Position};
use crate::Board;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

impl ActivePiece {
    /// Canonical piece at the spawn anchor: top row, centered by its
    /// bounding-box width.
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            shape,
            position: spawn_position(&shape, board_width),
        }
    }
}

/// Spawn anchor for `shape` on a board `board_width` columns wide.
pub fn spawn_position(shape: &Shape, board_width: u8) -> Position {
    let col = (board_width as i16 - shape.cols() as i16) / 2;
    Position::new(0, col.max(0))
}

/// Result of a drop call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece fell by one row.
    Moved,
    /// The piece was locked and a new one spawned.
    Locked {
        lines_cleared: usize,
        points: u32,
        /// The new piece collided at spawn and the game-over policy ran.
        topped_out: bool,
    },
    /// The engine is halted on game over; nothing happened.
    Halted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    config: EngineConfig,
    board: Board,
    active: ActivePiece,
    rng: R,
    score: u32,
    lines: u32,
    game_over: bool,
    /// Number of times the grid was wiped by the reset policy.
    restarts: u32,
    /// Pieces spawned since the last restart.
    pieces: u32,
}

impl GameState<SimpleRng> {
    /// Default 10x20 game driven by a seeded [`SimpleRng`].
    pub fn with_seed(seed: u32) -> Self {
        let config = EngineConfig::default();
        let mut rng = SimpleRng::new(seed);
        let board = Board::default();
        let active = Self::pick_piece(&mut rng, board.width());
        Self::assemble(config, board, active, rng)
    }
}

impl<R: RandomIndex> GameState<R> {
    /// Create a new game and spawn its first piece.
    pub fn new(config: EngineConfig, mut rng: R) -> Result<Self, ConfigError> {
        let board = Board::new(config.width, config.height)?;
        let active = Self::pick_piece(&mut rng, board.width());
        Ok(Self::assemble(config, board, active, rng))
    }

    fn assemble(config: EngineConfig, board: Board, active: ActivePiece, rng: R) -> Self {
        debug!(
            "new game: {}x{} board, first piece {:?}",
            board.width(),
            board.height(),
            active.kind
        );
        Self {
            config,
            board,
            active,
            rng,
            score: 0,
            lines: 0,
            game_over: false,
            restarts: 0,
            pieces: 1,
        }
    }

    fn pick_piece(rng: &mut R, board_width: u8) -> ActivePiece {
        let index = rng.next_index(PieceKind::ALL.len());
        let kind = PieceKind::ALL[index % PieceKind::ALL.len()];
        ActivePiece::spawn(kind, board_width)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, active: ActivePiece) {
        self.active = active;
    }

    /// Replace the active piece with a random canonical piece at the spawn anchor.
    ///
    /// This never fails; whether the new piece fits is the caller's concern.
    pub fn spawn_piece(&mut self) -> (Shape, PieceKind) {
        self.active = Self::pick_piece(&mut self.rng, self.board.width());
        self.pieces = self.pieces.wrapping_add(1);
        trace!(
            "spawned {:?} at ({}, {})",
            self.active.kind,
            self.active.position.row,
            self.active.position.col
        );
        (self.active.shape, self.active.kind)
    }

    /// Whether `shape` at `position` leaves the board or overlaps locked cells.
    pub fn collision(&self, position: Position, shape: &Shape) -> bool {
        self.board.collides(shape, position)
    }

    /// Rotate the active piece clockwise in place. No kicks are tried.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let rotated = self.active.shape.rotate_cw();
        if self.collision(self.active.position, &rotated) {
            trace!("rotation of {:?} rejected", self.active.kind);
            return false;
        }

        self.active.shape = rotated;
        true
    }

    /// Shift the active piece horizontally by `delta_columns`.
    pub fn move_piece(&mut self, delta_columns: i16) -> bool {
        if self.game_over {
            return false;
        }

        let target = self.active.position.offset(0, delta_columns);
        if self.collision(target, &self.active.shape) {
            trace!("move by {} rejected", delta_columns);
            return false;
        }

        self.active.position = target;
        true
    }

    /// Gravity step: fall one row, or lock the piece when it cannot.
    pub fn soft_drop(&mut self) -> DropOutcome {
        if self.game_over {
            return DropOutcome::Halted;
        }

        let below = self.active.position.offset(1, 0);
        if self.collision(below, &self.active.shape) {
            return self.lock_active();
        }

        self.active.position = below;
        DropOutcome::Moved
    }

    /// Drop the active piece as far as it goes and lock it.
    pub fn hard_drop(&mut self) -> DropOutcome {
        if self.game_over {
            return DropOutcome::Halted;
        }

        loop {
            let below = self.active.position.offset(1, 0);
            if self.collision(below, &self.active.shape) {
                break;
            }
            self.active.position = below;
        }

        self.lock_active()
    }

    /// Remove full rows and return how many were removed.
    pub fn clear_lines(&mut self) -> usize {
        self.board.clear_full_rows()
    }

    /// Start a fresh game: empty grid, zero score and lines, new piece.
    pub fn restart(&mut self) {
        debug!(
            "restart after {} pieces, score {}, lines {}",
            self.pieces, self.score, self.lines
        );
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.game_over = false;
        self.pieces = 0;
        self.spawn_piece();
    }

    /// Apply a logical input. Returns true if engine state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop() != DropOutcome::Halted,
            GameAction::HardDrop => self.hard_drop() != DropOutcome::Halted,
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Pause => false,
        }
    }

    /// Owned copy of the drawable state.
    pub fn render_state(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Refresh `out` in place, reusing its board allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = if self.game_over {
            None
        } else {
            Some(ActiveSnapshot::from(self.active))
        };
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.restarts = self.restarts;
    }

    fn lock_active(&mut self) -> DropOutcome {
        let piece = self.active;
        if !self
            .board
            .lock_piece(&piece.shape, piece.position, piece.kind)
        {
            // The active piece is only ever committed to free cells.
            warn!(
                "could not lock {:?} at ({}, {})",
                piece.kind, piece.position.row, piece.position.col
            );
        }

        let lines_cleared = self.clear_lines();
        let points = score_for(lines_cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines_cleared as u32);
        debug!(
            "locked {:?} at ({}, {}): {} lines, +{} points",
            piece.kind, piece.position.row, piece.position.col, lines_cleared, points
        );

        self.spawn_piece();
        let topped_out = self.collision(self.active.position, &self.active.shape);
        if topped_out {
            self.top_out();
        }

        DropOutcome::Locked {
            lines_cleared,
            points,
            topped_out,
        }
    }

    fn top_out(&mut self) {
        match self.config.on_game_over {
            GameOverPolicy::Reset => {
                self.board.clear();
                self.restarts = self.restarts.wrapping_add(1);
                debug!("spawn blocked; grid reset (#{})", self.restarts);
            }
            GameOverPolicy::Halt => {
                self.game_over = true;
                debug!("spawn blocked; game over with score {}", self.score);
            }
        }
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedIndices;
    use crate::shape::{I_SHAPE, O_SHAPE};

    fn scripted(kinds: &[PieceKind]) -> GameState<ScriptedIndices> {
        let script: Vec<usize> = kinds.iter().map(|k| k.index()).collect();
        GameState::new(EngineConfig::default(), ScriptedIndices::new(script)).unwrap()
    }

    #[test]
    fn test_spawn_is_centered_by_width() {
        assert_eq!(spawn_position(&I_SHAPE, 10), Position::new(0, 3));
        assert_eq!(spawn_position(&O_SHAPE, 10), Position::new(0, 4));
        assert_eq!(
            spawn_position(&get_shape(PieceKind::T), 10),
            Position::new(0, 3)
        );
    }

    #[test]
    fn test_first_piece_follows_script() {
        let game = scripted(&[PieceKind::S]);
        assert_eq!(game.active().kind, PieceKind::S);
        assert_eq!(game.pieces(), 1);
    }

    #[test]
    fn test_o_piece_drops_to_floor_then_locks() {
        let mut game = scripted(&[PieceKind::O, PieceKind::I]);

        for _ in 0..18 {
            assert_eq!(game.soft_drop(), DropOutcome::Moved);
        }
        assert_eq!(game.active().position.row, 18);

        let outcome = game.soft_drop();
        assert_eq!(
            outcome,
            DropOutcome::Locked {
                lines_cleared: 0,
                points: 0,
                topped_out: false
            }
        );
        assert_eq!(game.board().get(18, 4), Some(Some(PieceKind::O)));
        assert_eq!(game.board().get(19, 5), Some(Some(PieceKind::O)));
        assert_eq!(game.active().kind, PieceKind::I);
        assert_eq!(game.active().position, Position::new(0, 3));
    }

    #[test]
    fn test_rotation_rejected_at_wall() {
        let mut game = scripted(&[PieceKind::I]);
        // Vertical I hugging the right wall cannot rotate back to horizontal.
        game.set_active(ActivePiece {
            kind: PieceKind::I,
            shape: I_SHAPE.rotate_cw(),
            position: Position::new(5, 9),
        });
        assert!(!game.rotate());
        assert_eq!(game.active().shape, I_SHAPE.rotate_cw());
    }

    #[test]
    fn test_reset_policy_wipes_grid_on_blocked_spawn() {
        let mut game = scripted(&[PieceKind::O]);
        // Block the O spawn cells but leave the rest of row 1 open so nothing clears.
        game.board_mut().set(1, 4, Some(PieceKind::T));
        game.set_active(ActivePiece {
            kind: PieceKind::O,
            shape: O_SHAPE,
            position: Position::new(18, 0),
        });

        let outcome = game.soft_drop();
        assert_eq!(
            outcome,
            DropOutcome::Locked {
                lines_cleared: 0,
                points: 0,
                topped_out: true
            }
        );
        assert_eq!(game.board().filled_count(), 0);
        assert_eq!(game.restarts(), 1);
        assert!(!game.game_over());
    }

    #[test]
    fn test_halt_policy_stops_the_engine() {
        let config = EngineConfig::default().with_game_over(GameOverPolicy::Halt);
        let mut game = GameState::new(config, ScriptedIndices::new(vec![3])).unwrap();
        game.board_mut().set(1, 4, Some(PieceKind::T));
        game.set_active(ActivePiece {
            kind: PieceKind::O,
            shape: O_SHAPE,
            position: Position::new(18, 0),
        });

        assert!(matches!(
            game.soft_drop(),
            DropOutcome::Locked {
                topped_out: true,
                ..
            }
        ));
        assert!(game.game_over());
        assert_eq!(game.soft_drop(), DropOutcome::Halted);
        assert_eq!(game.hard_drop(), DropOutcome::Halted);
        assert!(!game.move_piece(1));
        assert!(!game.rotate());
        assert!(game.render_state().active.is_none());

        game.restart();
        assert!(!game.game_over());
        assert_eq!(game.board().filled_count(), 0);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_extreme_moves_are_rejected_without_panicking() {
        let mut game = scripted(&[PieceKind::S]);
        let start = game.active().position;

        assert!(!game.move_piece(i16::MAX));
        assert!(!game.move_piece(i16::MIN));
        assert_eq!(game.active().position, start);
        assert!(game.collision(Position::new(0, i16::MAX), &get_shape(PieceKind::S)));
        assert!(game.collision(Position::new(0, i16::MIN), &get_shape(PieceKind::S)));
    }

    #[test]
    fn test_pause_is_ignored() {
        let mut game = GameState::with_seed(3);
        let before = game.render_state();
        assert!(!game.apply_action(GameAction::Pause));
        assert_eq!(game.render_state(), before);
    }
}
