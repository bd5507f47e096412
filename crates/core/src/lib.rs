//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the board engine of the falling-block game: grid, active
//! piece, collision, locking, line clearing and scoring. It has **no
//! dependencies** on UI, terminal or I/O, which keeps it:
//!
//! - **Deterministic**: Same seed (or scripted index source) produces identical games
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Any host can drive it (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision detection and line clearing
//! - [`game_state`]: the engine: active piece, locking, scoring, game over
//! - [`shape`]: immutable polyomino matrices and clockwise rotation
//! - [`rng`]: injectable random index sources
//! - [`scoring`]: line clear reward table
//! - [`snapshot`]: owned render state for hosts
//! - [`config`]: board size and game-over policy
//!
//! # Game Rules
//!
//! - **Uniform selection**: each spawn picks one of the 7 canonical pieces uniformly
//! - **Plain rotation**: clockwise only, rejected when blocked (no wall kicks)
//! - **Gravity is external**: the host decides when to call [`GameState::soft_drop`]
//! - **Locking**: a drop that cannot move locks the piece, clears lines, scores and spawns
//! - **Scoring**: 100 / 300 / 500 / 800 for 1-4 lines
//!
//! # Example
//!
//! ```
//! use blockfall_core::{DropOutcome, GameState};
//!
//! let mut game = GameState::with_seed(12345);
//!
//! game.move_piece(1);
//! game.rotate();
//! assert!(matches!(game.hard_drop(), DropOutcome::Locked { .. }));
//!
//! let snap = game.render_state();
//! assert_eq!(snap.locked_cells().count(), 4);
//! assert_eq!(snap.score, 0);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, EngineConfig, GameOverPolicy};
pub use game_state::{spawn_position, ActivePiece, DropOutcome, GameState};
pub use rng::{RandomIndex, ScriptedIndices, SimpleRng};
pub use scoring::score_for;
pub use shape::{get_shape, Shape, ShapeError};
pub use snapshot::{ActiveSnapshot, FilledCell, GameSnapshot};
