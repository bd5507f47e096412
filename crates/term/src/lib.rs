//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It renders the engine's
//! snapshot into a plain framebuffer and flushes only the changed runs of that
//! framebuffer to the terminal.
//!
//! Goals:
//! - Keep `core` free of any terminal concern
//! - Keep view code pure so it can be unit-tested without a terminal
//! - Compensate for glyph aspect ratio (2 chars wide per board cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{AnchorY, GameView, HostStatus, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use types::Rgb;
