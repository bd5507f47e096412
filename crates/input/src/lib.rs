//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. The host
//! forwards each press immediately; there is no auto-repeat handling here,
//! terminals already repeat held keys.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
