//! Engine configuration and construction errors.

use std::fmt;

use crate::board::validate_size;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// What the engine does when a freshly spawned piece collides with the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameOverPolicy {
    /// Wipe the grid and keep playing with the new piece. Score is kept.
    #[default]
    Reset,
    /// Enter the game-over state until [`restart`](crate::GameState::restart).
    Halt,
}

/// Runtime configuration for [`GameState`](crate::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u8,
    pub height: u8,
    pub on_game_over: GameOverPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            on_game_over: GameOverPolicy::Reset,
        }
    }
}

impl EngineConfig {
    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_game_over(mut self, policy: GameOverPolicy) -> Self {
        self.on_game_over = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_size(self.width, self.height)
    }
}

/// Invalid board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroSize { width: u8, height: u8 },
    TooNarrow { width: u8, min: u8 },
    TooShort { height: u8, min: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSize { width, height } => {
                write!(f, "board size {width}x{height} has a zero dimension")
            }
            ConfigError::TooNarrow { width, min } => {
                write!(f, "board width {width} is below the minimum of {min}")
            }
            ConfigError::TooShort { height, min } => {
                write!(f, "board height {height} is below the minimum of {min}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
