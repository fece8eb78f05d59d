//! Errors produced by the game engine

use super::GameStatus;
use crate::core::Color;
use thiserror::Error;

/// Validation failures raised by the engine.
///
/// None of these leave a game partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Slot, color or guess-budget bounds violated at creation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Guess has the wrong length.
    #[error("invalid guess: expected {expected} colors, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// Guess uses a color outside the active palette.
    #[error("invalid guess: {color} is not in this game's palette")]
    ColorNotInPalette { color: Color },

    /// Game already reached a terminal status.
    #[error("game is already finished ({0})")]
    GameFinished(GameStatus),
}

impl GameError {
    /// True for both kinds of rejected guess shape
    #[must_use]
    pub const fn is_invalid_guess(&self) -> bool {
        matches!(self, Self::WrongLength { .. } | Self::ColorNotInPalette { .. })
    }
}
