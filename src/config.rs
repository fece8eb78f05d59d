//! Game configuration
//!
//! Defaults are the classic board game: 4 slots, 6 colors, 10 guesses.

use crate::core::CATALOGUE_SIZE;
use crate::game::GameError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SLOTS: usize = 4;
pub const DEFAULT_COLORS: usize = 6;
pub const DEFAULT_MAX_GUESSES: usize = 10;

/// Parameters for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub num_slots: usize,
    pub num_colors: usize,
    pub max_guesses: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(num_slots: usize, num_colors: usize, max_guesses: usize) -> Self {
        Self {
            num_slots,
            num_colors,
            max_guesses,
        }
    }

    /// Check every bound up front
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` naming the first bad field.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.num_slots == 0 {
            return Err(GameError::InvalidConfiguration(
                "num_slots must be at least 1".to_string(),
            ));
        }
        if !(1..=CATALOGUE_SIZE).contains(&self.num_colors) {
            return Err(GameError::InvalidConfiguration(format!(
                "num_colors must be between 1 and {CATALOGUE_SIZE}, got {}",
                self.num_colors
            )));
        }
        if self.max_guesses == 0 {
            return Err(GameError::InvalidConfiguration(
                "max_guesses must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of distinct codes, saturating at `u64::MAX`
    #[must_use]
    pub fn code_space(&self) -> u64 {
        let exp = u32::try_from(self.num_slots).unwrap_or(u32::MAX);
        (self.num_colors as u64).saturating_pow(exp)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SLOTS, DEFAULT_COLORS, DEFAULT_MAX_GUESSES)
    }
}
