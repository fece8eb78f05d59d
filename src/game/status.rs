//! Game status state machine
//!
//! `Running` → `Won` | `Lost`, or stays `Running` on an inconclusive guess.
//! Nothing leaves a terminal status.

use super::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Running,
    Won,
    Lost,
}

/// Error for an unrecognised status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game status: {0}")]
pub struct ParseStatusError(pub String);

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Status after accepting one more guess
    ///
    /// `guesses_made` counts the guess being accepted.
    ///
    /// # Errors
    /// Returns `GameError::GameFinished` when called on a terminal status.
    pub fn after_guess(
        self,
        solved: bool,
        guesses_made: usize,
        max_guesses: usize,
    ) -> Result<Self, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameFinished(self));
        }

        Ok(if solved {
            Self::Won
        } else if guesses_made >= max_guesses {
            Self::Lost
        } else {
            Self::Running
        })
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// Parses the lowercase string form.
    ///
    /// # Errors
    /// Returns error for unknown status strings.
    pub fn parse(s: &str) -> Result<Self, ParseStatusError> {
        match s.to_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "won" => Ok(Self::Won),
            "lost" => Ok(Self::Lost),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_guess_wins() {
        assert_eq!(
            GameStatus::Running.after_guess(true, 1, 10),
            Ok(GameStatus::Won)
        );
        // winning on the last allowed guess is still a win
        assert_eq!(
            GameStatus::Running.after_guess(true, 10, 10),
            Ok(GameStatus::Won)
        );
    }

    #[test]
    fn last_unsolved_guess_loses() {
        assert_eq!(
            GameStatus::Running.after_guess(false, 2, 2),
            Ok(GameStatus::Lost)
        );
    }

    #[test]
    fn inconclusive_guess_keeps_running() {
        assert_eq!(
            GameStatus::Running.after_guess(false, 1, 2),
            Ok(GameStatus::Running)
        );
    }

    #[test]
    fn terminal_statuses_reject_guesses() {
        for status in [GameStatus::Won, GameStatus::Lost] {
            assert!(status.is_terminal());
            assert_eq!(
                status.after_guess(true, 1, 10),
                Err(GameError::GameFinished(status))
            );
        }
        assert!(!GameStatus::Running.is_terminal());
    }

    #[test]
    fn string_round_trip() {
        for status in [GameStatus::Running, GameStatus::Won, GameStatus::Lost] {
            assert_eq!(GameStatus::parse(status.as_str()), Ok(status));
        }
        assert_eq!(GameStatus::parse("WON"), Ok(GameStatus::Won));
        assert!(GameStatus::parse("paused").is_err());
    }
}
