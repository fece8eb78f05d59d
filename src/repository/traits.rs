//! Game Repository - Traits
//!
//! This module defines the `GameRepository` trait and its error type.

use crate::game::{Game, GameId, Guess};
use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No game stored under the given id.
    #[error("game {0} not found")]
    NotFound(GameId),
    /// The request would rewrite history or targets an unsaved game.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

/// Contract for game persistence.
///
/// A game row carries the current status, and guesses form an append-only log
/// per game. A reader sees the row and the log from the same write.
pub trait GameRepository: Send + Sync {
    /// Inserts a new game (assigning its id) or refreshes an existing one.
    ///
    /// # Errors
    /// Returns `RepositoryError::NotFound` if the game carries an id that was
    /// never handed out, and `RepositoryError::InvalidOperation` if the row
    /// would leave a terminal status or disagree with the stored guesses.
    fn save_game(&self, game: &Game) -> Result<Game, RepositoryError>;

    /// Loads a game with its guesses in submission order.
    ///
    /// # Errors
    /// Returns `RepositoryError::NotFound` for unknown ids.
    fn get_game(&self, id: GameId) -> Result<Game, RepositoryError>;

    /// All stored games, ordered by id.
    ///
    /// # Errors
    /// Returns `RepositoryError` if the backing store fails.
    fn list_games(&self) -> Result<Vec<Game>, RepositoryError>;

    /// Appends a guess to its game's log and stores the game's resulting row
    /// in the same write.
    ///
    /// # Errors
    /// Returns `RepositoryError::InvalidOperation` if the guess is already
    /// stored, is out of sequence, does not match the game's history, or the
    /// game is finished or has no id yet, and
    /// `RepositoryError::NotFound` if the game is unknown.
    fn save_guess(&self, guess: &Guess, game: &Game) -> Result<Guess, RepositoryError>;

    /// Guesses of a game in submission order.
    ///
    /// # Errors
    /// Returns `RepositoryError::NotFound` for unknown ids.
    fn guesses_of(&self, id: GameId) -> Result<Vec<Guess>, RepositoryError>;
}
