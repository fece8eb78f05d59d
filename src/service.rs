//! Game service
//!
//! Runs each guess submission as one load → score → commit unit while
//! holding a lock dedicated to that game. Submissions to the same game are
//! serialized; different games never contend beyond the lock-table lookup.
//! A game's lock is dropped from the table once the game is finished.

use parking_lot::Mutex;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::GameConfig;
use crate::core::Code;
use crate::game::{Game, GameError, GameId, Guess};
use crate::repository::{GameRepository, RepositoryError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Entry point used by presentation layers
pub struct GameService<R: GameRepository> {
    repository: R,
    locks: Mutex<FxHashMap<GameId, Arc<Mutex<()>>>>,
}

impl<R: GameRepository> GameService<R> {
    /// Create a service over `repository`
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            locks: Mutex::new(FxHashMap::default()),
        }
    }

    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Create and store a game with a secret from the thread RNG
    ///
    /// # Errors
    /// Returns `ServiceError::Game` for a bad configuration.
    pub fn create_game(&self, config: GameConfig) -> Result<Game, ServiceError> {
        self.create_game_with_rng(config, &mut rand::rng())
    }

    /// Create and store a game with a secret drawn from `rng`
    ///
    /// # Errors
    /// Returns `ServiceError::Game` for a bad configuration, or the
    /// repository's error if storing fails.
    #[instrument(skip(self, rng))]
    pub fn create_game_with_rng<G: Rng + ?Sized>(
        &self,
        config: GameConfig,
        rng: &mut G,
    ) -> Result<Game, ServiceError> {
        let game = Game::new_with_rng(config, rng)?;
        let game = self.repository.save_game(&game)?;
        debug!(id = ?game.id(), reference = %game.reference(), "stored new game");
        Ok(game)
    }

    /// # Errors
    /// Returns `RepositoryError::NotFound` (wrapped) for unknown ids.
    pub fn get_game(&self, id: GameId) -> Result<Game, ServiceError> {
        Ok(self.repository.get_game(id)?)
    }

    /// # Errors
    /// Passes repository failures through.
    pub fn list_games(&self) -> Result<Vec<Game>, ServiceError> {
        Ok(self.repository.list_games()?)
    }

    /// Submit a guess to a stored game
    ///
    /// Returns the new guess and the game as it was saved.
    ///
    /// # Errors
    /// - `ServiceError::Game` for a rejected guess (finished game, bad shape)
    /// - `ServiceError::Repository` for an unknown game or a storage conflict
    #[instrument(skip(self, code), fields(code = %code.to_initials()))]
    pub fn submit_guess(&self, id: GameId, code: Code) -> Result<(Guess, Game), ServiceError> {
        let lock = self.lock_for(id);
        let guard = lock.lock();

        let result = self.submit_locked(id, code);
        let settled = match &result {
            Ok((_, game)) => game.is_finished(),
            Err(
                ServiceError::Game(GameError::GameFinished(_))
                | ServiceError::Repository(RepositoryError::NotFound(_)),
            ) => true,
            Err(_) => false,
        };
        if settled {
            // finished games never change again and unknown ids hold no state
            self.locks.lock().remove(&id);
        }
        drop(guard);

        result
    }

    fn submit_locked(&self, id: GameId, code: Code) -> Result<(Guess, Game), ServiceError> {
        let mut game = self.repository.get_game(id)?;
        let (guess, status) = game.submit_guess(code)?;

        // guess and status land in one write
        self.repository.save_guess(&guess, &game)?;

        debug!(%id, guess = guess.id(), %status, "stored guess");
        Ok((guess, game))
    }

    fn lock_for(&self, id: GameId) -> Arc<Mutex<()>> {
        Arc::clone(self.locks.lock().entry(id).or_default())
    }
}
