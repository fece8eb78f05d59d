//! In-memory game repository.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::traits::{GameRepository, RepositoryError};
use crate::game::{Game, GameId, Guess};

/// A stored game: the header row and its guess log, always written together.
#[derive(Debug)]
struct Record {
    /// Game row, stored without history.
    header: Game,
    log: Vec<Guess>,
}

impl Record {
    fn snapshot(&self) -> Game {
        self.header.clone().with_history(self.log.clone())
    }

    /// Rejects a row that would leave a terminal status or disagree with the log.
    fn check_refresh(&self, id: GameId, game: &Game) -> Result<(), RepositoryError> {
        let stored = self.header.status();
        if stored.is_terminal() && game.status() != stored {
            return Err(RepositoryError::InvalidOperation(format!(
                "game {id} is {stored} and cannot become {}",
                game.status()
            )));
        }
        if game.guesses().len() != self.log.len() {
            return Err(RepositoryError::InvalidOperation(format!(
                "game {id} carries {} guesses but {} are stored",
                game.guesses().len(),
                self.log.len()
            )));
        }
        Ok(())
    }
}

/// Storage for games and their guess logs.
///
/// One lock covers every record, so a reader never sees a guess without the
/// status it produced.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    last_id: AtomicU64,
    records: RwLock<FxHashMap<GameId, Record>>,
}

impl InMemoryGameRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> GameId {
        GameId::new(self.last_id.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

impl GameRepository for InMemoryGameRepository {
    fn save_game(&self, game: &Game) -> Result<Game, RepositoryError> {
        let mut saved = game.clone();
        let mut records = self.records.write();

        match game.id() {
            Some(id) => {
                let record = records.get_mut(&id).ok_or(RepositoryError::NotFound(id))?;
                record.check_refresh(id, game)?;
                record.header = game.header();
            }
            None => {
                let id = self.next_id();
                saved.assign_id(id);
                records.insert(
                    id,
                    Record {
                        header: saved.header(),
                        log: saved.guesses().to_vec(),
                    },
                );
            }
        }

        Ok(saved)
    }

    fn get_game(&self, id: GameId) -> Result<Game, RepositoryError> {
        self.records
            .read()
            .get(&id)
            .map(Record::snapshot)
            .ok_or(RepositoryError::NotFound(id))
    }

    fn list_games(&self) -> Result<Vec<Game>, RepositoryError> {
        let records = self.records.read();
        let mut ids: Vec<GameId> = records.keys().copied().collect();
        ids.sort_unstable();

        Ok(ids.iter().map(|id| records[id].snapshot()).collect())
    }

    fn save_guess(&self, guess: &Guess, game: &Game) -> Result<Guess, RepositoryError> {
        let id = game.id().ok_or_else(|| {
            RepositoryError::InvalidOperation("cannot store a guess for an unsaved game".into())
        })?;

        let mut records = self.records.write();
        let record = records.get_mut(&id).ok_or(RepositoryError::NotFound(id))?;
        let log = &record.log;

        if guess.id() <= log.len() {
            return Err(RepositoryError::InvalidOperation(format!(
                "guess {} of game {id} is already stored and cannot be updated",
                guess.id()
            )));
        }
        if guess.id() != log.len() + 1 {
            return Err(RepositoryError::InvalidOperation(format!(
                "guess {} of game {id} is out of sequence, expected {}",
                guess.id(),
                log.len() + 1
            )));
        }
        if record.header.status().is_terminal() {
            return Err(RepositoryError::InvalidOperation(format!(
                "game {id} is {} and takes no more guesses",
                record.header.status()
            )));
        }
        if game.guesses().len() != guess.id() {
            return Err(RepositoryError::InvalidOperation(format!(
                "game {id} carries {} guesses, expected {} after guess {}",
                game.guesses().len(),
                guess.id(),
                guess.id()
            )));
        }

        record.log.push(guess.clone());
        record.header = game.header();
        Ok(guess.clone())
    }

    fn guesses_of(&self, id: GameId) -> Result<Vec<Guess>, RepositoryError> {
        self.records
            .read()
            .get(&id)
            .map(|record| record.log.clone())
            .ok_or(RepositoryError::NotFound(id))
    }
}
