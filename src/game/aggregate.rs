//! The game aggregate
//!
//! A `Game` owns its secret, palette, status and guess history. The only way
//! to change any of them is [`Game::submit_guess`].

use super::{GameError, GameStatus, Reference, generate_secret};
use crate::config::GameConfig;
use crate::core::{Code, Feedback, Palette};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Identity assigned to a game by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(u64);

impl GameId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scored guess. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    id: usize,
    code: Code,
    feedback: Feedback,
}

impl Guess {
    /// 1-based position in the owning game's history
    #[inline]
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn code(&self) -> &Code {
        &self.code
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[inline]
    #[must_use]
    pub const fn black_pegs(&self) -> usize {
        self.feedback.black
    }

    #[inline]
    #[must_use]
    pub const fn white_pegs(&self) -> usize {
        self.feedback.white
    }
}

/// A single Mastermind game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: Option<GameId>,
    reference: Reference,
    num_slots: usize,
    palette: Palette,
    secret: Code,
    max_guesses: usize,
    status: GameStatus,
    guesses: Vec<Guess>,
}

impl Game {
    /// Start a game with a random secret from the thread RNG
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if any bound is violated.
    pub fn new(num_slots: usize, num_colors: usize, max_guesses: usize) -> Result<Self, GameError> {
        Self::new_with_rng(
            GameConfig::new(num_slots, num_colors, max_guesses),
            &mut rand::rng(),
        )
    }

    /// Start a game drawing the secret from `rng`
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if any bound is violated.
    pub fn new_with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;
        let palette = Palette::new(config.num_colors)?;
        let secret = generate_secret(&palette, config.num_slots, rng)?;

        Ok(Self::running(palette, secret, config.max_guesses))
    }

    /// Start a game around a known secret
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if the secret is empty, uses
    /// colors outside the palette, or any other bound is violated.
    pub fn with_secret(secret: Code, num_colors: usize, max_guesses: usize) -> Result<Self, GameError> {
        GameConfig::new(secret.len(), num_colors, max_guesses).validate()?;
        let palette = Palette::new(num_colors)?;
        if let Some(color) = secret.colors().iter().find(|&&c| !palette.contains(c)) {
            return Err(GameError::InvalidConfiguration(format!(
                "secret color {color} is not in a {num_colors}-color palette"
            )));
        }

        Ok(Self::running(palette, secret, max_guesses))
    }

    fn running(palette: Palette, secret: Code, max_guesses: usize) -> Self {
        let game = Self {
            id: None,
            reference: Reference::generate(),
            num_slots: secret.len(),
            palette,
            secret,
            max_guesses,
            status: GameStatus::Running,
            guesses: Vec::new(),
        };
        debug!(
            reference = %game.reference,
            num_slots = game.num_slots,
            num_colors = game.palette.len(),
            max_guesses,
            "created game"
        );
        game
    }

    /// Score a guess and advance the game
    ///
    /// Either the whole transition happens (score, append, status update) or
    /// nothing changes.
    ///
    /// # Errors
    /// - `GameError::GameFinished` if the game is already won or lost
    /// - `GameError::WrongLength` / `GameError::ColorNotInPalette` for a
    ///   malformed code
    pub fn submit_guess(&mut self, code: Code) -> Result<(Guess, GameStatus), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameFinished(self.status));
        }
        self.check_shape(&code)?;

        let feedback = Feedback::evaluate(&self.secret, &code);
        let guesses_made = self.guesses.len() + 1;
        let status = self.status.after_guess(
            feedback.is_solved(self.num_slots),
            guesses_made,
            self.max_guesses,
        )?;

        let guess = Guess {
            id: guesses_made,
            code,
            feedback,
        };
        self.guesses.push(guess.clone());
        self.status = status;

        debug!(
            reference = %self.reference,
            guess = guess.id,
            code = %guess.code.to_initials(),
            %feedback,
            "scored guess"
        );
        if status.is_terminal() {
            info!(reference = %self.reference, %status, guesses = guesses_made, "game over");
        }

        Ok((guess, status))
    }

    fn check_shape(&self, code: &Code) -> Result<(), GameError> {
        if code.len() != self.num_slots {
            return Err(GameError::WrongLength {
                expected: self.num_slots,
                actual: code.len(),
            });
        }
        if let Some(&color) = code.colors().iter().find(|&&c| !self.palette.contains(c)) {
            return Err(GameError::ColorNotInPalette { color });
        }
        Ok(())
    }

    #[must_use]
    pub const fn id(&self) -> Option<GameId> {
        self.id
    }

    #[must_use]
    pub const fn reference(&self) -> &Reference {
        &self.reference
    }

    #[must_use]
    pub const fn num_slots(&self) -> usize {
        self.num_slots
    }

    #[must_use]
    pub const fn num_colors(&self) -> usize {
        self.palette.len()
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The hidden code. Player-facing views decide when to show it.
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Guesses in submission order
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses - self.guesses.len()
    }

    /// Stamp the identity handed out by the repository
    pub(crate) fn assign_id(&mut self, id: GameId) {
        self.id = Some(id);
    }

    /// Copy of the game with an empty history, for storing the header row
    pub(crate) fn header(&self) -> Self {
        Self {
            guesses: Vec::new(),
            reference: self.reference.clone(),
            secret: self.secret.clone(),
            ..*self
        }
    }

    /// Reattach stored guesses to a header loaded from storage
    pub(crate) fn with_history(mut self, guesses: Vec<Guess>) -> Self {
        self.guesses = guesses;
        self
    }
}
