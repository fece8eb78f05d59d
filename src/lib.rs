//! Mastermind
//!
//! A Mastermind game engine: secret generation, peg scoring, and the
//! running/won/lost state machine over an append-only guess history.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Color};
//! use mastermind::game::{Game, GameStatus};
//!
//! let secret = Code::new(vec![Color::Green, Color::Blue, Color::Blue, Color::Red]);
//! let mut game = Game::with_secret(secret.clone(), 6, 10).unwrap();
//!
//! let (guess, status) = game.submit_guess("GBRB".parse().unwrap()).unwrap();
//! assert_eq!((guess.black_pegs(), guess.white_pegs()), (2, 2));
//! assert_eq!(status, GameStatus::Running);
//!
//! let (_, status) = game.submit_guess(secret).unwrap();
//! assert_eq!(status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Game parameters
pub mod config;

// Persistence
pub mod repository;

// Per-game serialized access
pub mod service;

// Player-facing views
pub mod view;

// Auto-player
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
