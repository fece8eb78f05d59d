//! Mastermind auto-player
//!
//! Used by the simulation command to drive games through the engine.

mod engine;
pub mod strategy;

pub use engine::Solver;
pub use strategy::Strategy;
