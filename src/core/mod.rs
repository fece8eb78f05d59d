//! Core domain types for Mastermind
//!
//! Colors, codes and peg feedback. Everything here is pure and has no notion
//! of a running game.

mod code;
mod color;
mod feedback;

pub use code::{Code, ParseCodeError};
pub use color::{CATALOGUE, CATALOGUE_SIZE, Color, Palette, UnknownColor};
pub use feedback::Feedback;
