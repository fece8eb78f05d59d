//! Game engine
//!
//! Secret generation, the status state machine and the `Game` aggregate that
//! ties them together.

mod aggregate;
mod error;
mod reference;
mod secret;
mod status;

pub use aggregate::{Game, GameId, Guess};
pub use error::GameError;
pub use reference::Reference;
pub use secret::generate_secret;
pub use status::{GameStatus, ParseStatusError};
