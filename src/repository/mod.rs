//! Game persistence
//!
//! The engine only needs the `GameRepository` contract; the in-memory
//! implementation backs the CLI and tests.

mod memory;
mod traits;

pub use memory::InMemoryGameRepository;
pub use traits::{GameRepository, RepositoryError};
