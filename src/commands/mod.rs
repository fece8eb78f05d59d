//! Command implementations

pub mod play;
pub mod score;
pub mod simulate;

pub use play::run_play;
pub use score::{ScoreResult, score_codes};
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
