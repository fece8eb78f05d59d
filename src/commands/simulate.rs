//! Simulate command
//!
//! Plays many games with the solver through one shared service, in parallel,
//! and collects statistics.

use crate::config::GameConfig;
use crate::core::Palette;
use crate::game::{GameId, GameStatus};
use crate::repository::{GameRepository, InMemoryGameRepository};
use crate::service::GameService;
use crate::solver::{Solver, Strategy};
use anyhow::{Result, anyhow, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Largest code space the solver will enumerate
pub const MAX_CODE_SPACE: u64 = 50_000;

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub game: GameConfig,
    pub strategy: Strategy,
    pub count: usize,
    pub seed: u64,
    pub show_progress: bool,
}

/// Outcome of one simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub id: GameId,
    pub status: GameStatus,
    pub guesses: usize,
}

/// Statistics over a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    /// Average over won games only
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guesses needed → number of won games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run the simulation
///
/// Game `i` draws its secret and random picks from `seed + i`, so a run is
/// reproducible regardless of thread scheduling.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the code space is too
/// large to enumerate, or a game cannot be driven to completion.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationResult> {
    config.game.validate()?;
    let space = config.game.code_space();
    if space > MAX_CODE_SPACE {
        bail!(
            "{} colors over {} slots gives {space} codes; the solver handles at most {MAX_CODE_SPACE}",
            config.game.num_colors,
            config.game.num_slots
        );
    }

    let palette = Palette::new(config.game.num_colors)?;
    let solver = Solver::new(config.strategy, &palette, config.game.num_slots);
    let service = GameService::new(InMemoryGameRepository::new());

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let outcomes = (0..config.count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let outcome = play_one(&service, &solver, &palette, config.game, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>>>()?;
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    info!(
        games = outcomes.len(),
        stored = service.repository().list_games()?.len(),
        "simulation finished"
    );

    Ok(summarize(&outcomes, duration))
}

fn play_one<R: GameRepository>(
    service: &GameService<R>,
    solver: &Solver,
    palette: &Palette,
    config: GameConfig,
    rng: &mut StdRng,
) -> Result<GameOutcome> {
    let game = service.create_game_with_rng(config, rng)?;
    let id = game.id().ok_or_else(|| anyhow!("stored game has no id"))?;

    let mut next = solver.first_guess(palette);
    loop {
        let (_, game) = service.submit_guess(id, next)?;
        if game.is_finished() {
            return Ok(GameOutcome {
                id,
                status: game.status(),
                guesses: game.guesses().len(),
            });
        }

        next = solver
            .next_guess(game.guesses(), rng)
            .ok_or_else(|| anyhow!("no consistent code left for game {id}"))?
            .clone();
    }
}

fn summarize(outcomes: &[GameOutcome], duration: Duration) -> SimulationResult {
    let won: Vec<usize> = outcomes
        .iter()
        .filter(|o| o.status == GameStatus::Won)
        .map(|o| o.guesses)
        .collect();

    let mut distribution = BTreeMap::new();
    for &guesses in &won {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let average_guesses = if won.is_empty() {
        0.0
    } else {
        won.iter().sum::<usize>() as f64 / won.len() as f64
    };

    SimulationResult {
        total_games: outcomes.len(),
        won: won.len(),
        lost: outcomes.len() - won.len(),
        average_guesses,
        min_guesses: won.iter().copied().min().unwrap_or(0),
        max_guesses: won.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        games_per_second: outcomes.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
