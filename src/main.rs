//! Mastermind - CLI
//!
//! Play Mastermind in the terminal, score codes, or run solver simulations.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use mastermind::{
    commands::{SimulationConfig, run_play, run_simulation, score_codes},
    config::{DEFAULT_COLORS, DEFAULT_MAX_GUESSES, DEFAULT_SLOTS, GameConfig},
    output::{print_score_result, print_simulation_result},
    repository::InMemoryGameRepository,
    service::GameService,
    solver::Strategy,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with peg scoring and solver simulations",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of positions in a code
    #[arg(short = 's', long, global = true, default_value_t = DEFAULT_SLOTS)]
    slots: usize,

    /// Number of colors in play (1-8)
    #[arg(short = 'c', long, global = true, default_value_t = DEFAULT_COLORS)]
    colors: usize,

    /// Guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Score a guess against a secret
    Score {
        /// Secret code, e.g. "RGBY" or "red,green,blue,yellow"
        secret: String,

        /// Guess code in the same format
        guess: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play many games with the built-in solver
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Solver strategy: first (default), random
        #[arg(long, default_value = "first")]
        strategy: String,

        /// Base seed; game i uses seed + i
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GameConfig::new(cli.slots, cli.colors, cli.max_guesses);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Score {
            secret,
            guess,
            json,
        } => run_score_command(&secret, &guess, json),
        Commands::Simulate {
            count,
            strategy,
            seed,
        } => run_simulate_command(config, count, &strategy, seed),
    }
}

fn run_play_command(config: GameConfig) -> Result<()> {
    config.validate()?;
    let service = GameService::new(InMemoryGameRepository::new());
    run_play(&service, config)
}

fn run_score_command(secret: &str, guess: &str, json: bool) -> Result<()> {
    let result = score_codes(secret, guess)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_score_result(&result);
    }
    Ok(())
}

fn run_simulate_command(config: GameConfig, count: usize, strategy: &str, seed: u64) -> Result<()> {
    let strategy = Strategy::from_name(strategy);
    println!(
        "Simulating {count} games ({} slots, {} colors, {} guesses) with the {} strategy...",
        config.num_slots,
        config.num_colors,
        config.max_guesses,
        strategy.name()
    );

    let result = run_simulation(&SimulationConfig {
        game: config,
        strategy,
        count,
        seed,
        show_progress: true,
    })?;
    print_simulation_result(&result);
    Ok(())
}
