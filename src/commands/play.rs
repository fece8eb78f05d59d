//! Interactive play mode
//!
//! Text-based game on stdin/stdout, driven through the game service.

use crate::config::GameConfig;
use crate::core::Code;
use crate::game::{Game, GameId, GameStatus};
use crate::output::formatters::{code_to_swatches, color_swatch, feedback_summary};
use crate::repository::GameRepository;
use crate::service::{GameService, ServiceError};
use crate::view::GameView;
use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player typed at the guess prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Quit,
    NewGame,
    ShowJson,
    Guess(Code),
    Invalid(String),
}

impl PlayerInput {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            "json" => Self::ShowJson,
            other => match other.parse::<Code>() {
                Ok(code) => Self::Guess(code),
                Err(e) => Self::Invalid(e.to_string()),
            },
        }
    }
}

/// Run the interactive game loop
///
/// # Errors
///
/// Returns an error on I/O failure or if the game cannot be created or loaded.
pub fn run_play<R: GameRepository>(service: &GameService<R>, config: GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Mastermind - Interactive                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let mut game = start_game(service, config)?;

    loop {
        let id = game_id(&game)?;
        let prompt = format!(
            "Guess {}/{}",
            game.guesses().len() + 1,
            game.max_guesses()
        );
        let Some(line) = read_line(&mut input, &prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match PlayerInput::parse(&line) {
            PlayerInput::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            PlayerInput::NewGame => {
                game = start_game(service, config)?;
            }
            PlayerInput::ShowJson => {
                let view = GameView::from(&service.get_game(id)?);
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
            PlayerInput::Invalid(reason) => {
                println!("❌ {reason}. Use color names (red, blue) or initials (RBGY).\n");
            }
            PlayerInput::Guess(code) => match service.submit_guess(id, code) {
                Ok((guess, updated)) => {
                    println!(
                        "   {}   {}\n",
                        code_to_swatches(guess.code()),
                        feedback_summary(guess.feedback(), updated.num_slots())
                    );
                    game = updated;

                    if game.is_finished() {
                        print_game_over(&game);
                        let again = read_line(&mut input, "Play again? (yes/no)")?
                            .unwrap_or_default()
                            .to_lowercase();
                        if !matches!(again.as_str(), "yes" | "y") {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                        game = start_game(service, config)?;
                    }
                }
                Err(ServiceError::Game(e)) => println!("❌ {e}\n"),
                Err(e) => return Err(e.into()),
            },
        }
    }
}

fn start_game<R: GameRepository>(service: &GameService<R>, config: GameConfig) -> Result<Game> {
    let game = service
        .create_game(config)
        .context("could not start a new game")?;

    println!(
        "🔄 New game {} - {} slots, {} guesses",
        game.reference().to_string().bright_cyan().bold(),
        game.num_slots(),
        game.max_guesses()
    );
    let palette = game
        .palette()
        .colors()
        .iter()
        .map(|&c| format!("{} {c}", color_swatch(c)))
        .collect::<Vec<_>>()
        .join("  ");
    println!("   Colors: {palette}");
    println!("   ● right color and position, ○ right color wrong position");
    println!("   Commands: 'quit' to exit, 'new' for new game, 'json' for game state\n");

    Ok(game)
}

fn game_id(game: &Game) -> Result<GameId> {
    game.id().ok_or_else(|| anyhow!("game {} was never stored", game.reference()))
}

fn print_game_over(game: &Game) {
    println!("{}", "═".repeat(62).bright_cyan());
    match game.status() {
        GameStatus::Won => {
            let turns = game.guesses().len();
            println!(
                "{}",
                format!(
                    "   🎉 Cracked in {turns} {}!",
                    if turns == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!("{}", "   ❌ Out of guesses".red().bold());
        }
        GameStatus::Running => {}
    }
    println!("   Secret: {}", code_to_swatches(game.secret()));
    println!("{}\n", "═".repeat(62).bright_cyan());
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Green, Red, Yellow};

    #[test]
    fn parses_commands() {
        assert_eq!(PlayerInput::parse("q"), PlayerInput::Quit);
        assert_eq!(PlayerInput::parse(" EXIT "), PlayerInput::Quit);
        assert_eq!(PlayerInput::parse("new"), PlayerInput::NewGame);
        assert_eq!(PlayerInput::parse("json"), PlayerInput::ShowJson);
    }

    #[test]
    fn parses_guesses() {
        assert_eq!(
            PlayerInput::parse("RGBY"),
            PlayerInput::Guess(Code::new(vec![Red, Green, Blue, Yellow]))
        );
        assert_eq!(
            PlayerInput::parse("red, green"),
            PlayerInput::Guess(Code::new(vec![Red, Green]))
        );
    }

    #[test]
    fn reports_invalid_input() {
        assert!(matches!(PlayerInput::parse("rgbx"), PlayerInput::Invalid(_)));
        assert!(matches!(PlayerInput::parse(""), PlayerInput::Invalid(_)));
    }

    #[test]
    fn read_line_trims_and_detects_eof() {
        let mut input = io::Cursor::new("  RGBY  \n");
        assert_eq!(read_line(&mut input, "Guess").unwrap(), Some("RGBY".to_string()));
        assert_eq!(read_line(&mut input, "Guess").unwrap(), None);
    }
}
