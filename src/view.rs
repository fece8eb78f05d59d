//! Player-facing projections of games and guesses
//!
//! The secret is left out while a game is running and revealed once it is
//! won or lost.

use serde::Serialize;

use crate::core::{Code, Color};
use crate::game::{Game, GameStatus, Guess};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessView {
    pub id: usize,
    pub code: Code,
    pub black_pegs: usize,
    pub white_pegs: usize,
}

impl From<&Guess> for GuessView {
    fn from(guess: &Guess) -> Self {
        Self {
            id: guess.id(),
            code: guess.code().clone(),
            black_pegs: guess.black_pegs(),
            white_pegs: guess.white_pegs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub id: Option<u64>,
    pub reference: String,
    pub num_slots: usize,
    pub num_colors: usize,
    pub colors: Vec<Color>,
    pub max_guesses: usize,
    pub status: GameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_code: Option<Code>,
    pub guesses: Vec<GuessView>,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id().map(|id| id.inner()),
            reference: game.reference().to_string(),
            num_slots: game.num_slots(),
            num_colors: game.num_colors(),
            colors: game.palette().colors().to_vec(),
            max_guesses: game.max_guesses(),
            status: game.status(),
            secret_code: game.is_finished().then(|| game.secret().clone()),
            guesses: game.guesses().iter().map(GuessView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Green, Red};

    fn game() -> Game {
        Game::with_secret(Code::new(vec![Red, Green, Blue]), 3, 4).unwrap()
    }

    #[test]
    fn running_game_hides_secret() {
        let mut game = game();
        game.submit_guess(Code::new(vec![Red, Red, Red])).unwrap();

        let view = GameView::from(&game);
        assert_eq!(view.secret_code, None);
        assert_eq!(view.colors, vec![Red, Blue, Green]);
        assert_eq!(view.guesses.len(), 1);
        assert_eq!(view.guesses[0].black_pegs, 1);

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("secret_code").is_none());
        assert_eq!(json["status"], "running");
        assert_eq!(json["guesses"][0]["code"][0], "red");
    }

    #[test]
    fn finished_game_reveals_secret() {
        let mut game = game();
        game.submit_guess(Code::new(vec![Red, Green, Blue])).unwrap();

        let view = GameView::from(&game);
        assert_eq!(view.status, GameStatus::Won);
        assert_eq!(view.secret_code, Some(Code::new(vec![Red, Green, Blue])));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["secret_code"][2], "blue");
    }
}
