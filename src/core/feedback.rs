//! Peg feedback calculation and representation
//!
//! Feedback for a guess is a pair of counts:
//! - black pegs: right color in the right position
//! - white pegs: right color in the wrong position
//!
//! Repeated colors are credited at most once per secret/guess slot.

use super::Code;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for one guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Feedback {
    pub black: usize,
    pub white: usize,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(black: usize, white: usize) -> Self {
        Self { black, white }
    }

    /// All slots matched exactly
    #[inline]
    #[must_use]
    pub const fn is_solved(self, num_slots: usize) -> bool {
        self.black == num_slots
    }

    /// Score `guess` against `secret`
    ///
    /// Both codes are expected to have the same length; callers validate the
    /// guess shape before scoring.
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches (black) and drop them from both codes
    /// 2. Second pass: for each color, add min(remaining in secret, remaining in guess)
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color, Feedback};
    /// use Color::{Blue, Green, Red};
    ///
    /// let secret = Code::new(vec![Green, Blue, Blue, Red]);
    /// let guess = Code::new(vec![Green, Blue, Red, Blue]);
    ///
    /// assert_eq!(Feedback::evaluate(&secret, &guess), Feedback::new(2, 2));
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Code, guess: &Code) -> Self {
        debug_assert_eq!(secret.len(), guess.len(), "codes must have equal length");

        // First pass: exact matches
        let mut black = 0;
        let mut secret_rest = Vec::with_capacity(secret.len());
        let mut guess_rest = Vec::with_capacity(guess.len());
        for (&s, &g) in secret.colors().iter().zip(guess.colors()) {
            if s == g {
                black += 1;
            } else {
                secret_rest.push(s);
                guess_rest.push(g);
            }
        }

        // Second pass: color overlap of what is left
        let secret_counts = Code::new(secret_rest).color_counts();
        let guess_counts = Code::new(guess_rest).color_counts();
        let white = guess_counts
            .iter()
            .map(|(color, &in_guess)| {
                secret_counts
                    .get(color)
                    .map_or(0, |&in_secret| in_secret.min(in_guess))
            })
            .sum();

        Self { black, white }
    }

    /// Peg string such as `●●○·` for a game with `num_slots` slots
    #[must_use]
    pub fn to_pegs(self, num_slots: usize) -> String {
        let empty = num_slots.saturating_sub(self.black + self.white);
        let mut result = String::with_capacity(num_slots * 3);
        result.push_str(&"●".repeat(self.black));
        result.push_str(&"○".repeat(self.white));
        result.push_str(&"·".repeat(empty));
        result
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{} W{}", self.black, self.white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{self, Blue, Green, Orange, Red, White, Yellow};
    use crate::core::CATALOGUE;

    fn code(colors: &[Color]) -> Code {
        Code::new(colors.to_vec())
    }

    #[test]
    fn swapped_pair() {
        let secret = code(&[Green, Blue, Blue, Red]);
        let guess = code(&[Green, Blue, Red, Blue]);
        assert_eq!(Feedback::evaluate(&secret, &guess), Feedback::new(2, 2));
    }

    #[test]
    fn repeated_secret_color() {
        let secret = code(&[Blue, Blue, Blue, Red]);
        let guess = code(&[Blue, Blue, Red, Blue]);
        assert_eq!(Feedback::evaluate(&secret, &guess), Feedback::new(2, 2));
    }

    #[test]
    fn all_white() {
        let secret = code(&[White, Blue, White, Blue]);
        let guess = code(&[Blue, White, Blue, White]);
        assert_eq!(Feedback::evaluate(&secret, &guess), Feedback::new(0, 4));
    }

    #[test]
    fn no_double_count_of_repeated_guess_color() {
        let secret = code(&[Orange, Orange, Orange, White]);
        let guess = code(&[Orange, White, White, White]);
        assert_eq!(Feedback::evaluate(&secret, &guess), Feedback::new(2, 0));
    }

    #[test]
    fn single_aligned_match_among_repeats() {
        // Only the last Y lines up; no Y is left in the secret for whites
        let secret = code(&[Red, Red, Green, Yellow]);
        let guess = code(&[Yellow, Yellow, Yellow, Yellow]);
        assert_eq!(Feedback::evaluate(&secret, &guess), Feedback::new(1, 0));
    }

    #[test]
    fn nothing_in_common() {
        let secret = code(&[Red, Red, Blue, Blue]);
        let guess = code(&[Green, Yellow, Green, Yellow]);
        assert_eq!(Feedback::evaluate(&secret, &guess), Feedback::default());
    }

    #[test]
    fn exact_match_is_all_black() {
        for secret in [
            code(&[Red, Blue, Green, Yellow]),
            code(&[Red, Red, Red, Red]),
            code(&[White]),
            code(&CATALOGUE),
        ] {
            let feedback = Feedback::evaluate(&secret, &secret);
            assert_eq!(feedback, Feedback::new(secret.len(), 0));
            assert!(feedback.is_solved(secret.len()));
        }
    }

    #[test]
    fn pegs_never_exceed_slots() {
        let palette = [Red, Blue, Green];
        let mut codes = Vec::new();
        for a in palette {
            for b in palette {
                for c in palette {
                    codes.push(code(&[a, b, c]));
                }
            }
        }

        for secret in &codes {
            for guess in &codes {
                let feedback = Feedback::evaluate(secret, guess);
                assert!(feedback.black + feedback.white <= 3);
                // scoring is symmetric in its arguments
                assert_eq!(feedback, Feedback::evaluate(guess, secret));
            }
        }
    }

    #[test]
    fn to_pegs_pads_with_empty_slots() {
        assert_eq!(Feedback::new(2, 1).to_pegs(4), "●●○·");
        assert_eq!(Feedback::new(0, 0).to_pegs(3), "···");
    }

    #[test]
    fn display_format() {
        assert_eq!(Feedback::new(3, 1).to_string(), "B3 W1");
    }
}
