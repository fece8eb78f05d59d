//! Consistent-candidate Mastermind solver

use super::strategy::Strategy;
use crate::core::{Code, Feedback, Palette};
use crate::game::Guess;
use rand::Rng;

/// Plays by only guessing codes that could still be the secret
///
/// Holds the whole code space, so keep `palette.len() ^ num_slots` small.
pub struct Solver {
    strategy: Strategy,
    num_slots: usize,
    all_codes: Vec<Code>,
}

impl Solver {
    /// Enumerate every code over `palette` with `num_slots` positions
    #[must_use]
    pub fn new(strategy: Strategy, palette: &Palette, num_slots: usize) -> Self {
        let mut all_codes = vec![Vec::with_capacity(num_slots)];
        for _ in 0..num_slots {
            all_codes = all_codes
                .into_iter()
                .flat_map(|prefix| {
                    palette.colors().iter().map(move |&color| {
                        let mut next = prefix.clone();
                        next.push(color);
                        next
                    })
                })
                .collect();
        }

        Self {
            strategy,
            num_slots,
            all_codes: all_codes.into_iter().map(Code::new).collect(),
        }
    }

    /// Opening guess: first half in the first color, the rest in the second
    ///
    /// For 4 slots this is the classic `AABB` opener.
    #[must_use]
    pub fn first_guess(&self, palette: &Palette) -> Code {
        let colors = palette.colors();
        let second = colors.get(1).unwrap_or(&colors[0]);
        let split = self.num_slots / 2;

        Code::new(
            (0..self.num_slots)
                .map(|i| if i < split { colors[0] } else { *second })
                .collect(),
        )
    }

    /// Next guess given the history so far, or `None` if nothing is consistent
    pub fn next_guess<R: Rng + ?Sized>(&self, history: &[Guess], rng: &mut R) -> Option<&Code> {
        let candidates = self.filter_candidates(history);
        self.strategy.select(&candidates, rng)
    }

    /// Codes that would have produced every observed feedback
    fn filter_candidates(&self, history: &[Guess]) -> Vec<&Code> {
        self.all_codes
            .iter()
            .filter(|&candidate| {
                history
                    .iter()
                    .all(|guess| Feedback::evaluate(candidate, guess.code()) == guess.feedback())
            })
            .collect()
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[Guess]) -> usize {
        self.filter_candidates(history).len()
    }

    #[must_use]
    pub fn code_space(&self) -> usize {
        self.all_codes.len()
    }
}
