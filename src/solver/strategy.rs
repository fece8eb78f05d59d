//! Guess selection strategies
//!
//! Both strategies only ever pick a code that is still consistent with the
//! feedback seen so far.

use crate::core::Code;
use rand::Rng;
use rand::seq::IndexedRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// First consistent code in enumeration order (deterministic)
    #[default]
    First,
    /// Uniformly random consistent code
    Random,
}

impl Strategy {
    /// Create strategy from name
    ///
    /// Supported names: "first" (default), "random". Unknown names fall back
    /// to the default.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "random" => Self::Random,
            _ => Self::First,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Random => "random",
        }
    }

    /// Pick one of `candidates`
    pub fn select<'a, R: Rng + ?Sized>(self, candidates: &[&'a Code], rng: &mut R) -> Option<&'a Code> {
        match self {
            Self::First => candidates.first().copied(),
            Self::Random => candidates.choose(rng).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Red};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn from_name_parses_and_defaults() {
        assert_eq!(Strategy::from_name("random"), Strategy::Random);
        assert_eq!(Strategy::from_name("FIRST"), Strategy::First);
        assert_eq!(Strategy::from_name("knuth"), Strategy::First);
    }

    #[test]
    fn selects_from_candidates() {
        let a = Code::new(vec![Red, Blue]);
        let b = Code::new(vec![Blue, Red]);
        let candidates = vec![&a, &b];
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(Strategy::First.select(&candidates, &mut rng), Some(&a));
        let picked = Strategy::Random.select(&candidates, &mut rng).unwrap();
        assert!(picked == &a || picked == &b);
        assert_eq!(Strategy::Random.select(&[], &mut rng), None);
    }
}
