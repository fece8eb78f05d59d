//! Peg colors and the active palette
//!
//! The catalogue is a fixed, ordered list of 8 colors. A game plays with a
//! prefix of it, so `Palette::new(4)` is always red, blue, green, yellow.

use crate::game::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of colors in the catalogue
pub const CATALOGUE_SIZE: usize = 8;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    White,
    Purple,
    Turquoise,
}

/// Catalogue order (fixed; palettes are prefixes of this)
pub const CATALOGUE: [Color; CATALOGUE_SIZE] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Orange,
    Color::White,
    Color::Purple,
    Color::Turquoise,
];

impl Color {
    /// Lowercase name, as used in serialized form
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::White => "white",
            Self::Purple => "purple",
            Self::Turquoise => "turquoise",
        }
    }

    /// Single-letter initial (unique across the catalogue)
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Orange => 'O',
            Self::White => 'W',
            Self::Purple => 'P',
            Self::Turquoise => 'T',
        }
    }

    /// Look up a color by its initial, case-insensitively
    #[must_use]
    pub fn from_initial(ch: char) -> Option<Self> {
        let upper = ch.to_ascii_uppercase();
        CATALOGUE.iter().copied().find(|c| c.initial() == upper)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised color token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color: {0:?}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        if let (Some(ch), None) = (chars.next(), chars.next())
            && let Some(color) = Self::from_initial(ch)
        {
            return Ok(color);
        }

        CATALOGUE
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| UnknownColor(token.to_string()))
    }
}

/// The colors available to one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [Color],
}

impl Palette {
    /// First `num_colors` entries of the catalogue
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` unless `1 <= num_colors <= 8`.
    pub fn new(num_colors: usize) -> Result<Self, GameError> {
        if !(1..=CATALOGUE_SIZE).contains(&num_colors) {
            return Err(GameError::InvalidConfiguration(format!(
                "num_colors must be between 1 and {CATALOGUE_SIZE}, got {num_colors}"
            )));
        }

        Ok(Self {
            colors: &CATALOGUE[..num_colors],
        })
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &'static [Color] {
        self.colors
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette holds at least one color
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_catalogue_prefix() {
        let palette = Palette::new(4).unwrap();
        assert_eq!(
            palette.colors(),
            &[Color::Red, Color::Blue, Color::Green, Color::Yellow]
        );
        assert!(palette.contains(Color::Yellow));
        assert!(!palette.contains(Color::Orange));
    }

    #[test]
    fn palette_full_catalogue() {
        let palette = Palette::new(8).unwrap();
        assert_eq!(palette.colors(), &CATALOGUE);
        assert_eq!(palette.len(), 8);
    }

    #[test]
    fn palette_out_of_range() {
        assert!(matches!(
            Palette::new(0),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Palette::new(9),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn initials_are_unique() {
        for (i, a) in CATALOGUE.iter().enumerate() {
            for b in &CATALOGUE[i + 1..] {
                assert_ne!(a.initial(), b.initial());
            }
        }
    }

    #[test]
    fn color_from_str_accepts_names_and_initials() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("Turquoise".parse::<Color>().unwrap(), Color::Turquoise);
        assert_eq!("w".parse::<Color>().unwrap(), Color::White);
        assert_eq!(" O ".parse::<Color>().unwrap(), Color::Orange);
        assert!("black".parse::<Color>().is_err());
        assert!("x".parse::<Color>().is_err());
    }

    #[test]
    fn color_serializes_lowercase() {
        let json = serde_json::to_string(&Color::Purple).unwrap();
        assert_eq!(json, "\"purple\"");
    }
}
