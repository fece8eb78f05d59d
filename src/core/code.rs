//! Color sequences
//!
//! A `Code` is used both as the hidden secret and as a guess. It carries no
//! palette of its own; the owning game checks membership.

use super::color::{Color, UnknownColor};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of colors
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(Vec<Color>);

/// Error type for unparseable code text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCodeError {
    #[error("code is empty")]
    Empty,
    #[error(transparent)]
    UnknownColor(#[from] UnknownColor),
}

impl Code {
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count of each color in the code
    pub(crate) fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for &color in &self.0 {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }

    /// Compact form using color initials, e.g. `RBBG`
    #[must_use]
    pub fn to_initials(&self) -> String {
        self.0.iter().map(|c| c.initial()).collect()
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = ParseCodeError;

    /// Parse `red, blue, green` / `red blue green` or the compact `RBG`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseCodeError::Empty);
        }

        let is_separated = trimmed.contains(|c: char| c == ',' || c.is_whitespace());
        let colors = if is_separated {
            trimmed
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(str::parse)
                .collect::<Result<Vec<Color>, _>>()?
        } else if let Ok(color) = trimmed.parse::<Color>() {
            // a single full color name, e.g. "green"
            vec![color]
        } else {
            trimmed
                .chars()
                .map(|ch| Color::from_initial(ch).ok_or_else(|| UnknownColor(ch.to_string())))
                .collect::<Result<Vec<Color>, _>>()?
        };

        Ok(Self(colors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Green, Red, Yellow};

    #[test]
    fn parse_names() {
        let code: Code = "red, blue, blue, green".parse().unwrap();
        assert_eq!(code.colors(), &[Red, Blue, Blue, Green]);

        let code: Code = "RED   yellow".parse().unwrap();
        assert_eq!(code.colors(), &[Red, Yellow]);
    }

    #[test]
    fn parse_initials() {
        let code: Code = "rbbg".parse().unwrap();
        assert_eq!(code.colors(), &[Red, Blue, Blue, Green]);
        assert_eq!(code.to_initials(), "RBBG");
    }

    #[test]
    fn parse_single_name() {
        let code: Code = "green".parse().unwrap();
        assert_eq!(code.colors(), &[Green]);
    }

    #[test]
    fn parse_invalid() {
        assert_eq!("".parse::<Code>(), Err(ParseCodeError::Empty));
        assert!("red, black".parse::<Code>().is_err());
        assert!("RBX".parse::<Code>().is_err());
    }

    #[test]
    fn color_counts_with_duplicates() {
        let code = Code::new(vec![Red, Red, Green, Red]);
        let counts = code.color_counts();
        assert_eq!(counts.get(&Red), Some(&3));
        assert_eq!(counts.get(&Green), Some(&1));
        assert_eq!(counts.get(&Blue), None);
    }

    #[test]
    fn display_lists_names() {
        let code = Code::new(vec![Red, Yellow]);
        assert_eq!(code.to_string(), "red, yellow");
    }

    #[test]
    fn serializes_as_name_array() {
        let code = Code::new(vec![Blue, Green]);
        assert_eq!(serde_json::to_string(&code).unwrap(), r#"["blue","green"]"#);
    }
}
