//! Score command
//!
//! Evaluates one guess against one secret outside of any game.

use crate::core::{Code, Feedback};
use anyhow::{Context, Result, bail};
use serde::Serialize;

/// Result of scoring two codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Parse and score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either code fails to parse or their lengths differ.
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreResult> {
    let secret: Code = secret
        .parse()
        .with_context(|| format!("invalid secret {secret:?}"))?;
    let guess: Code = guess
        .parse()
        .with_context(|| format!("invalid guess {guess:?}"))?;

    if secret.len() != guess.len() {
        bail!(
            "secret has {} colors but guess has {}",
            secret.len(),
            guess.len()
        );
    }

    let feedback = Feedback::evaluate(&secret, &guess);
    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_named_codes() {
        let result = score_codes("white blue white blue", "blue white blue white").unwrap();
        assert_eq!(result.feedback, Feedback::new(0, 4));
    }

    #[test]
    fn scores_initials() {
        let result = score_codes("OOOW", "OWWW").unwrap();
        assert_eq!(result.feedback, Feedback::new(2, 0));
    }

    #[test]
    fn rejects_length_mismatch() {
        assert!(score_codes("RGB", "RG").is_err());
    }

    #[test]
    fn rejects_unknown_color() {
        let err = score_codes("RGB", "RGX").unwrap_err();
        assert!(err.to_string().contains("invalid guess"));
    }

    #[test]
    fn serializes_feedback() {
        let result = score_codes("RB", "BR").unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["feedback"]["white"], 2);
        assert_eq!(json["secret"][0], "red");
    }
}
