//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback};
use colored::{ColoredString, Colorize};

/// A colored peg for one color, labelled with its initial
#[must_use]
pub fn color_swatch(color: Color) -> ColoredString {
    let label = format!("●{}", color.initial());
    match color {
        Color::Red => label.red(),
        Color::Blue => label.blue(),
        Color::Green => label.green(),
        Color::Yellow => label.yellow(),
        Color::Orange => label.truecolor(255, 165, 0),
        Color::White => label.white(),
        Color::Purple => label.magenta(),
        Color::Turquoise => label.cyan(),
    }
}

/// A code as a row of colored pegs
#[must_use]
pub fn code_to_swatches(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&c| color_swatch(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Feedback pegs with the black/white counts
#[must_use]
pub fn feedback_summary(feedback: Feedback, num_slots: usize) -> String {
    format!("{}  {feedback}", feedback.to_pegs(num_slots))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_summary_has_pegs_and_counts() {
        assert_eq!(feedback_summary(Feedback::new(1, 2), 4), "●○○·  B1 W2");
    }

    #[test]
    fn swatches_carry_initials() {
        colored::control::set_override(false);
        let code = Code::new(vec![Color::Red, Color::Turquoise]);
        assert_eq!(code_to_swatches(&code), "●R ●T");
        colored::control::unset_override();
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
