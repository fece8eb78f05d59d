//! Display functions for command results

use super::formatters::{code_to_swatches, create_progress_bar, feedback_summary};
use crate::commands::{ScoreResult, SimulationResult};
use colored::Colorize;

/// Print the result of scoring two codes
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Secret:   {}", code_to_swatches(&result.secret));
    println!("Guess:    {}", code_to_swatches(&result.guess));
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Feedback: {}",
        feedback_summary(result.feedback, result.secret.len())
            .bright_yellow()
            .bold()
    );
}

/// Print the statistics of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let win_rate = if result.total_games == 0 {
        0.0
    } else {
        result.won as f64 / result.total_games as f64 * 100.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Won / lost:       {} / {}",
        result.won.to_string().green(),
        result.lost.to_string().red()
    );
    println!("   Win rate:         {win_rate:.1}%");
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.won == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in &result.distribution {
        let pct = count as f64 / result.won as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
