//! Display functions for command results

use colored::Colorize;

use super::formatters::{keyboard_rows, result_row, share_grid};
use crate::commands::{ImportReport, StatsSummary};
use crate::core::{GuessRecord, KeyboardState, Phase, Word};

/// Print one evaluated guess as colored tiles
pub fn print_result_row(record: &GuessRecord) {
    println!("\n  {}\n", result_row(&record.guess, &record.result));
}

/// Print the keyboard with best-known letter states
pub fn print_keyboard(state: &KeyboardState) {
    for row in keyboard_rows(state) {
        println!("  {row}");
    }
    println!();
}

/// Print the win banner
pub fn print_win(rounds_used: u8) {
    let praise = match rounds_used {
        1 => "Unbelievable!",
        2 => "Magnificent!",
        3 => "Splendid!",
        4 => "Great job!",
        5 => "Nice work!",
        _ => "Phew, got it!",
    };

    println!(
        "\n{} {}",
        praise.bright_green().bold(),
        format!(
            "Solved in {rounds_used} {}.",
            if rounds_used == 1 { "guess" } else { "guesses" }
        )
        .bold()
    );
}

/// Print the loss banner, revealing the secret
pub fn print_loss(secret: &Word) {
    println!(
        "\n{} The word was {}.",
        "Out of guesses!".red().bold(),
        secret.text().bright_yellow().bold()
    );
}

/// Print the shareable emoji grid
pub fn print_share_grid(history: &[GuessRecord], phase: Phase) {
    println!("\n{}", share_grid(history, phase));
}

/// Print an import report
pub fn print_import_report(report: &ImportReport) {
    println!("\n{}", "IMPORT COMPLETE".bright_cyan().bold());
    println!("   Parsed:     {}", report.parsed);
    println!(
        "   Added:      {}",
        report.added.to_string().green().bold()
    );
    println!("   Duplicates: {}", report.duplicates);
}

/// Print the stats screen
pub fn print_stats(stats: &StatsSummary) {
    println!("\n{}", "STATISTICS".bright_cyan().bold());
    println!("   Games played:  {}", stats.total_games);
    println!(
        "   Won:           {} ({:.0}%)",
        stats.wins.to_string().green(),
        stats.win_rate()
    );
    println!("   Lost:          {}", stats.losses.to_string().red());
    if let Some(average) = stats.average_rounds {
        println!("   Avg guesses:   {average:.2}");
    }

    if stats.wins > 0 {
        println!("\n{}", "Guess distribution:".bright_cyan());
        let max = stats.distribution.iter().max().copied().unwrap_or(1).max(1);
        for (i, &count) in stats.distribution.iter().enumerate() {
            let bar_width = count * 30 / max;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(30 - bar_width).bright_black()
            );
            println!("   {}: {bar} {count:4}", i + 1);
        }
    }
}
