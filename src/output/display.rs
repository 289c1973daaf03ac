//! End-of-game banners for the plain CLI mode

use crate::core::Word;
use crate::session::Countdown;
use colored::Colorize;

/// Celebration banner shown when the player guesses the word
pub fn print_win_banner(rows_used: usize, countdown: &Countdown) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉 ✨  Y O U   G U E S S E D   I T !  ✨ 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let performance = match rows_used {
        1 => "🏆 First try! Incredible!",
        2 => "⭐ Two guesses! Outstanding!",
        3 => "💫 Three guesses! Very sharp!",
        4 => "✨ Four guesses! Nice work!",
        _ => "👍 Got it on the last row!",
    };

    println!("\n  {}", performance.bright_yellow().bold());
    println!(
        "  Solved in {} {} with {} on the clock",
        rows_used.to_string().bright_cyan().bold(),
        if rows_used == 1 { "guess" } else { "guesses" },
        countdown.to_string().bright_cyan().bold()
    );
    println!("\n{}\n", "═".repeat(60).bright_cyan());
}

/// Loss banner: reveals the hidden target
pub fn print_loss_banner(target: &Word) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "    G A M E   O V E R    ".bright_red().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  The word was {}\n",
        target.text().to_uppercase().bright_yellow().bold()
    );
}
