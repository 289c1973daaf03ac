//! Plain line-oriented game mode
//!
//! Text-based play without the TUI: one guess per line, colored feedback per
//! row. The countdown is driven by wall-clock time, consumed as whole seconds
//! between prompts, so dawdling over a guess still costs clock time.

use crate::output::{colored_row, print_loss_banner, print_win_banner};
use crate::session::{Difficulty, ROWS, Session, Status};
use crate::words::{WordSource, next_target};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// Tracks how many countdown seconds have already been consumed
struct WallClock {
    started: Instant,
    ticked: u64,
}

impl WallClock {
    fn start() -> Self {
        Self {
            started: Instant::now(),
            ticked: 0,
        }
    }

    /// Feed elapsed whole seconds into the session as ticks
    fn sync(&mut self, session: &mut Session) {
        let elapsed = self.started.elapsed().as_secs();
        while self.ticked < elapsed {
            session.tick();
            self.ticked += 1;
        }
    }
}

/// Run the plain CLI game loop
///
/// # Errors
///
/// Returns an error if reading user input or writing to stdout fails.
pub fn run_simple(source: &mut dyn WordSource, difficulty: Difficulty) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║                 WORDLE RUSH - Plain Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 5-letter word in {ROWS} attempts before the clock runs out.");
    println!("After each guess the row is colored:\n");
    println!("  {} right letter, right spot", " A ".black().on_green());
    println!("  {} right letter, wrong spot", " B ".black().on_yellow());
    println!("  {} letter not in the word\n", " C ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' to restart with a fresh word\n");

    let mut session = Session::new(next_target(source), difficulty);
    let mut clock = WallClock::start();

    loop {
        clock.sync(&mut session);

        match session.status() {
            Status::Won => {
                print_win_banner(session.board().row(), session.countdown());
                if !prompt_play_again()? {
                    return Ok(());
                }
                session.reset(next_target(source));
                clock = WallClock::start();
                continue;
            }
            Status::Lost => {
                if session.countdown().is_expired() {
                    println!("\n⏰ {}", "Time's up!".bright_red().bold());
                }
                print_loss_banner(session.target());
                if !prompt_play_again()? {
                    return Ok(());
                }
                session.reset(next_target(source));
                clock = WallClock::start();
                continue;
            }
            Status::InProgress => {}
        }

        let prompt = format!(
            "Guess {}/{ROWS} [{}]",
            session.board().row() + 1,
            session.countdown()
        );
        let input = get_user_input(&prompt)?.to_lowercase();

        // The wait for input burns clock time; expiry is checked at loop top
        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.reset(next_target(source));
                clock = WallClock::start();
                println!("\n🔄 New game started!\n");
                continue;
            }
            guess => {
                if guess.len() != 5 || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
                    println!("❌ Enter exactly 5 letters (or 'quit' / 'new')\n");
                    continue;
                }

                clock.sync(&mut session);
                for ch in guess.chars() {
                    session.push_letter(ch);
                }

                if let Some(feedback) = session.submit() {
                    println!("\n  {}\n", colored_row(guess, &feedback));
                }
            }
        }
    }
}

fn prompt_play_again() -> Result<bool> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    if matches!(answer.as_str(), "yes" | "y") {
        println!("\n🔄 New game started!\n");
        Ok(true)
    } else {
        println!("\n👋 Thanks for playing!\n");
        Ok(false)
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;

    Ok(input.trim().to_string())
}
