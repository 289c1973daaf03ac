//! Wordle Rush - CLI
//!
//! Timed word-guessing game with TUI and plain CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_rush::{
    commands::run_simple,
    interactive::{App, run_tui},
    session::Difficulty,
    words::{ApiSource, FallbackSource, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_rush",
    about = "Guess the hidden 5-letter word in 5 tries before the 5-minute clock runs out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy, normal (default), hard
    #[arg(short, long, global = true, default_value = "normal")]
    difficulty: String,

    /// Skip the online word API and pick targets from the built-in list
    #[arg(long, global = true)]
    offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (line-oriented, no TUI)
    Simple,
}

/// Build the target word source for this run
///
/// Online sourcing failures are recovered silently, so a failed client build
/// degrades to the fallback list like any other sourcing error.
fn build_source(offline: bool) -> Box<dyn WordSource> {
    if offline {
        return Box::new(FallbackSource::new());
    }

    match ApiSource::new() {
        Ok(source) => Box::new(source),
        Err(_) => Box::new(FallbackSource::new()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let difficulty = Difficulty::from_name(&cli.difficulty);
    let mut source = build_source(cli.offline);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(source, difficulty);
            run_tui(app)
        }
        Commands::Simple => run_simple(&mut *source, difficulty),
    }
}
