//! TUI application state and logic

use crate::session::{COLS, Difficulty, ROWS, Session, Status};
use crate::words::{WordSource, next_target};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Application state
pub struct App {
    pub session: Session,
    source: Box<dyn WordSource>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl App {
    #[must_use]
    pub fn new(mut source: Box<dyn WordSource>, difficulty: Difficulty) -> Self {
        let target = next_target(&mut *source);

        Self {
            session: Session::new(target, difficulty),
            source,
            messages: vec![
                Message {
                    text: format!(
                        "Welcome! Guess the hidden word in {ROWS} tries before time runs out."
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Backspace deletes, Enter submits a full row."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn on_letter(&mut self, letter: char) {
        self.session.push_letter(letter);
    }

    pub fn on_backspace(&mut self) {
        self.session.pop_letter();
    }

    /// Finalize the current row, reporting the outcome in the message log
    pub fn on_submit(&mut self) {
        if self.session.status().is_over() {
            return;
        }

        if self.session.board().col() < COLS {
            self.add_message("Not enough letters!", MessageStyle::Error);
            return;
        }

        let Some(feedback) = self.session.submit() else {
            return;
        };

        match self.session.status() {
            Status::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;

                let celebration = match self.session.board().row() {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    _ => "🎉 NICE WORK! Got it on the last row! 🎉",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Status::Lost => {
                self.stats.total_games += 1;
                let reveal = format!(
                    "Out of attempts! The word was {}",
                    self.session.target().text().to_uppercase()
                );
                self.add_message(&reveal, MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Status::InProgress => {
                let left = ROWS - self.session.board().row();
                let text = format!(
                    "{} — {left} {} left",
                    feedback.to_emoji(),
                    if left == 1 { "attempt" } else { "attempts" }
                );
                self.add_message(&text, MessageStyle::Info);
            }
        }
    }

    /// One countdown second; losing on expiry is reported like any other loss
    pub fn on_tick(&mut self) {
        if self.session.status().is_over() {
            return;
        }

        self.session.tick();

        if self.session.status() == Status::Lost {
            self.stats.total_games += 1;
            let reveal = format!(
                "⏰ Time's up! The word was {}",
                self.session.target().text().to_uppercase()
            );
            self.add_message(&reveal, MessageStyle::Error);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        let target = next_target(&mut *self.source);
        self.session.reset(target);
        self.messages.clear();
        self.add_message("New game started! Fresh word, fresh clock.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll briefly so the once-per-second tick fires even without input
        if event::poll(Duration::from_millis(200))?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.session.status().is_over() {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                        last_tick = Instant::now();
                    }
                    _ => {
                        // Game over: ignore other keys
                    }
                }
            } else {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.on_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.on_backspace();
                    }
                    KeyCode::Enter => {
                        app.on_submit();
                    }
                    _ => {}
                }
            }
        }

        while last_tick.elapsed() >= Duration::from_secs(1) {
            app.on_tick();
            last_tick += Duration::from_secs(1);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
