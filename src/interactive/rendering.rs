//! TUI rendering with ratatui
//!
//! Draws the guess grid, countdown, and message log.

use super::app::{App, MessageStyle};
use crate::core::Verdict;
use crate::session::{COLS, GAME_SECONDS, ROWS, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(13),    // Main content
            Constraint::Length(7),  // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - board on the left, clock and outcome on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⏱  WORDLE RUSH - Beat the Clock")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Exact => Style::default().fg(Color::Black).bg(Color::Green),
        Verdict::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.board();
    let mut lines = vec![Line::default()];

    for row in 0..ROWS {
        let mut spans = Vec::with_capacity(COLS * 2);

        for col in 0..COLS {
            let cell = board.cell(row, col);
            let letter = cell
                .letter
                .map_or(' ', |c| c.to_ascii_uppercase());
            let text = format!(" {letter} ");

            let style = match cell.verdict {
                Some(verdict) => verdict_style(verdict),
                None if cell.letter.is_some() => Style::default()
                    .fg(Color::White)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                None => Style::default().fg(Color::DarkGray).bg(Color::Black),
            };

            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_countdown(f, app, chunks[0]);
    render_outcome(f, app, chunks[1]);
}

fn render_countdown(f: &mut Frame, app: &App, area: Rect) {
    let countdown = app.session.countdown();
    let remaining = countdown.remaining();

    // Turn red for the final 30 seconds
    let color = if remaining <= 30 {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(f64::from(remaining) / f64::from(GAME_SECONDS))
        .label(countdown.to_string());

    f.render_widget(gauge, area);
}

fn render_outcome(f: &mut Frame, app: &App, area: Rect) {
    let (title, lines, color) = match app.session.status() {
        Status::Won => (
            " 🎉 YOU WON! 🎉 ",
            vec![
                Line::default(),
                Line::from("Congratulations! You guessed the word!"),
                Line::default(),
                Line::from("Press 'n' for a new game or 'q' to quit."),
            ],
            Color::Green,
        ),
        Status::Lost => (
            " GAME OVER ",
            vec![
                Line::default(),
                Line::from(vec![
                    Span::raw("The word was "),
                    Span::styled(
                        app.session.target().text().to_uppercase(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::default(),
                Line::from("Press 'n' for a new game or 'q' to quit."),
            ],
            Color::Red,
        ),
        Status::InProgress => (
            " How to Play ",
            vec![
                Line::default(),
                Line::from("Type a 5-letter word, Enter submits."),
                Line::from("Backspace deletes the last letter."),
                Line::default(),
                Line::from(vec![
                    Span::styled(" A ", verdict_style(Verdict::Exact)),
                    Span::raw(" exact   "),
                    Span::styled(" B ", verdict_style(Verdict::Present)),
                    Span::raw(" present   "),
                    Span::styled(" C ", verdict_style(Verdict::Absent)),
                    Span::raw(" absent"),
                ]),
            ],
            Color::White,
        ),
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let difficulty = Paragraph::new(format!("Difficulty: {}", app.session.difficulty()))
        .alignment(Alignment::Center);
    f.render_widget(difficulty, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let attempts_text = format!(
        "Attempt: {}/{ROWS}",
        (app.session.board().row() + 1).min(ROWS)
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[2]);

    let help_text = if app.session.status().is_over() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Enter: Submit | Backspace: Delete"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
