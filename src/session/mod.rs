//! Game session state
//!
//! A `Session` is one complete play-through: it owns the hidden target, the
//! board, the countdown, and the win/loss status. All input flows through it,
//! so there is no board state anywhere else to drift out of sync.

mod board;
mod countdown;

pub use board::{Board, COLS, Cell, ROWS};
pub use countdown::{Countdown, GAME_SECONDS};

use crate::core::{Feedback, Word};
use std::fmt;

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// Whether the game has ended, in either direction
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Named difficulty level
///
/// Accepted and displayed, but carries no gameplay effect: the evaluator,
/// attempt count, and word length are the same on every level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Create a difficulty from a name string
    ///
    /// Supported names: "easy", "normal", "hard". Defaults to normal if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Normal,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

/// One play-through from target selection to Won/Lost
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    board: Board,
    countdown: Countdown,
    status: Status,
    difficulty: Difficulty,
}

impl Session {
    /// Start a fresh session with the given hidden target
    #[must_use]
    pub fn new(target: Word, difficulty: Difficulty) -> Self {
        Self {
            target,
            board: Board::new(),
            countdown: Countdown::default(),
            status: Status::InProgress,
            difficulty,
        }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The hidden target; revealed to the player only on loss
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Append a letter to the current row
    ///
    /// Ignored once the game is over or the row already has 5 letters.
    pub fn push_letter(&mut self, letter: char) {
        if self.status.is_over() {
            return;
        }
        self.board.push_letter(letter);
    }

    /// Remove the last letter of the current row
    pub fn pop_letter(&mut self) {
        if self.status.is_over() {
            return;
        }
        self.board.pop_letter();
    }

    /// Finalize and evaluate the current row
    ///
    /// Does nothing (returns None) unless the game is in progress and the row
    /// has exactly 5 letters. On a full row the attempt is evaluated against
    /// the target and committed:
    /// - all-Exact transitions to `Won` and stops the clock
    /// - otherwise the next row opens, or the session transitions to `Lost`
    ///   when that was the last row
    pub fn submit(&mut self) -> Option<Feedback> {
        if self.status.is_over() {
            return None;
        }

        let attempt = self.board.current_word()?;
        let feedback = Feedback::evaluate(&attempt, &self.target);
        self.board.commit_row(&feedback);

        if feedback.is_win() {
            self.status = Status::Won;
            self.countdown.halt();
        } else if self.board.is_exhausted() {
            self.status = Status::Lost;
            self.countdown.halt();
        }

        Some(feedback)
    }

    /// Consume one second of the countdown
    ///
    /// When the clock reaches zero while the game is still in progress, the
    /// session transitions to `Lost`. Ticks after any terminal state are
    /// no-ops: the clock was halted on that transition.
    pub fn tick(&mut self) {
        if self.status.is_over() {
            return;
        }

        if self.countdown.tick() {
            self.status = Status::Lost;
        }
    }

    /// Start over with a new hidden target
    ///
    /// Clears the board, restores the full countdown, and returns the session
    /// to `InProgress`. Difficulty is retained.
    pub fn reset(&mut self, target: Word) {
        self.target = target;
        self.board.clear();
        self.countdown.reset();
        self.status = Status::InProgress;
    }
}
