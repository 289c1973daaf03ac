//! In-memory board model
//!
//! The board is the single source of truth for what the player has typed.
//! Committed rows are append-only; only the current row is mutable, one
//! letter at a time.

use crate::core::{Feedback, Verdict, Word};

/// Number of guess rows in a game
pub const ROWS: usize = 5;

/// Letters per row
pub const COLS: usize = 5;

/// One board cell: a typed letter plus, after the row is finalized, its verdict
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub verdict: Option<Verdict>,
}

/// The 5×5 guess grid with current row/column bookkeeping
#[derive(Debug, Clone, Default)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    row: usize,
    col: usize,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the row currently being typed
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Number of letters typed into the current row
    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Whether every row has been committed
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.row >= ROWS
    }

    /// Access a cell by row and column
    ///
    /// # Panics
    /// Panics if row >= 5 or col >= 5
    #[inline]
    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// All rows, committed and pending
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Append a letter to the current row
    ///
    /// Returns false (and changes nothing) if the row is already full, the
    /// board is exhausted, or the character is not an ASCII letter.
    pub fn push_letter(&mut self, letter: char) -> bool {
        if self.is_exhausted() || self.col >= COLS || !letter.is_ascii_alphabetic() {
            return false;
        }

        self.cells[self.row][self.col].letter = Some(letter.to_ascii_lowercase());
        self.col += 1;
        true
    }

    /// Remove the last letter of the current row
    ///
    /// Returns false if the current row is empty.
    pub fn pop_letter(&mut self) -> bool {
        if self.is_exhausted() || self.col == 0 {
            return false;
        }

        self.col -= 1;
        self.cells[self.row][self.col].letter = None;
        true
    }

    /// The current row as a Word, once all 5 letters are present
    ///
    /// Returns None while the row is incomplete, which is what gates
    /// finalization: the evaluator is only ever invoked on a full row.
    #[must_use]
    pub fn current_word(&self) -> Option<Word> {
        if self.is_exhausted() || self.col < COLS {
            return None;
        }

        let text: String = self.cells[self.row]
            .iter()
            .filter_map(|cell| cell.letter)
            .collect();

        Word::new(text).ok()
    }

    /// Store the feedback on the current row and advance to the next
    ///
    /// The committed row becomes immutable; the column resets for the new row.
    pub fn commit_row(&mut self, feedback: &Feedback) {
        debug_assert_eq!(self.col, COLS, "commit requires a full row");

        for (cell, verdict) in self.cells[self.row].iter_mut().zip(*feedback.verdicts()) {
            cell.verdict = Some(verdict);
        }

        self.row += 1;
        self.col = 0;
    }

    /// Reset every cell and the row/column cursors
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
