//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict};
use colored::{ColoredString, Colorize};

/// Render one letter with its verdict color: green, yellow, or gray background
#[must_use]
pub fn colored_cell(letter: char, verdict: Verdict) -> ColoredString {
    let cell = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Verdict::Exact => cell.black().on_green(),
        Verdict::Present => cell.black().on_yellow(),
        Verdict::Absent => cell.white().on_bright_black(),
    }
}

/// Render a finalized row as colored letter cells
#[must_use]
pub fn colored_row(letters: &str, feedback: &Feedback) -> String {
    letters
        .chars()
        .zip(*feedback.verdicts())
        .map(|(letter, verdict)| colored_cell(letter, verdict).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn colored_row_uppercases_letters() {
        colored::control::set_override(false);

        let attempt = Word::new("crane").unwrap();
        let target = Word::new("slate").unwrap();
        let feedback = Feedback::evaluate(&attempt, &target);

        let row = colored_row(attempt.text(), &feedback);
        assert!(row.contains('C'));
        assert!(row.contains('E'));
        assert!(!row.contains('c'));
    }

    #[test]
    fn colored_row_has_five_cells() {
        colored::control::set_override(false);

        let word = Word::new("slate").unwrap();
        let feedback = Feedback::evaluate(&word, &word);

        let row = colored_row(word.text(), &feedback);
        assert_eq!(row.split(' ').filter(|s| !s.is_empty()).count(), 5);
    }
}
