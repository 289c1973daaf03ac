//! Guess evaluation against the hidden target
//!
//! Each letter of a finalized guess receives a verdict:
//! - Exact (green): right letter, right position
//! - Present (yellow): letter in the word, wrong position
//! - Absent (gray): letter not in the word
//!
//! Duplicate letters follow standard Wordle rules: a letter is credited at
//! most as many times as it appears unconsumed in the target.

use super::Word;
use std::fmt;

/// Per-letter classification of a finalized guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Right letter, right position (green)
    Exact,
    /// Letter occurs elsewhere in the target (yellow)
    Present,
    /// Letter not in the target, or all occurrences already claimed (gray)
    Absent,
}

impl Verdict {
    /// Emoji square for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one finalized row: a verdict per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([Verdict; 5]);

impl Feedback {
    /// All greens (winning row)
    pub const WIN: Self = Self([Verdict::Exact; 5]);

    /// Evaluate a finalized attempt against the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and consume them from a
    ///    scratch copy of the target's letter counts
    /// 2. Second pass: mark present-but-misplaced letters from the remaining
    ///    counts; everything else is absent
    ///
    /// A whole-row match short-circuits to all-Exact. Neither input is mutated;
    /// the scratch counts live only for the duration of the call.
    ///
    /// # Examples
    /// ```
    /// use wordle_rush::core::{Feedback, Verdict, Word};
    ///
    /// let attempt = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::evaluate(&attempt, &target);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// assert_eq!(feedback.verdict_at(2), Verdict::Exact);
    /// assert_eq!(feedback.verdict_at(4), Verdict::Exact);
    /// assert!(!feedback.is_win());
    /// ```
    #[must_use]
    pub fn evaluate(attempt: &Word, target: &Word) -> Self {
        // Whole-row override: equal words are all green by definition
        if attempt == target {
            return Self::WIN;
        }

        let mut verdicts = [Verdict::Absent; 5];
        let mut remaining = target.char_counts();

        // First pass: exact matches, consumed so a later yellow cannot reclaim them
        // Allow: index needed to compare attempt[i] with target[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if attempt.chars()[i] == target.chars()[i] {
                verdicts[i] = Verdict::Exact;

                let letter = attempt.chars()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present-elsewhere, bounded by the unconsumed counts
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if verdicts[i] != Verdict::Exact {
                let letter = attempt.chars()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    verdicts[i] = Verdict::Present;
                    *count -= 1;
                }
            }
        }

        Self(verdicts)
    }

    /// The verdict for each letter position
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; 5] {
        &self.0
    }

    /// The verdict at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn verdict_at(&self, position: usize) -> Verdict {
        self.0[position]
    }

    /// Whether every position is an exact match
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Exact)
    }

    /// Render the row as emoji squares, e.g. "🟨⬜⬜🟨🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl IntoIterator for Feedback {
    type Item = Verdict;
    type IntoIter = std::array::IntoIter<Verdict, 5>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn evaluate_all_absent() {
        let feedback = Feedback::evaluate(&word("abcde"), &word("fghij"));
        assert_eq!(*feedback.verdicts(), [Verdict::Absent; 5]);
    }

    #[test]
    fn evaluate_self_is_all_exact() {
        for text in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = word(text);
            let feedback = Feedback::evaluate(&w, &w);
            assert_eq!(feedback, Feedback::WIN);
            assert!(feedback.is_win());
        }
    }

    #[test]
    fn evaluate_classic_example() {
        // CRANE vs SLATE: C(gray) R(gray) A(green) N(gray) E(green)
        let feedback = Feedback::evaluate(&word("crane"), &word("slate"));
        assert_eq!(
            *feedback.verdicts(),
            [
                Verdict::Absent,
                Verdict::Absent,
                Verdict::Exact,
                Verdict::Absent,
                Verdict::Exact,
            ]
        );
    }

    #[test]
    fn evaluate_duplicate_letters_erase_vs_speed() {
        // Target SPEED has two E's, neither claimed by an exact match, so both
        // E's of ERASE are credited Present: E(yellow) R(gray) A(gray)
        // S(yellow) E(yellow)
        let feedback = Feedback::evaluate(&word("erase"), &word("speed"));
        assert_eq!(
            *feedback.verdicts(),
            [
                Verdict::Present,
                Verdict::Absent,
                Verdict::Absent,
                Verdict::Present,
                Verdict::Present,
            ]
        );
    }

    #[test]
    fn evaluate_duplicate_not_over_credited() {
        // Guess has three E's, target SPEED only two: the third E is gray
        let feedback = Feedback::evaluate(&word("eexee"), &word("speed"));
        let credited = feedback
            .into_iter()
            .filter(|&v| v != Verdict::Absent)
            .count();
        assert_eq!(credited, 2);
    }

    #[test]
    fn evaluate_green_consumes_before_yellow() {
        // ROBOT vs FLOOR: R(yellow) O(yellow) B(gray) O(green) T(gray)
        // The second O's exact match is consumed first, leaving one O for the
        // first O's yellow
        let feedback = Feedback::evaluate(&word("robot"), &word("floor"));
        assert_eq!(
            *feedback.verdicts(),
            [
                Verdict::Present,
                Verdict::Present,
                Verdict::Absent,
                Verdict::Exact,
                Verdict::Absent,
            ]
        );
    }

    #[test]
    fn evaluate_credit_never_exceeds_target_count() {
        // Property from the rules: Exact+Present for a letter never exceeds
        // its count in the target
        let cases = [
            ("eeeee", "speed"),
            ("sssss", "speed"),
            ("llama", "hello"),
            ("geese", "siege"),
        ];

        for (attempt, target) in cases {
            let attempt = word(attempt);
            let target = word(target);
            let feedback = Feedback::evaluate(&attempt, &target);

            for letter in b'a'..=b'z' {
                let credited = (0..5)
                    .filter(|&i| {
                        attempt.char_at(i) == letter
                            && feedback.verdict_at(i) != Verdict::Absent
                    })
                    .count();
                let in_target =
                    target.chars().iter().filter(|&&c| c == letter).count();
                assert!(
                    credited <= in_target,
                    "{attempt} vs {target}: letter {} over-credited",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn evaluate_does_not_mutate_inputs() {
        let attempt = word("erase");
        let target = word("speed");
        let before = target.clone();

        let _ = Feedback::evaluate(&attempt, &target);
        assert_eq!(target, before);

        // Evaluation is a pure function of its inputs
        assert_eq!(
            Feedback::evaluate(&attempt, &target),
            Feedback::evaluate(&attempt, &target)
        );
    }

    #[test]
    fn feedback_emoji() {
        let feedback = Feedback::evaluate(&word("crane"), &word("slate"));
        assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
        assert_eq!(Feedback::WIN.to_emoji(), "🟩🟩🟩🟩🟩");
    }
}
