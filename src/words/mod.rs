//! Target word sourcing
//!
//! The hidden word normally comes from a random-word web API; when that fails
//! in any way the game silently substitutes a word from the embedded fallback
//! list below. The player never sees the difference.

pub mod source;

pub use source::{ApiSource, FallbackSource, WordSource, next_target};

/// Fallback target candidates used when the word API is unreachable
pub const FALLBACK: &[&str] = &[
    "agent", "brick", "camel", "dance", "eagle", "flame", "ghost", "house",
    "inlet", "joker", "knife", "lemon", "mango", "night", "ocean", "piano",
    "quilt", "river", "snake", "tiger", "urban", "vivid", "wagon", "youth",
    "zesty",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn fallback_words_are_valid() {
        for &word in FALLBACK {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(Word::new(word).is_ok());
        }
    }

    #[test]
    fn fallback_words_are_distinct() {
        let unique: std::collections::HashSet<_> = FALLBACK.iter().collect();
        assert_eq!(unique.len(), FALLBACK.len());
    }
}
