//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure and testable: a feedback row is derived solely from
//! the (attempt, target) pair.

mod verdict;
mod word;

pub use verdict::{Feedback, Verdict};
pub use word::{Word, WordError};
