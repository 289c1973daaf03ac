//! Wordle Rush
//!
//! A timed Wordle-style game for the terminal: five attempts and five minutes
//! to find the hidden 5-letter word.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_rush::core::{Feedback, Word};
//! use wordle_rush::session::{Difficulty, Session, Status};
//!
//! let target = Word::new("slate").unwrap();
//! let mut session = Session::new(target, Difficulty::Normal);
//!
//! for letter in "slate".chars() {
//!     session.push_letter(letter);
//! }
//! let feedback = session.submit().unwrap();
//!
//! assert!(feedback.is_win());
//! assert_eq!(session.status(), Status::Won);
//! ```

// Core domain types
pub mod core;

// Game session state
pub mod session;

// Target word sourcing
pub mod words;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
