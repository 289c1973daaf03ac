//! Per-game countdown clock
//!
//! The countdown starts at 300 seconds and is decremented by an external
//! once-per-second tick. Halting is sticky: once the game reaches a terminal
//! state the clock stops accepting ticks until the next reset.

use std::fmt;

/// Seconds on the clock at the start of every game
pub const GAME_SECONDS: u32 = 300;

/// A cancellable one-tick-per-second countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    #[must_use]
    pub const fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            running: true,
        }
    }

    /// Seconds left on the clock
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the clock has reached zero
    #[inline]
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Consume one second
    ///
    /// Returns true exactly when this tick brings the clock to zero.
    /// Ticks on a halted or already-expired clock do nothing.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.remaining == 0 {
            return false;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            return true;
        }
        false
    }

    /// Stop the clock; subsequent ticks are no-ops
    pub fn halt(&mut self) {
        self.running = false;
    }

    /// Restore a full clock for a new game
    pub fn reset(&mut self) {
        *self = Self::new(GAME_SECONDS);
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(GAME_SECONDS)
    }
}

impl fmt::Display for Countdown {
    /// Renders as minutes:seconds with zero-padded seconds, e.g. "5:00", "0:09"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.remaining / 60;
        let seconds = self.remaining % 60;
        write!(f, "{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_starts_full() {
        let clock = Countdown::default();
        assert_eq!(clock.remaining(), GAME_SECONDS);
        assert!(!clock.is_expired());
    }

    #[test]
    fn tick_decrements_once() {
        let mut clock = Countdown::default();
        assert!(!clock.tick());
        assert_eq!(clock.remaining(), GAME_SECONDS - 1);
    }

    #[test]
    fn tick_reports_expiry_exactly_once() {
        let mut clock = Countdown::new(2);
        assert!(!clock.tick());
        assert!(clock.tick());
        assert!(clock.is_expired());

        // Already expired: no further expiry signals
        assert!(!clock.tick());
        assert_eq!(clock.remaining(), 0);
    }

    #[test]
    fn halted_clock_ignores_ticks() {
        let mut clock = Countdown::new(10);
        clock.halt();

        assert!(!clock.tick());
        assert_eq!(clock.remaining(), 10);
    }

    #[test]
    fn reset_restores_full_running_clock() {
        let mut clock = Countdown::new(1);
        clock.tick();
        clock.reset();

        assert_eq!(clock.remaining(), GAME_SECONDS);
        assert!(!clock.tick() && clock.remaining() == GAME_SECONDS - 1);
    }

    #[test]
    fn display_formats_minutes_seconds() {
        assert_eq!(Countdown::new(300).to_string(), "5:00");
        assert_eq!(Countdown::new(125).to_string(), "2:05");
        assert_eq!(Countdown::new(9).to_string(), "0:09");
        assert_eq!(Countdown::new(0).to_string(), "0:00");
    }
}
