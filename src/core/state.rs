//! # Timer State
//!
//! Core countdown state. This module contains domain logic only -
//! no TUI-specific types. Presentation state (the text being typed,
//! the cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── phase: Phase                 // AwaitingInput | Running
//! ├── total: Duration              // full countdown length, fixed at start
//! ├── remaining: Duration          // counts down to zero
//! ├── completed: bool              // latched when remaining hits zero
//! └── input_error: Option<String>  // validation message for the entry field
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::time::Duration;

/// Which screen the timer is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the user to type a minute count.
    #[default]
    AwaitingInput,
    /// Counting down.
    Running,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub phase: Phase,
    /// Full countdown length. Zero until an entry is accepted, fixed afterwards.
    pub total: Duration,
    /// Time left. Never exceeds `total`; never increases while running.
    pub remaining: Duration,
    /// Latched once `remaining` reaches zero.
    pub completed: bool,
    /// Validation message shown under the entry field.
    pub input_error: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingInput,
            total: Duration::ZERO,
            remaining: Duration::ZERO,
            completed: false,
            input_error: None,
        }
    }

    /// Time elapsed since the countdown started.
    pub fn elapsed(&self) -> Duration {
        self.total.saturating_sub(self.remaining)
    }

    /// Fraction of the countdown that has elapsed, in `0.0..=1.0`.
    /// Zero before an entry has been accepted.
    pub fn progress(&self) -> f64 {
        if self.total.is_zero() {
            return 0.0;
        }
        self.elapsed().as_secs_f64() / self.total.as_secs_f64()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert_eq!(app.phase, Phase::AwaitingInput);
        assert_eq!(app.total, Duration::ZERO);
        assert_eq!(app.remaining, Duration::ZERO);
        assert!(!app.completed);
        assert!(app.input_error.is_none());
    }

    #[test]
    fn test_progress_is_zero_before_start() {
        let app = App::new();
        assert_eq!(app.progress(), 0.0);
    }

    #[test]
    fn test_progress_tracks_elapsed_fraction() {
        let mut app = App::new();
        app.phase = Phase::Running;
        app.total = Duration::from_secs(100);
        app.remaining = Duration::from_secs(75);
        assert_eq!(app.elapsed(), Duration::from_secs(25));
        assert_eq!(app.progress(), 0.25);

        app.remaining = Duration::ZERO;
        assert_eq!(app.progress(), 1.0);
    }
}
