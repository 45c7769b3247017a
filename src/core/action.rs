//! # Actions
//!
//! Everything that can happen in tickdown becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! A second passes? That's `Action::Tick`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` for the event loop to carry out.
//! No I/O here. The loop owns the clock and the terminal.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state.
//! The tick is an action like any other, so a whole countdown can be
//! replayed in a test without waiting a single real second.

use std::time::Duration;

use log::{debug, info};

use crate::core::format::format_duration;
use crate::core::state::{App, Phase};

/// How often the countdown advances.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Shown under the entry field when a submission fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid positive number";

/// Everything that can happen in the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// User confirmed the entry field with its current contents.
    Submit(String),
    /// One tick interval elapsed.
    Tick,
    /// User asked to leave (Esc or Ctrl+C).
    Quit,
}

/// Follow-up work the event loop performs after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Stop the event loop.
    Quit,
    /// Arm the next tick, one interval from now.
    ScheduleTick,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            // Entries only mean something on the entry screen.
            if app.phase != Phase::AwaitingInput {
                return Effect::None;
            }
            match parse_minutes(&text) {
                Some(minutes) => {
                    let total = Duration::from_secs(minutes.saturating_mul(60));
                    app.total = total;
                    app.remaining = total;
                    app.input_error = None;
                    app.phase = Phase::Running;
                    info!("Countdown started: {}", format_duration(total));
                }
                None => {
                    debug!("Rejected entry: {:?}", text);
                    app.input_error = Some(INVALID_INPUT_MESSAGE.to_string());
                }
            }
            Effect::None
        }
        Action::Tick => {
            if app.phase == Phase::Running && !app.remaining.is_zero() {
                app.remaining = app.remaining.saturating_sub(TICK_INTERVAL);
                if app.remaining.is_zero() {
                    app.completed = true;
                    info!("Countdown finished");
                }
            }
            // The clock stays armed for the whole session; ticks outside a
            // running countdown do nothing except schedule the next one.
            Effect::ScheduleTick
        }
        Action::Quit => Effect::Quit,
    }
}

/// Parse a minute entry: trimmed, integral, strictly positive.
fn parse_minutes(text: &str) -> Option<u64> {
    text.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .map(|n| n as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_valid_minutes_starts_countdown() {
        let mut app = App::new();
        let effect = update(&mut app, Action::Submit("5".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.phase, Phase::Running);
        assert_eq!(app.total, Duration::from_secs(300));
        assert_eq!(app.remaining, Duration::from_secs(300));
        assert!(app.input_error.is_none());
        assert!(!app.completed);
    }

    #[test]
    fn test_submit_trims_whitespace() {
        let mut app = App::new();
        update(&mut app, Action::Submit("  3 ".to_string()));
        assert_eq!(app.phase, Phase::Running);
        assert_eq!(app.total, Duration::from_secs(180));
    }

    #[test]
    fn test_submit_invalid_entries_are_rejected() {
        for entry in ["0", "-5", "abc", "", "1.5", "  "] {
            let mut app = App::new();
            let effect = update(&mut app, Action::Submit(entry.to_string()));
            assert_eq!(effect, Effect::None);
            assert_eq!(app.phase, Phase::AwaitingInput, "entry {:?}", entry);
            assert_eq!(app.input_error.as_deref(), Some(INVALID_INPUT_MESSAGE));
            assert_eq!(app.total, Duration::ZERO);
            assert_eq!(app.remaining, Duration::ZERO);
        }
    }

    #[test]
    fn test_valid_submit_clears_previous_error() {
        let mut app = App::new();
        update(&mut app, Action::Submit("abc".to_string()));
        assert!(app.input_error.is_some());

        update(&mut app, Action::Submit("2".to_string()));
        assert!(app.input_error.is_none());
        assert_eq!(app.phase, Phase::Running);
    }

    #[test]
    fn test_submit_ignored_while_running() {
        let mut app = App::new();
        update(&mut app, Action::Submit("2".to_string()));
        let before = app.clone();

        let effect = update(&mut app, Action::Submit("7".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app, before);
    }

    #[test]
    fn test_tick_before_start_changes_nothing_but_rearms() {
        let mut app = App::new();
        let effect = update(&mut app, Action::Tick);
        assert_eq!(effect, Effect::ScheduleTick);
        assert_eq!(app, App::new());
    }

    #[test]
    fn test_tick_counts_down_one_second() {
        let mut app = App::new();
        update(&mut app, Action::Submit("90".to_string()));

        let effect = update(&mut app, Action::Tick);
        assert_eq!(effect, Effect::ScheduleTick);
        assert_eq!(app.remaining, Duration::from_secs(5399));
        assert_eq!(format_duration(app.remaining), "01:29:59");
    }

    #[test]
    fn test_countdown_runs_to_completion() {
        let mut app = App::new();
        update(&mut app, Action::Submit("1".to_string()));
        for _ in 0..60 {
            update(&mut app, Action::Tick);
        }
        assert_eq!(app.remaining, Duration::ZERO);
        assert!(app.completed);

        // Further ticks keep the clock armed without changing anything.
        let effect = update(&mut app, Action::Tick);
        assert_eq!(effect, Effect::ScheduleTick);
        assert_eq!(app.remaining, Duration::ZERO);
        assert!(app.completed);
    }

    #[test]
    fn test_completion_latches_exactly_at_zero() {
        let mut app = App::new();
        update(&mut app, Action::Submit("1".to_string()));
        for _ in 0..59 {
            update(&mut app, Action::Tick);
        }
        assert!(!app.completed);
        assert_eq!(app.remaining, Duration::from_secs(1));

        update(&mut app, Action::Tick);
        assert!(app.completed);
    }

    #[test]
    fn test_remaining_never_increases() {
        let mut app = App::new();
        update(&mut app, Action::Submit("2".to_string()));
        let mut last = app.remaining;
        for _ in 0..150 {
            update(&mut app, Action::Tick);
            assert!(app.remaining <= last);
            last = app.remaining;
        }
        assert_eq!(app.remaining, Duration::ZERO);
    }

    #[test]
    fn test_quit_leaves_state_untouched() {
        let mut app = App::new();
        update(&mut app, Action::Submit("2".to_string()));
        let before = app.clone();

        let effect = update(&mut app, Action::Quit);
        assert_eq!(effect, Effect::Quit);
        assert_eq!(app, before);
    }
}
