//! Terminal countdown timer: type a minute count, watch it tick to zero.
//!
//! The crate splits into a pure [`core`] (state machine, duration
//! formatting, config) and a [`tui`] adapter that owns the terminal and
//! the tick clock.

pub mod core;
pub mod tui;
