//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal session and the tick
//! clock, renders the UI, and translates keyboard events into
//! `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop redraws only when something changed: an input event
//! arrived, a tick fired, or the terminal was resized. Between events it
//! sleeps inside `poll_event_timeout`, waking just in time for the next
//! tick deadline.
//!
//! ## Clock
//!
//! The once-per-second tick is a deadline owned by this loop, not a
//! thread. `update()` answers every `Tick` with `Effect::ScheduleTick`
//! and the loop re-arms the deadline, so the clock keeps itself alive
//! for the whole session.

mod component;
mod components;
mod event;
mod ui;

use std::io;
use std::time::Instant;

use log::{debug, info};
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, TICK_INTERVAL, update};
use crate::core::state::{App, Phase};
use crate::tui::component::EventHandler;
use crate::tui::components::{DurationInput, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

pub fn run() -> io::Result<()> {
    let terminal = ratatui::try_init()?;
    info!("Terminal session started");

    let result = event_loop(terminal);

    ratatui::restore();
    info!("Terminal session closed");
    result
}

fn event_loop(mut terminal: DefaultTerminal) -> io::Result<()> {
    let mut app = App::new();
    let mut input = DurationInput::new();

    // The clock is armed before the first entry and stays armed for the
    // whole session; ticks outside a running countdown are no-ops.
    let mut next_tick = Instant::now() + TICK_INTERVAL;
    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut input))?;
            needs_redraw = false;
        }

        // Sleep until the tick deadline unless input arrives first
        let timeout = next_tick.saturating_duration_since(Instant::now());
        let mut should_quit = false;

        // Process first event + drain all pending events before the next draw
        let mut pending = poll_event_timeout(timeout)?;
        if pending.is_some() {
            needs_redraw = true;
        }
        while let Some(tui_event) = pending {
            match route_event(&mut app, &mut input, &tui_event) {
                Effect::Quit => {
                    // A cancel stops the session; queued events no longer matter
                    should_quit = true;
                    break;
                }
                Effect::ScheduleTick => next_tick = Instant::now() + TICK_INTERVAL,
                Effect::None => {}
            }
            pending = poll_event_immediate()?;
        }

        if should_quit {
            break;
        }

        if Instant::now() >= next_tick {
            needs_redraw = true;
            match update(&mut app, Action::Tick) {
                Effect::Quit => break,
                Effect::ScheduleTick => next_tick = Instant::now() + TICK_INTERVAL,
                Effect::None => {}
            }
        }
    }

    Ok(())
}

/// Route one terminal event into core updates.
fn route_event(app: &mut App, input: &mut DurationInput, tui_event: &TuiEvent) -> Effect {
    // Resize just needs the redraw that is already flagged
    if matches!(tui_event, TuiEvent::Resize) {
        return Effect::None;
    }

    // Cancel applies on both screens
    if matches!(tui_event, TuiEvent::Cancel) {
        return update(app, Action::Quit);
    }

    // Editing keys only reach the entry field on the setup screen
    if app.phase == Phase::AwaitingInput
        && let Some(input_event) = input.handle_event(tui_event)
    {
        match input_event {
            InputEvent::Submit(text) => {
                debug!("Entry submitted: {:?}", text);
                return update(app, Action::Submit(text));
            }
            InputEvent::ContentChanged => {}
        }
    }

    Effect::None
}
