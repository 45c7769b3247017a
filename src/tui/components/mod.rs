//! # TUI Components
//!
//! UI components for the terminal interface. Each file is self-contained:
//! state types, event types, rendering, and tests live together.
//!
//! Two patterns show up here:
//!
//! - **Stateful, event-driven**: [`DurationInput`] owns its text buffer and
//!   cursor, and emits [`InputEvent`]s for the event loop to act on.
//! - **Stateless, props-based**: [`CountdownView`] borrows the app state and
//!   renders it, nothing more.

pub mod countdown;
pub mod duration_input;

pub use countdown::CountdownView;
pub use duration_input::{DurationInput, InputEvent};
