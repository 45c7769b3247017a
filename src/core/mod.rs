//! # Core Countdown Logic
//!
//! This module contains tickdown's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all countdown state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`format`]: Clock-style duration formatting
//! - [`config`]: Settings file and env overrides

pub mod action;
pub mod config;
pub mod format;
pub mod state;
