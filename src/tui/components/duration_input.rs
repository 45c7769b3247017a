//! # DurationInput Component
//!
//! The minute-entry field on the setup screen.
//!
//! ## Responsibilities
//!
//! - Capture the minute count being typed
//! - Handle editing (backspace, delete, cursor movement)
//! - Handle submission (Enter)
//! - Show a placeholder while empty
//!
//! ## State Management
//!
//! The buffer is presentation state; the countdown core only ever sees the
//! submitted text. Validation lives in `core::action`, so a rejected entry
//! stays in the buffer unchanged and can be corrected in place.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Longest accepted entry, in characters. Five digits of minutes is over
/// two months of countdown.
const CHAR_LIMIT: usize = 5;

/// Shown while the buffer is empty.
const PLACEHOLDER: &str = "Enter minutes...";

const fn text_style() -> Style {
    Style::new().fg(Color::White)
}
const fn placeholder_style() -> Style {
    Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM)
}

/// High-level events emitted by the DurationInput
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User pressed Enter. Carries a copy of the buffer; the field keeps
    /// its contents so a rejected entry remains editable.
    Submit(String),
    /// Text content changed (optional, if parent needs to know)
    ContentChanged,
}

/// Single-line text input for the minute count.
pub struct DurationInput {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Cursor position as a byte offset into `buffer`
    cursor: usize,
}

impl DurationInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }
}

impl Default for DurationInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DurationInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_type(BorderType::Rounded);

        let input = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .style(placeholder_style())
                .block(block)
        } else {
            Paragraph::new(self.buffer.as_str())
                .style(text_style())
                .block(block)
        };
        frame.render_widget(input, area);

        // The cursor sits one cell inside the border, after the text
        // preceding it.
        let cursor_cols = self.buffer[..self.cursor].chars().count() as u16;
        frame.set_cursor_position((area.x + 1 + cursor_cols, area.y + 1));
    }
}

impl EventHandler for DurationInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                if self.buffer.chars().count() >= CHAR_LIMIT {
                    return None;
                }
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

/// Byte offset of the character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
