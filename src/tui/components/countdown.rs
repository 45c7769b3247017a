//! # Countdown Component
//!
//! Renders the running screen: the remaining time, a progress bar with its
//! percentage, and the elapsed/total summary.
//!
//! ```text
//! Time remaining: 01:27:30
//!
//! █░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░                                2.8%
//!
//! Elapsed: 02:30 / Total: 01:30:00
//! Seconds: 150 / 5400
//!
//! Press Esc to quit
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::core::format::format_duration;
use crate::core::state::App;

/// Progress bar width in cells. The percentage after the bar is padded so
/// the full line is always exactly twice this wide.
const BAR_WIDTH: usize = 40;

// ─── Styles ──────────────────────────────────────────────────────────
// Yellow = live status (remaining time, percentage), Green = completion.

const fn status_style() -> Style {
    Style::new()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD)
}
const fn success_style() -> Style {
    Style::new()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD)
}
const fn bar_filled_style() -> Style {
    Style::new().fg(Color::Green)
}
const fn bar_empty_style() -> Style {
    Style::new().fg(Color::DarkGray)
}

/// The running-phase view, borrowing the countdown state.
pub struct CountdownView<'a> {
    pub app: &'a App,
}

impl<'a> CountdownView<'a> {
    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.push(Line::from(vec![
            Span::raw("Time remaining: "),
            Span::styled(format_duration(self.app.remaining), status_style()),
        ]));
        lines.push(Line::default());

        lines.push(progress_line(self.app.progress()));
        lines.push(Line::default());

        if self.app.completed {
            lines.push(Line::from(Span::styled("Done!", success_style())));
            lines.push(Line::default());
        }

        lines.push(Line::from(format!(
            "Elapsed: {} / Total: {}",
            format_duration(self.app.elapsed()),
            format_duration(self.app.total),
        )));
        lines.push(Line::from(format!(
            "Seconds: {:.0} / {:.0}",
            self.app.elapsed().as_secs_f64(),
            self.app.total.as_secs_f64(),
        )));
        lines.push(Line::default());

        lines.push(Line::from("Press Esc to quit"));

        lines
    }
}

impl<'a> Widget for CountdownView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        Paragraph::new(self.lines()).render(area, buf);
    }
}

/// The bar plus its percentage, padded so the percentage ends at column
/// `2 * BAR_WIDTH` however wide it prints.
fn progress_line(fraction: f64) -> Line<'static> {
    let filled = ((fraction * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let percentage = format!("{:.1}%", fraction * 100.0);
    let padding = " ".repeat(BAR_WIDTH.saturating_sub(percentage.len()));

    Line::from(vec![
        Span::styled("█".repeat(filled), bar_filled_style()),
        Span::styled("░".repeat(BAR_WIDTH - filled), bar_empty_style()),
        Span::raw(padding),
        Span::styled(percentage, status_style()),
    ])
}
