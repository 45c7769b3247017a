use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::{App, Phase};
use crate::tui::component::Component;
use crate::tui::components::{CountdownView, DurationInput};

/// Outer width of the minute entry box, borders included.
const INPUT_WIDTH: u16 = 24;

const fn alert_style() -> Style {
    Style::new().fg(Color::LightRed)
}

pub fn draw_ui(frame: &mut Frame, app: &App, input: &mut DurationInput) {
    // Everything draws inside a small page margin.
    let area = frame.area().inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    match app.phase {
        Phase::AwaitingInput => draw_setup(frame, area, app, input),
        Phase::Running => frame.render_widget(CountdownView { app }, area),
    }
}

fn draw_setup(frame: &mut Frame, area: Rect, app: &App, input: &mut DurationInput) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(1), // prompt
        Length(1),
        Length(3), // entry box, bordered
        Length(1),
        Length(1), // validation error
        Length(1),
        Length(1), // footer
        Min(0),
    ]);
    let [prompt_area, _, input_area, _, error_area, _, footer_area, _] = layout.areas(area);

    frame.render_widget(Line::from("Enter timer duration in minutes:"), prompt_area);

    let input_area = Rect {
        width: INPUT_WIDTH.min(input_area.width),
        ..input_area
    };
    input.render(frame, input_area);

    if let Some(error) = &app.input_error {
        frame.render_widget(Line::styled(error.as_str(), alert_style()), error_area);
    }

    frame.render_widget(
        Line::from("Press Enter to start, Esc to quit"),
        footer_area,
    );
}
