//! Placeholder shown until the credential store is hydrated.
//!
//! Nothing derived from credentials is drawn here.

use ratatui::{
    layout::{Alignment, Rect},
    widgets::Paragraph,
    Frame,
};

use super::components::{render_status_indicator, StatusIndicatorType};

pub fn render_loading(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let line = render_status_indicator(&StatusIndicatorType::spinner(
        "Loading settings...",
        spinner_frame,
    ));
    let y = area.y + area.height / 2;
    let row = Rect {
        x: area.x,
        y: y.min(area.bottom().saturating_sub(1)),
        width: area.width,
        height: 1.min(area.height),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}
