//! Status Indicator Component
//!
//! Renders spinner, success, and error status lines.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ERROR, COLOR_PENDING, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Success indicator with message
    Success { message: String },
    /// Error indicator with message
    Error { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a status indicator as a single line
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Line<'static> {
    let (icon, message, color) = match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            (get_spinner_char(*frame), message.clone(), COLOR_PENDING)
        }
        StatusIndicatorType::Success { message } => ('\u{25CF}', message.clone(), COLOR_SUCCESS),
        StatusIndicatorType::Error { message } => ('\u{2717}', message.clone(), COLOR_ERROR),
    };

    Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(color)),
        Span::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}
