//! Input Field Component
//!
//! A labelled text input with focus handling, secret masking and a status
//! line that shows either a hint or an inline error.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthChar;

use crate::ui::theme::{
    COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG,
};

/// Rows used by every field: label, boxed input (3), status line.
pub const INPUT_FIELD_HEIGHT: u16 = 5;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Whether to mask the value
    pub is_secret: bool,
    /// Whether the value passed validation; shown as a check mark
    pub valid: bool,
    /// Error shown in the status line instead of the hint
    pub error: Option<&'a str>,
    /// Dim text under the input
    pub hint: Option<&'a str>,
    /// Text shown when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_secret: false,
            valid: false,
            error: None,
            hint: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn secret(mut self, is_secret: bool) -> Self {
        self.is_secret = is_secret;
        self
    }

    pub fn valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Text drawn inside the box, without cursor.
    pub fn display_value(&self) -> String {
        match self.placeholder {
            Some(placeholder) if self.value.is_empty() => placeholder.to_string(),
            _ if self.is_secret => "\u{2022}".repeat(self.value.chars().count()),
            _ => self.value.to_string(),
        }
    }
}

/// Render an input field; returns the height consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    if area.width <= 4 || area.height < INPUT_FIELD_HEIGHT {
        return INPUT_FIELD_HEIGHT;
    }
    let inner_width = area.width.saturating_sub(4);
    let row = |offset: u16, height: u16| Rect {
        x: area.x + 2,
        y: area.y + offset,
        width: inner_width,
        height,
    };

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let mut label = vec![Span::styled(config.label, label_style)];
    if config.valid {
        label.push(Span::styled(" \u{2713}", Style::default().fg(COLOR_ACTIVE)));
    }
    frame.render_widget(Paragraph::new(Line::from(label)), row(0, 1));

    let border_color = if config.error.is_some() {
        COLOR_ERROR
    } else if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let text_style = if config.value.is_empty() || !config.focused {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(Color::White)
    };
    // Borders take two columns, the cursor one more.
    let text_width = inner_width.saturating_sub(3) as usize;
    let visible = tail_within_width(&config.display_value(), text_width);
    let mut content = vec![Span::styled(visible, text_style)];
    if config.focused {
        content.push(Span::styled("\u{2588}", Style::default().fg(Color::White))); // Block cursor
    }
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), row(1, 3));

    let status = match (config.error, config.hint) {
        (Some(error), _) => Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(error, Style::default().fg(COLOR_ERROR)),
        ]),
        (None, Some(hint)) => Line::from(Span::styled(hint, Style::default().fg(COLOR_DIM))),
        (None, None) => Line::default(),
    };
    frame.render_widget(Paragraph::new(status), row(4, 1));

    INPUT_FIELD_HEIGHT
}

/// Longest suffix of `text` that fits in `max_width` terminal columns.
pub fn tail_within_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut start = text.len();
    for (index, c) in text.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = index;
    }
    text[start..].to_string()
}
