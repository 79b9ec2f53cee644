//! Main screen: session status behind the settings overlay.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::session::ChatSession;
use crate::ui::theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// Header, body and keybind footer.
pub fn render_main(frame: &mut Frame, area: Rect, session: Option<&ChatSession>, hints: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Session status
            Constraint::Length(1), // Keybind hints
        ])
        .split(area);
    let (header, body, footer) = (chunks[0], chunks[1], chunks[2]);

    frame.render_widget(Paragraph::new(header_line(session)), header);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER));
    let text = match session {
        Some(session) => vec![
            Line::from(format!(
                "Chat session #{} connected to {}",
                session.generation(),
                session.workflow_id()
            )),
            Line::from(Span::styled(
                "The conversation is hosted by the workflow service.",
                Style::default().fg(COLOR_DIM),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "Chat is unavailable until an API key and workflow ID are saved.",
            Style::default().fg(COLOR_DIM),
        ))],
    };
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(block),
        body,
    );

    if hints {
        let footer_line = Line::from(vec![
            Span::styled("[s]", Style::default().fg(COLOR_HEADER)),
            Span::styled(" Settings  ", Style::default().fg(COLOR_DIM)),
            Span::styled("[q]", Style::default().fg(COLOR_HEADER)),
            Span::styled(" Quit", Style::default().fg(COLOR_DIM)),
        ]);
        frame.render_widget(Paragraph::new(footer_line), footer);
    }
}

fn header_line(session: Option<&ChatSession>) -> Line<'static> {
    let title = Span::styled(
        "chatdeck ",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    );
    match session {
        Some(session) => {
            let version = session
                .workflow_version()
                .map(|v| format!("v{}", v))
                .unwrap_or_else(|| "latest".to_string());
            Line::from(vec![
                title,
                Span::styled("\u{25CF} ", Style::default().fg(COLOR_ACTIVE)),
                Span::raw(format!("{} ({})", session.workflow_id(), version)),
            ])
        }
        None => Line::from(vec![
            title,
            Span::styled("\u{25CB} not configured", Style::default().fg(COLOR_DIM)),
        ]),
    }
}
