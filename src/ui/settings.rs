//! Settings dialog over the main screen.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{Notice, NoticeKind};
use crate::credentials::{CredentialSnapshot, WorkflowVersion};
use crate::settings::{DraftField, SettingsSurface, ValidationError};
use crate::ui::components::{
    render_dialog_frame, render_input_field, render_status_indicator, DialogFrameConfig,
    InputFieldConfig, StatusIndicatorType, INPUT_FIELD_HEIGHT,
};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

/// Intro, blank, three fields, active version, notice, keybinds.
pub const SETTINGS_CONTENT_HEIGHT: u16 = 2 + 3 * INPUT_FIELD_HEIGHT + 3;

const VERSION_FALLBACK: &str = "Not a positive number; saves as latest";

pub fn render_settings(
    frame: &mut Frame,
    area: Rect,
    surface: &SettingsSurface,
    snapshot: &CredentialSnapshot,
    notice: Option<&Notice>,
) {
    let ctx = LayoutContext::new(area.width, area.height);
    let config = DialogFrameConfig::new("Settings", SETTINGS_CONTENT_HEIGHT)
        .min_width(64)
        .max_width(76);
    let inner = render_dialog_frame(frame, area, &ctx, &config);

    let mut y = inner.y;
    let bottom = inner.bottom();
    let mut next_row = |height: u16| -> Option<Rect> {
        if y + height > bottom {
            return None;
        }
        let rect = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height,
        };
        y += height;
        Some(rect)
    };

    if let Some(row) = next_row(2) {
        let intro = Line::from(Span::styled(
            "  Connect chatdeck to your hosted workflow.",
            Style::default().fg(COLOR_DIM),
        ));
        frame.render_widget(Paragraph::new(intro), row);
    }

    for field in DraftField::ALL {
        let Some(row) = next_row(INPUT_FIELD_HEIGHT) else {
            break;
        };
        let error = field_error(surface, field);
        render_input_field(frame, row, &field_config(surface, field, error.as_deref()));
    }

    if let Some(row) = next_row(1) {
        let active = Line::from(vec![
            Span::styled("  Active version: ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                SettingsSurface::active_version_label(snapshot),
                Style::default().fg(COLOR_ACCENT),
            ),
        ]);
        frame.render_widget(Paragraph::new(active), row);
    }

    if let Some(row) = next_row(1) {
        if let Some(notice) = notice {
            let indicator = match notice.kind {
                NoticeKind::Info => StatusIndicatorType::success(notice.text.clone()),
                NoticeKind::Error => StatusIndicatorType::error(notice.text.clone()),
            };
            let mut line = render_status_indicator(&indicator);
            line.spans.insert(0, Span::raw("  "));
            frame.render_widget(Paragraph::new(line), row);
        }
    }

    if let Some(row) = next_row(1) {
        frame.render_widget(Paragraph::new(keybind_line(surface, snapshot)), row);
    }
}

/// Inline error for a filled-in field that would not save as typed.
fn field_error(surface: &SettingsSurface, field: DraftField) -> Option<String> {
    let draft = surface.draft();
    let value = draft.field(field);
    if value.trim().is_empty() {
        return None;
    }
    match field {
        DraftField::ApiKey if !draft.field_is_valid(field) => {
            Some(ValidationError::MalformedApiKey.to_string())
        }
        DraftField::WorkflowId if !draft.field_is_valid(field) => {
            Some(ValidationError::MalformedWorkflowId.to_string())
        }
        DraftField::WorkflowVersion if WorkflowVersion::parse(value).is_none() => {
            Some(VERSION_FALLBACK.to_string())
        }
        _ => None,
    }
}

fn field_config<'a>(
    surface: &'a SettingsSurface,
    field: DraftField,
    error: Option<&'a str>,
) -> InputFieldConfig<'a> {
    let draft = surface.draft();
    let value = draft.field(field);
    let valid = match field {
        DraftField::WorkflowVersion => !value.trim().is_empty() && error.is_none(),
        _ => draft.field_is_valid(field),
    };

    InputFieldConfig::new(field.label(), value)
        .focused(surface.focus() == field)
        .secret(field == DraftField::ApiKey && !surface.shows_secret())
        .valid(valid)
        .error(error)
        .hint(field.hint())
        .placeholder(field.placeholder())
}

fn keybind_line(surface: &SettingsSurface, snapshot: &CredentialSnapshot) -> Line<'static> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(COLOR_HEADER));
    let label = |l: &'static str| Span::styled(l, Style::default().fg(COLOR_DIM));

    let mut spans = vec![Span::raw("  ")];
    if surface.can_save() {
        spans.extend([key("Enter"), label(" save  ")]);
    }
    if surface.can_dismiss(snapshot) {
        spans.extend([key("Esc"), label(" cancel  ")]);
    }
    spans.extend([key("Tab"), label(" next  ")]);
    let reveal = if surface.shows_secret() {
        " hide  "
    } else {
        " show  "
    };
    spans.extend([key("^R"), label(reveal)]);
    if surface.can_clear() {
        spans.extend([key("^L"), label(" clear  ")]);
    }
    spans.extend([key("^Q"), label(" quit")]);
    Line::from(spans)
}
