//! UI rendering for chatdeck
//!
//! - Loading placeholder while the credential store hydrates
//! - Main screen with the chat session status
//! - Settings dialog overlay while settings are open
//!
//! ## Responsive Layout System
//!
//! Dialog sizing goes through `LayoutContext`, which wraps the terminal
//! dimensions and answers `is_narrow()` / `is_extra_small()` style queries.

mod chat;
pub mod components;
mod layout;
mod loading;
mod settings;
mod theme;

pub use layout::{breakpoints, LayoutContext};
pub use settings::SETTINGS_CONTENT_HEIGHT;
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

use ratatui::Frame;

use crate::app::App;
use crate::traits::KeyValueStorage;
use chat::render_main;
use loading::render_loading;
use settings::render_settings;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen.
///
/// Until the store is hydrated only the loading placeholder is drawn.
pub fn render<S: KeyValueStorage>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let (Some(surface), Some(snapshot)) = (app.settings(), app.store().snapshot()) else {
        render_loading(frame, area, app.spinner_frame());
        return;
    };

    render_main(frame, area, app.session().session(), !surface.is_open());

    if surface.is_open() {
        render_settings(frame, area, surface, snapshot, app.notice());
    }
}
