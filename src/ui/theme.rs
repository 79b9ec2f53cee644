//! Color theme constants for the chatdeck UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Active session, valid fields
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Success messages
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Error messages and invalid fields
pub const COLOR_ERROR: Color = Color::Red;

/// Loading spinner
pub const COLOR_PENDING: Color = Color::Yellow;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for the settings dialog
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
