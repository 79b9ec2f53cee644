//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum provides a unified way to represent user actions,
//! decoupling key bindings from their effects.

/// Represents all commands that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // =========================================================================
    // Global Commands (always active)
    // =========================================================================
    /// Quit the application (Ctrl+C, Ctrl+Q)
    Quit,

    // =========================================================================
    // Settings Hidden
    // =========================================================================
    /// Open the settings panel (s, F2)
    OpenSettings,

    // =========================================================================
    // Settings Open
    // =========================================================================
    /// Move focus to the next field (Tab, Down)
    FocusNext,
    /// Move focus to the previous field (Shift+Tab, Up)
    FocusPrev,
    /// Validate and save the draft (Enter)
    Save,
    /// Dismiss without saving (Esc)
    Cancel,
    /// Reveal or hide the API key (Ctrl+R)
    ToggleSecret,
    /// Clear draft and stored credentials (Ctrl+L)
    ClearCredentials,
    /// Empty the focused field (Ctrl+U)
    ClearField,

    // =========================================================================
    // Editing
    // =========================================================================
    /// Insert a character into the focused field
    InsertChar(char),
    /// Delete the last character of the focused field
    Backspace,

    /// Key consumed without effect
    Noop,
}

impl Command {
    /// Whether this command edits the draft.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_) | Command::Backspace | Command::ClearField
        )
    }
}
