//! Command registry for dispatching keyboard input to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Registry for dispatching key events to commands.
///
/// Priority order:
/// 1. Global bindings (Ctrl+C, Ctrl+Q)
/// 2. Context bindings (settings hidden or open)
/// 3. Character input (settings open, no Ctrl/Alt/Super)
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    /// The keybinding configuration
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` for key releases and unbound keys.
    pub fn dispatch(&self, key: KeyEvent, context: InputContext) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let combo = KeyCombo::new(key.code, key.modifiers);

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }
        if let Some(cmd) = self.config.get_context(context, &combo) {
            return Some(cmd.clone());
        }

        if context.accepts_text() {
            if let KeyCode::Char(c) = key.code {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
                {
                    return Some(Command::InsertChar(c));
                }
            }
            return Some(Command::Noop);
        }
        None
    }
}
