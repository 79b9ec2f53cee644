//! Default keybindings for the application.
//!
//! This module defines the default key bindings that map key combinations
//! to commands.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::InputContext;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (always active)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per input context
    pub context: HashMap<InputContext, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            context: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_hidden_bindings();
        config.setup_open_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('q')), Command::Quit);
    }

    fn setup_hidden_bindings(&mut self) {
        let bindings = self.context.entry(InputContext::SettingsHidden).or_default();
        bindings.insert(KeyCombo::plain(KeyCode::Char('s')), Command::OpenSettings);
        bindings.insert(KeyCombo::plain(KeyCode::F(2)), Command::OpenSettings);
        bindings.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
    }

    fn setup_open_bindings(&mut self) {
        let bindings = self.context.entry(InputContext::SettingsOpen).or_default();
        bindings.insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNext);
        bindings.insert(KeyCombo::plain(KeyCode::Down), Command::FocusNext);
        // Terminals report Shift+Tab as BackTab, with or without SHIFT set.
        bindings.insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrev);
        bindings.insert(KeyCombo::shift(KeyCode::BackTab), Command::FocusPrev);
        bindings.insert(KeyCombo::plain(KeyCode::Up), Command::FocusPrev);
        bindings.insert(KeyCombo::plain(KeyCode::Enter), Command::Save);
        bindings.insert(KeyCombo::plain(KeyCode::Esc), Command::Cancel);
        bindings.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('r')), Command::ToggleSecret);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('l')), Command::ClearCredentials);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::ClearField);
    }

    /// Look up a global binding.
    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    /// Look up a binding for the given context.
    pub fn get_context(&self, context: InputContext, combo: &KeyCombo) -> Option<&Command> {
        self.context.get(&context).and_then(|m| m.get(combo))
    }
}
