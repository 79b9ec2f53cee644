//! Application state and logic for the TUI.
//!
//! [`App`] owns the credential store and everything derived from it: the
//! settings surface (created once the store is hydrated) and the chat
//! session gate. It follows the store through the store's publish channel.

mod handlers;

use crossterm::event::KeyEvent;
use tokio::sync::watch;

use crate::credentials::{CredentialStore, Lifecycle, Published};
use crate::input::{CommandRegistry, InputContext};
use crate::session::{GateChange, SessionGate};
use crate::settings::{SettingsSurface, Visibility};
use crate::traits::KeyValueStorage;

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line message shown under the settings panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

pub struct App<S> {
    store: CredentialStore<S>,
    settings: Option<SettingsSurface>,
    session: SessionGate,
    registry: CommandRegistry,
    updates: watch::Receiver<Published>,
    notice: Option<Notice>,
    should_quit: bool,
    dirty: bool,
    ticks: usize,
}

impl<S: KeyValueStorage> App<S> {
    pub fn new(storage: S) -> Self {
        let store = CredentialStore::new(storage);
        let updates = store.subscribe();
        Self {
            store,
            settings: None,
            session: SessionGate::new(),
            registry: CommandRegistry::new(),
            updates,
            notice: None,
            should_quit: false,
            dirty: true,
            ticks: 0,
        }
    }

    pub fn store(&self) -> &CredentialStore<S> {
        &self.store
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        self.store.lifecycle()
    }

    /// `None` until the store is hydrated.
    pub fn settings(&self) -> Option<&SettingsSurface> {
        self.settings.as_ref()
    }

    pub fn session(&self) -> &SessionGate {
        &self.session
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether a redraw is pending.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Frame index for the loading spinner.
    pub fn spinner_frame(&self) -> usize {
        self.ticks
    }

    /// Which key map applies right now.
    pub fn input_context(&self) -> InputContext {
        match self.settings.as_ref().map(SettingsSurface::visibility) {
            None => InputContext::Loading,
            Some(Visibility::Hidden) => InputContext::SettingsHidden,
            Some(Visibility::Open) => InputContext::SettingsOpen,
        }
    }

    /// Periodic work: retry hydration until it succeeds, then follow the store.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        if !self.store.is_loaded() {
            if self.store.load() {
                tracing::debug!("Store hydrated after {} ticks", self.ticks);
            } else {
                // Spinner animation
                self.mark_dirty();
            }
        }
        self.sync_from_store();
    }

    /// Apply a pending publication, if any.
    pub fn sync_from_store(&mut self) {
        if !self.updates.has_changed().unwrap_or(false) {
            return;
        }
        let lifecycle = self.updates.borrow_and_update().lifecycle.clone();

        if let Some(snapshot) = lifecycle.snapshot() {
            match self.settings.as_mut() {
                Some(surface) => surface.observe(snapshot),
                None => self.settings = Some(SettingsSurface::new(snapshot)),
            }
        }

        match self.session.sync(&lifecycle) {
            GateChange::Unchanged => {}
            change => tracing::debug!("Session gate: {:?}", change),
        }
        self.mark_dirty();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(command) = self.registry.dispatch(key, self.input_context()) {
            self.execute_command(command);
        }
    }

    /// Bracketed paste goes into the focused field.
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(surface) = self.settings.as_mut() {
            if surface.is_open() {
                surface.insert_str(text);
                self.notice = None;
                self.mark_dirty();
            }
        }
    }

    pub fn handle_resize(&mut self) {
        self.mark_dirty();
    }
}
