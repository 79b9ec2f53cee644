//! Command execution for the App.

use crate::credentials::WriteOutcome;
use crate::input::Command;
use crate::settings::CommitError;
use crate::traits::KeyValueStorage;

use super::{App, Notice};

const UNAVAILABLE_NOTICE: &str = "Storage is unavailable; nothing was saved";

impl<S: KeyValueStorage> App<S> {
    /// Execute a command produced by the registry.
    pub fn execute_command(&mut self, command: Command) {
        if command == Command::Noop {
            return;
        }
        if command == Command::Quit {
            tracing::debug!("Quit requested");
            self.quit();
            return;
        }
        if command.is_edit() {
            self.notice = None;
        }

        // Field-level borrows: the surface and the store are edited together.
        let Some(surface) = self.settings.as_mut() else {
            return;
        };
        let Some(snapshot) = self.store.snapshot() else {
            return;
        };

        match command {
            Command::OpenSettings => {
                if surface.open(snapshot) {
                    self.notice = None;
                }
            }
            Command::Cancel => {
                if !surface.cancel(snapshot) {
                    self.notice = Some(Notice::error(
                        "Enter a valid API key and workflow ID to continue",
                    ));
                }
            }
            Command::FocusNext => surface.focus_next(),
            Command::FocusPrev => surface.focus_prev(),
            Command::ToggleSecret => surface.toggle_secret(),
            Command::InsertChar(c) => surface.insert_char(c),
            Command::Backspace => surface.backspace(),
            Command::ClearField => surface.clear_field(),
            Command::Save => {
                if !surface.can_save() {
                    return;
                }
                self.notice = Some(match surface.commit(&mut self.store) {
                    Ok(WriteOutcome::Applied) => Notice::info("Settings saved"),
                    Ok(WriteOutcome::Deferred) => Notice::error(UNAVAILABLE_NOTICE),
                    Err(CommitError::NotOpen | CommitError::Invalid(_)) => return,
                    Err(e) => Notice::error(format!("Save failed: {}", e)),
                });
            }
            Command::ClearCredentials => {
                if !surface.can_clear() {
                    return;
                }
                self.notice = Some(match surface.clear(&mut self.store) {
                    Ok(WriteOutcome::Applied) => Notice::info("Stored credentials cleared"),
                    Ok(WriteOutcome::Deferred) => Notice::error(UNAVAILABLE_NOTICE),
                    Err(e) => Notice::error(format!("Clear failed: {}", e)),
                });
            }
            Command::Quit | Command::Noop => {}
        }

        self.sync_from_store();
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::adapters::InMemoryStorage;
    use crate::app::NoticeKind;
    use crate::credentials::{API_KEY_STORAGE, WORKFLOW_ID_STORAGE};
    use crate::input::InputContext;

    fn press(app: &mut App<InMemoryStorage>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App<InMemoryStorage>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App<InMemoryStorage>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn loaded(storage: InMemoryStorage) -> App<InMemoryStorage> {
        let mut app = App::new(storage);
        app.tick();
        app
    }

    #[test]
    fn test_first_run_save_flow() {
        let storage = InMemoryStorage::new();
        let mut app = loaded(storage.clone());

        type_str(&mut app, "sk-abc");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "wf_123");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "2");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_context(), InputContext::SettingsHidden);
        assert_eq!(app.notice(), Some(&Notice::info("Settings saved")));
        assert_eq!(storage.peek(API_KEY_STORAGE), Some("sk-abc".to_string()));
        assert!(app.session().is_active());
    }

    #[test]
    fn test_save_rejects_malformed_draft() {
        let mut app = loaded(InMemoryStorage::new());
        type_str(&mut app, "abc");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_context(), InputContext::SettingsOpen);
        assert!(app.notice().is_none());
        assert!(app.store().snapshot().unwrap().api_key.is_empty());
        assert_eq!(app.settings().unwrap().draft().api_key, "abc");
    }

    #[test]
    fn test_escape_locked_on_first_run() {
        let mut app = loaded(InMemoryStorage::new());
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_context(), InputContext::SettingsOpen);
        assert_eq!(app.notice().map(|n| n.kind), Some(NoticeKind::Error));
    }

    #[test]
    fn test_reopen_and_cancel() {
        let storage =
            InMemoryStorage::with_entries([(API_KEY_STORAGE, "sk-1"), (WORKFLOW_ID_STORAGE, "wf_1")]);
        let mut app = loaded(storage);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.input_context(), InputContext::SettingsOpen);
        type_str(&mut app, "zzz");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.input_context(), InputContext::SettingsHidden);
        assert_eq!(app.settings().unwrap().draft().api_key, "sk-1");
    }

    #[test]
    fn test_plain_q_types_while_open_and_quits_while_hidden() {
        let storage =
            InMemoryStorage::with_entries([(API_KEY_STORAGE, "sk-1"), (WORKFLOW_ID_STORAGE, "wf_1")]);
        let mut app = loaded(storage);

        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());
        assert_eq!(app.settings().unwrap().draft().api_key, "sk-1q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_q_quits_from_locked_panel() {
        let mut app = loaded(InMemoryStorage::new());
        ctrl(&mut app, 'q');
        assert!(app.should_quit());
    }

    #[test]
    fn test_clear_credentials_stops_session() {
        let storage =
            InMemoryStorage::with_entries([(API_KEY_STORAGE, "sk-1"), (WORKFLOW_ID_STORAGE, "wf_1")]);
        let mut app = loaded(storage.clone());
        assert!(app.session().is_active());

        press(&mut app, KeyCode::Char('s'));
        ctrl(&mut app, 'l');

        assert!(storage.is_empty());
        assert!(!app.session().is_active());
        assert_eq!(app.input_context(), InputContext::SettingsOpen);
        assert_eq!(app.notice(), Some(&Notice::info("Stored credentials cleared")));
    }

    #[test]
    fn test_save_while_unavailable_keeps_panel_open() {
        let storage = InMemoryStorage::new();
        let mut app = loaded(storage.clone());
        type_str(&mut app, "sk-1");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "wf_1");
        storage.set_available(false);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_context(), InputContext::SettingsOpen);
        assert_eq!(app.notice(), Some(&Notice::error(UNAVAILABLE_NOTICE)));
        assert!(!app.session().is_active());
    }

    #[test]
    fn test_paste_into_focused_field() {
        let mut app = loaded(InMemoryStorage::new());
        app.handle_paste("sk-pasted\n");
        assert_eq!(app.settings().unwrap().draft().api_key, "sk-pasted");
    }

    #[test]
    fn test_toggle_secret() {
        let mut app = loaded(InMemoryStorage::new());
        ctrl(&mut app, 'r');
        assert!(app.settings().unwrap().shows_secret());
    }
}
