//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let storage = valid_storage();
//! let app = loaded_app(storage.clone());
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use chatdeck::adapters::InMemoryStorage;
use chatdeck::app::App;
use chatdeck::credentials::{API_KEY_STORAGE, WORKFLOW_ID_STORAGE, WORKFLOW_VERSION_STORAGE};
use chatdeck::traits::KeyValueStorage;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const TEST_API_KEY: &str = "sk-test-abcdefghijklmnop-1234";
pub const TEST_WORKFLOW_ID: &str = "wf_test_workflow";

/// Storage holding a valid key, id and version 3.
pub fn valid_storage() -> InMemoryStorage {
    InMemoryStorage::with_entries([
        (API_KEY_STORAGE, TEST_API_KEY),
        (WORKFLOW_ID_STORAGE, TEST_WORKFLOW_ID),
        (WORKFLOW_VERSION_STORAGE, "3"),
    ])
}

/// An app whose store has been hydrated by one tick.
pub fn loaded_app<S: KeyValueStorage>(storage: S) -> App<S> {
    let mut app = App::new(storage);
    app.tick();
    app
}

pub fn press<S: KeyValueStorage>(app: &mut App<S>, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn ctrl<S: KeyValueStorage>(app: &mut App<S>, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

pub fn type_text<S: KeyValueStorage>(app: &mut App<S>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
