//! Storage mocks for integration tests.

use std::collections::HashMap;

use chatdeck::traits::{KeyValueStorage, StorageError};

/// Records every write in order and fails one chosen call.
#[derive(Debug, Default)]
pub struct RecordingStorage {
    pub entries: HashMap<String, String>,
    /// `("set", key)` / `("delete", key)` in call order
    pub calls: Vec<(&'static str, String)>,
    /// 1-based index of the write call that fails with an IO error
    pub fail_on_call: Option<usize>,
}

impl RecordingStorage {
    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::default()
        }
    }

    fn record(&mut self, op: &'static str, key: &str) -> Result<(), StorageError> {
        self.calls.push((op, key.to_string()));
        if self.fail_on_call == Some(self.calls.len()) {
            return Err(StorageError::Io("injected failure".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStorage for RecordingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.record("set", key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.record("delete", key)?;
        self.entries.remove(key);
        Ok(())
    }
}
