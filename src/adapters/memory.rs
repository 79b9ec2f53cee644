//! In-memory storage backend.
//!
//! Clones share the same underlying map, so a test can hand one clone to a
//! [`CredentialStore`](crate::credentials::CredentialStore) and keep another
//! to inspect or sabotage the durable state.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{KeyValueStorage, StorageError};

#[derive(Debug, Default)]
struct Inner {
    entries: BTreeMap<String, String>,
    unavailable: bool,
    failing_keys: BTreeSet<String>,
    writes: usize,
}

/// Shared in-memory key/value storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryStorage {
    /// Create empty, available storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-populated with entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let storage = Self::new();
        {
            let mut inner = storage.lock();
            for (k, v) in entries {
                inner.entries.insert(k.into(), v.into());
            }
        }
        storage
    }

    /// Create storage that reports itself unavailable.
    pub fn unavailable() -> Self {
        let storage = Self::new();
        storage.set_available(false);
        storage
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Toggle availability of the whole backend.
    pub fn set_available(&self, available: bool) {
        self.lock().unavailable = !available;
    }

    /// Make every write or delete of `key` fail with an IO error.
    pub fn fail_writes_for(&self, key: &str) {
        self.lock().failing_keys.insert(key.to_string());
    }

    /// Stop injecting failures.
    pub fn heal(&self) {
        self.lock().failing_keys.clear();
    }

    /// Read an entry without going through the trait.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of successful writes and deletes so far.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn check_write(inner: &Inner, key: &str) -> Result<(), StorageError> {
        if inner.unavailable {
            return Err(StorageError::Unavailable);
        }
        if inner.failing_keys.contains(key) {
            return Err(StorageError::Io(format!("injected failure for {}", key)));
        }
        Ok(())
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.lock();
        if inner.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(inner.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        Self::check_write(&inner, key)?;
        inner.entries.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        Self::check_write(&inner, key)?;
        inner.entries.remove(key);
        inner.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let storage = InMemoryStorage::new();
        let mut handle = storage.clone();

        handle.set("a", "1").unwrap();
        assert_eq!(storage.peek("a"), Some("1".to_string()));
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_with_entries() {
        let storage = InMemoryStorage::with_entries([("a", "1"), ("b", "2")]);
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get("b").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn test_unavailable_rejects_everything() {
        let mut storage = InMemoryStorage::unavailable();
        assert_eq!(storage.get("a"), Err(StorageError::Unavailable));
        assert_eq!(storage.set("a", "1"), Err(StorageError::Unavailable));
        assert_eq!(storage.delete("a"), Err(StorageError::Unavailable));

        storage.set_available(true);
        assert!(storage.set("a", "1").is_ok());
    }

    #[test]
    fn test_injected_failure_is_per_key() {
        let mut storage = InMemoryStorage::new();
        storage.fail_writes_for("bad");

        assert!(matches!(storage.set("bad", "x"), Err(StorageError::Io(_))));
        assert!(storage.set("good", "x").is_ok());
        assert_eq!(storage.peek("bad"), None);

        storage.heal();
        assert!(storage.set("bad", "x").is_ok());
    }
}
