//! Key/value storage trait abstraction.
//!
//! Durable state is reached only through [`KeyValueStorage`], so the
//! credential store can run against the JSON file backend in production
//! and an in-memory fake in tests.

/// Storage operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The durable layer cannot be reached right now (no data directory,
    /// storage detached). Callers treat this as "try again later".
    Unavailable,
    /// IO error while reading or writing the backing store
    Io(String),
    /// The backing store holds data that could not be (de)serialized
    Serialization(String),
}

impl StorageError {
    /// Whether this error only means the layer is not reachable yet.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StorageError::Unavailable)
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage is unavailable"),
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Trait for string-keyed scalar storage.
///
/// Every entry is an independent string value. Implementations must make
/// each `set`/`delete` durable before returning `Ok`.
///
/// # Example
///
/// ```ignore
/// use chatdeck::traits::KeyValueStorage;
///
/// fn remember<S: KeyValueStorage>(storage: &mut S) -> Result<(), StorageError> {
///     if storage.get("greeting")?.is_none() {
///         storage.set("greeting", "hello")?;
///     }
///     Ok(())
/// }
/// ```
pub trait KeyValueStorage {
    /// Read an entry.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the entry exists
    /// - `Ok(None)` if it does not
    /// - `Err(error)` if the storage could not be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write an entry, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove an entry. Removing a missing entry is not an error.
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "Storage is unavailable"
        );
        assert_eq!(
            StorageError::Io("disk full".to_string()).to_string(),
            "IO error: disk full"
        );
        assert_eq!(
            StorageError::Serialization("invalid json".to_string()).to_string(),
            "Serialization error: invalid json"
        );
    }

    #[test]
    fn test_storage_error_is_unavailable() {
        assert!(StorageError::Unavailable.is_unavailable());
        assert!(!StorageError::Io("x".to_string()).is_unavailable());
    }

    #[test]
    fn test_storage_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StorageError = io.into();
        assert!(matches!(err, StorageError::Io(ref msg) if msg.contains("denied")));
    }

    #[test]
    fn test_storage_error_implements_error_trait() {
        let err = StorageError::Unavailable;
        let _: &dyn std::error::Error = &err;
    }
}
