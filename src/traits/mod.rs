//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`KeyValueStorage`] - durable string key/value storage behind the credential store

pub mod storage;

pub use storage::{KeyValueStorage, StorageError};
