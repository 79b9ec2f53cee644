//! Concrete storage backends for [`KeyValueStorage`](crate::traits::KeyValueStorage).
//!
//! - [`JsonFileStorage`] - production backend, one JSON object file
//! - [`InMemoryStorage`] - in-process fake with failure injection for tests

pub mod file;
pub mod memory;

pub use file::JsonFileStorage;
pub use memory::InMemoryStorage;
