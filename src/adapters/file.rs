//! JSON file storage backend.
//!
//! All entries live in a single `settings.json` object inside the data
//! directory. Each write replaces the file through a temporary sibling and a
//! rename, so a crash mid-write never leaves a truncated file behind.

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::traits::{KeyValueStorage, StorageError};

/// The settings file name inside the data directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Key/value storage persisted as a flat JSON object.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    /// Path to the settings file, `None` when no data directory is known.
    path: Option<PathBuf>,
}

impl JsonFileStorage {
    /// Create storage rooted in `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: Some(data_dir.as_ref().join(SETTINGS_FILE)),
        }
    }

    /// Create storage with no backing directory.
    ///
    /// Every operation reports [`StorageError::Unavailable`].
    pub fn detached() -> Self {
        Self { path: None }
    }

    /// Create storage from an optional data directory.
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        match data_dir {
            Some(dir) => Self::in_dir(dir),
            None => Self::detached(),
        }
    }

    /// Get the path to the settings file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn require_path(&self) -> Result<&Path, StorageError> {
        self.path.as_deref().ok_or(StorageError::Unavailable)
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let path = self.require_path()?;
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let raw = fs::read_to_string(path)?;
        match serde_json::from_str(&raw) {
            Ok(map) => Ok(map),
            Err(e) => {
                // Same policy as an unreadable credentials file: start over.
                tracing::warn!("Ignoring unreadable settings file {:?}: {}", path, e);
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let path = self.require_path()?;
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = path.with_extension("json.tmp");
        {
            let file = fs::File::create(&tmp_path)?;
            restrict_permissions(&file)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, map)?;
            writer.flush()?;
        }
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}

impl KeyValueStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_map(&map)
    }
}
