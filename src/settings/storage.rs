//! Key-value storage backends for the preference document

use crate::io::configuration::{APP_DIR_NAME, STORAGE_FILE_EXTENSION, TEMP_FILE_EXTENSION};
use crate::io::error::{Result, storage_unavailable};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Synchronous string key-value storage
///
/// Single writer, last write wins. No change notification.
pub trait KeyValueStorage {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the backend can't be read
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the backend can't be written
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`; removing an absent key succeeds
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the backend can't be written
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process storage, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage holding a single value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.values.insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Storage keeping one `<key>.json` file per key under a root directory
///
/// Values are written to `<key>.json.tmp` first and renamed into place.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Use `root` as the storage directory; it is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage under the platform data directory
    ///
    /// - Linux: `~/.local/share/cubedrill/`
    /// - macOS: `~/Library/Application Support/cubedrill/`
    /// - Windows: `%APPDATA%\cubedrill\`
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the platform has no data directory
    pub fn default_location() -> Result<Self> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            storage_unavailable(APP_DIR_NAME, "locate", &"no platform data directory")
        })?;
        Ok(Self::new(data_dir.join(APP_DIR_NAME)))
    }

    /// Directory holding the stored files
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File a key is stored in
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.{STORAGE_FILE_EXTENSION}"))
    }

    /// File a value is written to before it replaces [`FileStorage::path_for`]
    pub fn temp_path_for(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{key}.{STORAGE_FILE_EXTENSION}.{TEMP_FILE_EXTENSION}"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_unavailable(key, "read", &e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| storage_unavailable(key, "write", &e))?;

        // The stored file is only ever replaced whole
        let temp_path = self.temp_path_for(key);
        fs::write(&temp_path, value).map_err(|e| storage_unavailable(key, "write", &e))?;
        fs::rename(&temp_path, self.path_for(key))
            .map_err(|e| storage_unavailable(key, "replace", &e))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_unavailable(key, "remove", &e)),
        }
    }
}
