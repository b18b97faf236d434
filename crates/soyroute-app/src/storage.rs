//! Durable key-value storage for the page
//!
//! Only one key is used today ([`LAST_VIEW_KEY`]). The file-backed store
//! keeps every value in a single TOML table and rewrites it atomically on
//! each change.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use soyroute_core::prelude::*;

/// Key holding the id of the last selected view
pub const LAST_VIEW_KEY: &str = "last_view";

const STORAGE_FILENAME: &str = "storage.toml";
const STORAGE_TEMP_FILENAME: &str = ".storage.toml.tmp";

/// Get/set string storage scoped to the local user
pub trait KeyValueStore: Send + std::fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store, used by tests and as a fallback
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
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

#[derive(Debug, Default, Deserialize, Serialize)]
struct StorageFile {
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// Store persisted to `<dir>/storage.toml`
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store in `dir`.
    ///
    /// A missing or unreadable file yields an empty store; the first write
    /// creates it.
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(STORAGE_FILENAME);
        let values = if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str::<StorageFile>(&content) {
                    Ok(file) => {
                        debug!("Loaded storage from {:?}", path);
                        file.values
                    }
                    Err(e) => {
                        warn!("Failed to parse {:?}: {}", path, e);
                        BTreeMap::new()
                    }
                },
                Err(e) => {
                    warn!("Failed to read {:?}: {}", path, e);
                    BTreeMap::new()
                }
            }
        } else {
            debug!("No storage file at {:?}", path);
            BTreeMap::new()
        };

        Self {
            dir: dir.to_path_buf(),
            values,
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(STORAGE_FILENAME)
    }

    /// Atomic write: temp file + rename
    fn flush(&self) -> Result<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|e| {
                Error::storage(format!("Failed to create {:?}: {}", self.dir, e))
            })?;
        }

        let file = StorageFile {
            values: self.values.clone(),
        };
        let content = toml::to_string_pretty(&file)
            .map_err(|e| Error::storage(format!("Failed to serialize storage: {}", e)))?;
        let full_content = format!(
            "# soyroute page storage (managed automatically)\n\n{}",
            content
        );

        let temp_path = self.dir.join(STORAGE_TEMP_FILENAME);
        std::fs::write(&temp_path, full_content)
            .map_err(|e| Error::storage(format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, self.path())
            .map_err(|e| Error::storage(format!("Failed to rename temp file: {}", e)))?;

        trace!("Saved storage to {:?}", self.path());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.flush()
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(LAST_VIEW_KEY), None);
        store.set(LAST_VIEW_KEY, "dashboard").unwrap();
        assert_eq!(store.get(LAST_VIEW_KEY).as_deref(), Some("dashboard"));
        store.remove(LAST_VIEW_KEY).unwrap();
        assert_eq!(store.get(LAST_VIEW_KEY), None);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp = tempdir().unwrap();
        let store = FileStore::open(temp.path());
        assert_eq!(store.get(LAST_VIEW_KEY), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let temp = tempdir().unwrap();
        let mut store = FileStore::open(temp.path());
        store.set(LAST_VIEW_KEY, "view-2").unwrap();

        let reopened = FileStore::open(temp.path());
        assert_eq!(reopened.get(LAST_VIEW_KEY).as_deref(), Some("view-2"));
    }

    #[test]
    fn test_file_store_creates_directory() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        let mut store = FileStore::open(&nested);
        store.set(LAST_VIEW_KEY, "view-0").unwrap();
        assert!(nested.join("storage.toml").exists());
        assert!(!nested.join(".storage.toml.tmp").exists());
    }

    #[test]
    fn test_file_store_invalid_toml_is_empty() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("storage.toml"), "values = [broken").unwrap();
        let store = FileStore::open(temp.path());
        assert_eq!(store.get(LAST_VIEW_KEY), None);
    }

    #[test]
    fn test_file_store_remove() {
        let temp = tempdir().unwrap();
        let mut store = FileStore::open(temp.path());
        store.set(LAST_VIEW_KEY, "view-1").unwrap();
        store.remove(LAST_VIEW_KEY).unwrap();

        let reopened = FileStore::open(temp.path());
        assert_eq!(reopened.get(LAST_VIEW_KEY), None);
    }

    #[test]
    fn test_file_store_keeps_unknown_keys() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join("storage.toml"),
            "[values]\ntheme = \"dark\"\n",
        )
        .unwrap();
        let mut store = FileStore::open(temp.path());
        store.set(LAST_VIEW_KEY, "dashboard").unwrap();

        let reopened = FileStore::open(temp.path());
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
        assert_eq!(reopened.get(LAST_VIEW_KEY).as_deref(), Some("dashboard"));
    }
}
