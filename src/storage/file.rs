//! File-backed key/value store
//!
//! Each key is one file inside the root directory. Writes go to a temp file
//! first and are renamed into place.

use crate::storage::{get_data_dir, KeyValueStore, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the application data directory
    pub fn in_data_dir() -> Result<Self, StorageError> {
        Ok(Self::new(get_data_dir()?))
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;

        let temp_path = self.root.join(format!(".{}.tmp", key));
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_reads_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.read("quotes").unwrap(), None);
    }

    #[test]
    fn test_write_creates_directory_and_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("data");

        FileStore::new(&root).write("quotes", "[]").unwrap();

        let reopened = FileStore::new(&root);
        assert_eq!(reopened.read("quotes").unwrap().as_deref(), Some("[]"));
        assert!(!root.join(".quotes.tmp").exists());
    }

    #[test]
    fn test_write_replaces_value() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        store.write("lastSelectedCategory", "Life").unwrap();
        store.write("lastSelectedCategory", "all").unwrap();
        assert_eq!(
            store.read("lastSelectedCategory").unwrap().as_deref(),
            Some("all")
        );
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(
                store.write(key, "x"),
                Err(StorageError::InvalidKey(_))
            ));
        }
    }
}
