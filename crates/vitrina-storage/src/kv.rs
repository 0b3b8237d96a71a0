//! Typed store wrapper with automatic serialization.

use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};

use crate::backend::{Backend, FileBackend, MemoryBackend};
use crate::StorageError;

/// Type-safe key-value store over a raw [`Backend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`, plus raw-text access for values
/// that are stored as bare strings (the theme preference).
pub struct Store {
    backend: Box<dyn Backend>,
}

impl Store {
    /// Create a store over an explicit backend.
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Create an in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Create a file-backed store rooted at `root`.
    pub fn on_disk(root: impl Into<PathBuf>) -> Self {
        Self::new(FileBackend::new(root))
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist. Stored text that fails to
    /// deserialize is reported as [`StorageError::Serialize`]; what to do
    /// about corrupt data is the caller's policy decision.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.read(key)? {
            Some(text) => {
                let value: T = serde_json::from_str(&text)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the store, replacing any previous value.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let text = serde_json::to_string(value)?;
        self.backend.write(key, &text)
    }

    /// Get a bare string value from the store.
    pub fn get_text(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.backend.read(key)
    }

    /// Set a bare string value in the store.
    pub fn set_text(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.backend.write(key, value)
    }

    /// Delete a value from the store.
    pub fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.backend.read(key)?.is_some())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        id: u32,
        title: String,
    }

    #[test]
    fn test_typed_roundtrip() {
        let mut store = Store::in_memory();
        let value = vec![Snapshot {
            id: 1,
            title: "iPhone".to_string(),
        }];

        store.set("favorites", &value).unwrap();
        let loaded: Option<Vec<Snapshot>> = store.get("favorites").unwrap();
        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn test_get_missing_key() {
        let store = Store::in_memory();
        let loaded: Option<Vec<Snapshot>> = store.get("favorites").unwrap();
        assert_eq!(loaded, None);
        assert!(!store.exists("favorites").unwrap());
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let mut store = Store::in_memory();
        store.set_text("favorites", "{not json").unwrap();

        let result: Result<Option<Vec<Snapshot>>, _> = store.get("favorites");
        assert!(matches!(result, Err(StorageError::Serialize(_))));
    }

    #[test]
    fn test_text_roundtrip() {
        let mut store = Store::in_memory();
        store.set_text("theme", "dark").unwrap();
        assert_eq!(store.get_text("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_delete() {
        let mut store = Store::in_memory();
        store.set_text("theme", "dark").unwrap();
        store.delete("theme").unwrap();
        assert_eq!(store.get_text("theme").unwrap(), None);
    }

    #[test]
    fn test_disk_store_survives_reload() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = Store::on_disk(dir.path());
        store
            .set(
                "favorites",
                &vec![Snapshot {
                    id: 7,
                    title: "Tablet".to_string(),
                }],
            )
            .unwrap();
        drop(store);

        let reopened = Store::on_disk(dir.path());
        let loaded: Option<Vec<Snapshot>> = reopened.get("favorites").unwrap();
        assert_eq!(loaded.map(|v| v.len()), Some(1));
    }
}
