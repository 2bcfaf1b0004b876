//! Text file stores
//!
//! One UTF-8 file per store, holding the single entity. `create` refuses
//! an existing file, `update` replaces it atomically, `delete` is a no-op
//! when the file is already gone.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::ports::{AsyncStore, Store};
use crate::error::StorageError;
use crate::infrastructure::stores::writer;

fn map_create_err(err: std::io::Error) -> StorageError {
    match err.kind() {
        ErrorKind::AlreadyExists => StorageError::AlreadyExists,
        _ => StorageError::Io(err),
    }
}

fn map_read_err(err: std::io::Error) -> StorageError {
    match err.kind() {
        ErrorKind::NotFound => StorageError::NotFound,
        _ => StorageError::Io(err),
    }
}

/// Synchronous store keeping the entity in a UTF-8 text file
#[derive(Debug, Clone)]
pub struct TextFileStore {
    path: PathBuf,
}

impl TextFileStore {
    /// Create a store backed by `path`; the file itself is only created
    /// by the first `create` or `update`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store<String> for TextFileStore {
    fn create(&self, value: String) -> Result<(), StorageError> {
        writer::create_new(&self.path, value.as_bytes()).map_err(map_create_err)
    }

    fn read(&self) -> Result<String, StorageError> {
        std::fs::read_to_string(&self.path).map_err(map_read_err)
    }

    fn update(&self, value: String) -> Result<(), StorageError> {
        writer::atomic_write(&self.path, value.as_bytes()).map_err(StorageError::Io)
    }

    fn delete(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io(err)),
        }
    }
}

/// Async store keeping the entity in a UTF-8 text file
#[derive(Debug, Clone)]
pub struct AsyncTextFileStore {
    path: PathBuf,
}

impl AsyncTextFileStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AsyncStore<String> for AsyncTextFileStore {
    async fn create(&self, value: String) -> Result<(), StorageError> {
        writer::create_new_async(&self.path, value.as_bytes())
            .await
            .map_err(map_create_err)
    }

    async fn read(&self) -> Result<String, StorageError> {
        tokio::fs::read_to_string(&self.path).await.map_err(map_read_err)
    }

    async fn update(&self, value: String) -> Result<(), StorageError> {
        writer::atomic_write_async(&self.path, value.as_bytes())
            .await
            .map_err(StorageError::Io)
    }

    async fn delete(&self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn create_read_update_delete() {
        let dir = tempdir().unwrap();
        let store = TextFileStore::new(dir.path().join("entity.txt"));

        store.create("one".to_string()).unwrap();
        assert_eq!(store.read().unwrap(), "one");

        store.update("two".to_string()).unwrap();
        assert_eq!(store.read().unwrap(), "two");

        store.delete().unwrap();
        assert!(matches!(store.read(), Err(StorageError::NotFound)));
    }

    #[test]
    fn create_fails_when_file_exists() {
        let dir = tempdir().unwrap();
        let store = TextFileStore::new(dir.path().join("entity.txt"));

        store.create("one".to_string()).unwrap();
        assert!(matches!(
            store.create("two".to_string()),
            Err(StorageError::AlreadyExists)
        ));
        // The original content survives the rejected create.
        assert_eq!(store.read().unwrap(), "one");
    }

    #[test]
    fn update_writes_through_missing_file() {
        let dir = tempdir().unwrap();
        let store = TextFileStore::new(dir.path().join("deep").join("entity.txt"));

        store.update("fresh".to_string()).unwrap();
        assert_eq!(store.read().unwrap(), "fresh");
    }

    #[test]
    fn delete_missing_file_is_ok() {
        let dir = tempdir().unwrap();
        let store = TextFileStore::new(dir.path().join("entity.txt"));
        store.delete().unwrap();
    }

    #[tokio::test]
    async fn async_store_round_trips() {
        let dir = tempdir().unwrap();
        let store = AsyncTextFileStore::new(dir.path().join("entity.txt"));

        store.create("one".to_string()).await.unwrap();
        assert_eq!(store.read().await.unwrap(), "one");

        store.update("two".to_string()).await.unwrap();
        assert_eq!(store.read().await.unwrap(), "two");

        store.delete().await.unwrap();
        assert!(matches!(store.read().await, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn async_create_fails_when_file_exists() {
        let dir = tempdir().unwrap();
        let store = AsyncTextFileStore::new(dir.path().join("entity.txt"));

        store.create("one".to_string()).await.unwrap();
        assert!(matches!(
            store.create("two".to_string()).await,
            Err(StorageError::AlreadyExists)
        ));
    }
}
