//! Binary file stores
//!
//! Byte-for-byte sibling of the text file stores, for pipelines whose
//! storage type is raw bytes (compressed or encrypted payloads, say).

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

/// Synchronous store keeping the entity in a binary file
#[derive(Debug, Clone)]
pub struct BinaryFileStore {
    path: PathBuf,
}

impl BinaryFileStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store<Vec<u8>> for BinaryFileStore {
    fn create(&self, value: Vec<u8>) -> Result<(), StorageError> {
        writer::create_new(&self.path, &value).map_err(map_create_err)
    }

    fn read(&self) -> Result<Vec<u8>, StorageError> {
        std::fs::read(&self.path).map_err(map_read_err)
    }

    fn update(&self, value: Vec<u8>) -> Result<(), StorageError> {
        writer::atomic_write(&self.path, &value).map_err(StorageError::Io)
    }

    fn delete(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io(err)),
        }
    }
}

/// Async store keeping the entity in a binary file
#[derive(Debug, Clone)]
pub struct AsyncBinaryFileStore {
    path: PathBuf,
}

impl AsyncBinaryFileStore {
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
impl AsyncStore<Vec<u8>> for AsyncBinaryFileStore {
    async fn create(&self, value: Vec<u8>) -> Result<(), StorageError> {
        writer::create_new_async(&self.path, &value)
            .await
            .map_err(map_create_err)
    }

    async fn read(&self) -> Result<Vec<u8>, StorageError> {
        tokio::fs::read(&self.path).await.map_err(map_read_err)
    }

    async fn update(&self, value: Vec<u8>) -> Result<(), StorageError> {
        writer::atomic_write_async(&self.path, &value)
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
