//! In-memory store
//!
//! A single `Mutex`-guarded slot. Useful as a test double and for
//! ephemeral pipelines; implements both the sync and async ports.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{AsyncStore, Store};
use crate::error::StorageError;

/// Single-slot store holding the entity in memory
///
/// Clones share the slot, so a test can keep a handle to the backing
/// store while the composer owns another.
#[derive(Debug)]
pub struct InMemoryStore<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<T>>, StorageError> {
        self.slot
            .lock()
            .map_err(|_| StorageError::Backend("slot mutex poisoned".to_string()))
    }
}

impl<T> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T: Clone> Store<T> for InMemoryStore<T> {
    fn create(&self, value: T) -> Result<(), StorageError> {
        let mut slot = self.lock()?;
        if slot.is_some() {
            return Err(StorageError::AlreadyExists);
        }
        *slot = Some(value);
        Ok(())
    }

    fn read(&self) -> Result<T, StorageError> {
        self.lock()?.clone().ok_or(StorageError::NotFound)
    }

    fn update(&self, value: T) -> Result<(), StorageError> {
        *self.lock()? = Some(value);
        Ok(())
    }

    fn delete(&self) -> Result<(), StorageError> {
        *self.lock()? = None;
        Ok(())
    }
}

#[async_trait]
impl<T: Clone + Send> AsyncStore<T> for InMemoryStore<T> {
    async fn create(&self, value: T) -> Result<(), StorageError> {
        Store::create(self, value)
    }

    async fn read(&self) -> Result<T, StorageError> {
        Store::read(self)
    }

    async fn update(&self, value: T) -> Result<(), StorageError> {
        Store::update(self, value)
    }

    async fn delete(&self) -> Result<(), StorageError> {
        Store::delete(self)
    }
}
