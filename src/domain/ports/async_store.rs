//! Async store port - deferred single-entity CRUD backend
//!
//! Same contract as [`Store`], for IO-bound backends. The pipeline's only
//! suspension point is the single call into this port.
//!
//! [`Store`]: crate::domain::ports::store::Store

use async_trait::async_trait;

use crate::error::StorageError;

/// Boxed async store, as held by the async composer
pub type BoxAsyncStore<T> = Box<dyn AsyncStore<T>>;

/// Asynchronous CRUD surface over the stored representation
#[async_trait]
pub trait AsyncStore<T: Send>: Send + Sync {
    /// Persist a new entity; fails if the store already holds one
    async fn create(&self, value: T) -> Result<(), StorageError>;

    /// Retrieve the stored entity
    async fn read(&self) -> Result<T, StorageError>;

    /// Replace the stored entity
    async fn update(&self, value: T) -> Result<(), StorageError>;

    /// Remove the stored entity
    async fn delete(&self) -> Result<(), StorageError>;
}
