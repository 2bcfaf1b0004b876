//! Store port - synchronous single-entity CRUD backend
//!
//! The store holds exactly one entity; there are no keys and no
//! collections, so `read` and `delete` take no identifier.

use crate::error::StorageError;

/// Boxed store, as held by the sync composer
pub type BoxStore<T> = Box<dyn Store<T>>;

/// Synchronous CRUD surface over the stored representation
///
/// Implementations know nothing about the pipeline; they receive and
/// return fully shaped storage values. Methods take `&self` so a store
/// can be shared; backends that mutate use interior mutability.
pub trait Store<T> {
    /// Persist a new entity; fails if the store already holds one
    fn create(&self, value: T) -> Result<(), StorageError>;

    /// Retrieve the stored entity
    fn read(&self) -> Result<T, StorageError>;

    /// Replace the stored entity
    fn update(&self, value: T) -> Result<(), StorageError>;

    /// Remove the stored entity
    fn delete(&self) -> Result<(), StorageError>;
}
