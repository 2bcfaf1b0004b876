//! Layered store - synchronous pipeline composer
//!
//! Wraps a [`Store`] over the storage type with a [`TransformChain`] and
//! exposes the same CRUD surface over the entity type.

use crate::domain::ports::{BoxStore, Layer, Serializer, Store};
use crate::error::PipelineResult;
use crate::pipeline::chain::TransformChain;

/// CRUD over the entity type, backed by a store over the storage type
///
/// Each call is an independent run of a fixed linear pipeline; the store,
/// serializer, and layer lists are fixed at construction and no state is
/// kept between calls.
///
/// ```
/// use laminate::{InMemoryStore, JsonSerializer, LayeredStore};
///
/// let store: LayeredStore<u32, String> =
///     LayeredStore::new(InMemoryStore::new(), JsonSerializer::new());
/// store.create(7).unwrap();
/// assert_eq!(store.read().unwrap(), 7);
/// ```
pub struct LayeredStore<I, O> {
    store: BoxStore<O>,
    chain: TransformChain<I, O>,
}

impl<I, O> LayeredStore<I, O> {
    /// Create a composer with no layers
    pub fn new(store: impl Store<O> + 'static, serializer: impl Serializer<I, O> + 'static) -> Self {
        Self {
            store: Box::new(store),
            chain: TransformChain::new(serializer),
        }
    }

    /// Append an entity-typed layer; runs before serialization on write
    ///
    /// Layers are applied in the order they are added, and inverted in the
    /// opposite order on read.
    pub fn with_pre_layer(mut self, layer: impl Layer<I> + 'static) -> Self {
        self.chain.push_pre(layer);
        self
    }

    /// Append a storage-typed layer; runs after serialization on write
    pub fn with_post_layer(mut self, layer: impl Layer<O> + 'static) -> Self {
        self.chain.push_post(layer);
        self
    }

    /// Transform the entity through the write pipeline and store it
    pub fn create(&self, entity: I) -> PipelineResult<()> {
        tracing::debug!(
            pre = self.chain.pre_len(),
            post = self.chain.post_len(),
            "create: running write pipeline"
        );
        let stored = self.chain.encode(entity)?;
        self.store.create(stored)?;
        Ok(())
    }

    /// Fetch the stored value and transform it through the read pipeline
    pub fn read(&self) -> PipelineResult<I> {
        tracing::debug!(
            pre = self.chain.pre_len(),
            post = self.chain.post_len(),
            "read: running read pipeline"
        );
        let stored = self.store.read()?;
        self.chain.decode(stored)
    }

    /// Transform the entity through the write pipeline and replace the
    /// stored value
    pub fn update(&self, entity: I) -> PipelineResult<()> {
        tracing::debug!(
            pre = self.chain.pre_len(),
            post = self.chain.post_len(),
            "update: running write pipeline"
        );
        let stored = self.chain.encode(entity)?;
        self.store.update(stored)?;
        Ok(())
    }

    /// Remove the stored value
    ///
    /// Pure delegation: there is no value to transform, so neither the
    /// layers nor the serializer are invoked.
    pub fn delete(&self) -> PipelineResult<()> {
        tracing::debug!("delete: bypassing pipeline");
        self.store.delete()?;
        Ok(())
    }
}
