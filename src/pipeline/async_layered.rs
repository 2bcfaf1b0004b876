//! Async layered store - deferred pipeline composer
//!
//! Same algorithm as [`LayeredStore`], over an [`AsyncStore`]. The layer
//! and serializer steps stay synchronous in-memory transforms; the single
//! awaited call into the backend is the pipeline's only suspension point.
//!
//! [`LayeredStore`]: crate::pipeline::layered::LayeredStore

use crate::domain::ports::{AsyncStore, BoxAsyncStore, Layer, Serializer};
use crate::error::PipelineResult;
use crate::pipeline::chain::TransformChain;

/// CRUD over the entity type, backed by an async store
pub struct AsyncLayeredStore<I, O>
where
    O: Send,
{
    store: BoxAsyncStore<O>,
    chain: TransformChain<I, O>,
}

impl<I, O> AsyncLayeredStore<I, O>
where
    I: Send,
    O: Send,
{
    /// Create a composer with no layers
    pub fn new(
        store: impl AsyncStore<O> + 'static,
        serializer: impl Serializer<I, O> + 'static,
    ) -> Self {
        Self {
            store: Box::new(store),
            chain: TransformChain::new(serializer),
        }
    }

    /// Append an entity-typed layer; runs before serialization on write
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
    pub async fn create(&self, entity: I) -> PipelineResult<()> {
        tracing::debug!(
            pre = self.chain.pre_len(),
            post = self.chain.post_len(),
            "create: running write pipeline"
        );
        let stored = self.chain.encode(entity)?;
        self.store.create(stored).await?;
        Ok(())
    }

    /// Fetch the stored value and transform it through the read pipeline
    pub async fn read(&self) -> PipelineResult<I> {
        tracing::debug!(
            pre = self.chain.pre_len(),
            post = self.chain.post_len(),
            "read: running read pipeline"
        );
        let stored = self.store.read().await?;
        self.chain.decode(stored)
    }

    /// Transform the entity through the write pipeline and replace the
    /// stored value
    pub async fn update(&self, entity: I) -> PipelineResult<()> {
        tracing::debug!(
            pre = self.chain.pre_len(),
            post = self.chain.post_len(),
            "update: running write pipeline"
        );
        let stored = self.chain.encode(entity)?;
        self.store.update(stored).await?;
        Ok(())
    }

    /// Remove the stored value, bypassing the pipeline
    pub async fn delete(&self) -> PipelineResult<()> {
        tracing::debug!("delete: bypassing pipeline");
        self.store.delete().await?;
        Ok(())
    }
}
